use log::info;

use crate::classifier::{Classifier, ClassifierError};
use crate::config::TrainingConfig;
use crate::dataset::{self, Dataset};
use crate::metrics::ClassificationReport;

/// Outcome of one training run.
#[derive(Debug)]
pub struct TrainingReport {
    pub classifier: Classifier,
    pub report: ClassificationReport,
    pub train_size: usize,
    pub test_size: usize,
}

impl TrainingReport {
    pub fn accuracy(&self) -> f64 {
        self.report.accuracy
    }
}

/// Loads the configured CSV, then splits, fits and evaluates on it.
pub fn train_from_csv(config: &TrainingConfig) -> Result<TrainingReport, ClassifierError> {
    let dataset = dataset::load_products(&config.csv_path)?;
    train_and_evaluate(&dataset, config)
}

/// Splits `dataset`, fits a classifier on the train part and scores it on the rest.
pub fn train_and_evaluate(dataset: &Dataset, config: &TrainingConfig) -> Result<TrainingReport, ClassifierError> {
    let (train, test) = dataset::stratified_split(dataset, &config.split)?;

    let classifier = Classifier::builder()
        .with_tfidf_config(config.tfidf.clone())
        .with_svm_config(config.svm.clone())
        .add_examples(train.titles.iter().zip(&train.labels).map(|(t, l)| (t.as_str(), l.as_str())))
        .build()?;

    let predictions = classifier.predict_batch(&test.titles);
    let report = ClassificationReport::new(&test.labels, &predictions);
    info!("Held-out accuracy {:.4} on {} rows", report.accuracy, test.len());

    Ok(TrainingReport {
        classifier,
        report,
        train_size: train.len(),
        test_size: test.len(),
    })
}
