use serde::{Deserialize, Serialize};

use super::features;
use super::scaler::MinMaxScaler;
use super::svm::LinearSvc;
use super::tfidf::TfidfVectorizer;
use super::utils::SparseRow;

/// A fitted product-title classifier: TF-IDF text features and scaled
/// engineered features, concatenated and fed to a one-vs-rest linear SVM.
///
/// The classifier is immutable once built and therefore `Send + Sync`; share
/// it across threads with `Arc` if needed.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use prodcat::Classifier;
///
/// let classifier = Classifier::builder()
///     .add_examples(vec![
///         ("Samsung Galaxy smartphone 128GB", "Mobile Phones"),
///         ("Apple iPhone smartphone 64GB", "Mobile Phones"),
///         ("Bosch fridge freezer frost free", "Fridges"),
///         ("Beko fridge freezer 300L", "Fridges"),
///     ])
///     .build()?;
///
/// println!("{}", classifier.predict("Nokia smartphone 32GB"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classifier {
    pub(crate) vectorizer: TfidfVectorizer,
    pub(crate) scaler: MinMaxScaler,
    pub(crate) svm: LinearSvc,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl Classifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the fitted classifier
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            num_classes: self.svm.classes().len(),
            class_labels: self.svm.classes().to_vec(),
            vocabulary_size: self.vectorizer.vocabulary_size(),
            num_features: self.svm.n_features(),
        }
    }

    /// Predicts the category of a single title.
    pub fn predict(&self, title: &str) -> &str {
        self.svm.predict(&self.featurize(title))
    }

    pub fn predict_batch<S: AsRef<str>>(&self, titles: &[S]) -> Vec<String> {
        titles
            .iter()
            .map(|t| self.predict(t.as_ref()).to_string())
            .collect()
    }

    /// Raw SVM margins for a title, paired with the class each margin favors.
    ///
    /// With two classes there is a single margin; positive values favor the
    /// second class.
    pub fn decision_function(&self, title: &str) -> Vec<(String, f64)> {
        let scores = self.svm.decision_function(&self.featurize(title));
        let classes = self.svm.classes();
        let favored: &[String] = if classes.len() == 2 { &classes[1..] } else { classes };
        favored.iter().cloned().zip(scores).collect()
    }

    /// The sorted list of labels this classifier can emit.
    pub fn classes(&self) -> &[String] {
        self.svm.classes()
    }

    pub(crate) fn featurize(&self, title: &str) -> SparseRow {
        combined_row(&self.vectorizer, &self.scaler, title)
    }
}

/// Builds the combined feature row: TF-IDF columns first, then the scaled
/// engineered features.
pub(crate) fn combined_row(vectorizer: &TfidfVectorizer, scaler: &MinMaxScaler, title: &str) -> SparseRow {
    let offset = vectorizer.vocabulary_size();
    let mut row = vectorizer.transform(title);
    let scaled = scaler.transform(&features::extract(title));
    row.extend(scaled.iter().enumerate().map(|(j, &x)| (offset + j, x)));
    row
}
