use log::info;

use super::classifier::{combined_row, Classifier};
use super::error::ClassifierError;
use super::features::{self, NUM_FEATURES};
use super::scaler::MinMaxScaler;
use super::svm::LinearSvc;
use super::tfidf::TfidfVectorizer;
use super::utils::SparseRow;
use crate::config::{SvmConfig, TfidfConfig};

/// A builder for fitting a Classifier with a fluent interface.
#[derive(Default, Debug, Clone)]
pub struct ClassifierBuilder {
    titles: Vec<String>,
    labels: Vec<String>,
    tfidf_config: TfidfConfig,
    svm_config: SvmConfig,
}

impl ClassifierBuilder {
    /// Creates a new empty ClassifierBuilder instance with default configuration
    ///
    /// # Example
    /// ```
    /// use prodcat::ClassifierBuilder;
    ///
    /// let builder = ClassifierBuilder::new();
    /// ```
    pub fn new() -> Self {
        Self {
            titles: Vec::new(),
            labels: Vec::new(),
            tfidf_config: TfidfConfig::default(),
            svm_config: SvmConfig::default(),
        }
    }

    /// Sets the text vectorizer configuration
    ///
    /// # Example
    /// ```
    /// use prodcat::{ClassifierBuilder, TfidfConfig};
    ///
    /// let builder = ClassifierBuilder::new()
    ///     .with_tfidf_config(TfidfConfig { min_df: 1, ..TfidfConfig::default() });
    /// ```
    pub fn with_tfidf_config(mut self, config: TfidfConfig) -> Self {
        self.tfidf_config = config;
        self
    }

    /// Sets the SVM solver configuration
    pub fn with_svm_config(mut self, config: SvmConfig) -> Self {
        self.svm_config = config;
        self
    }

    /// Adds one labelled training title
    pub fn add_example(mut self, title: impl Into<String>, label: impl Into<String>) -> Self {
        self.titles.push(title.into());
        self.labels.push(label.into());
        self
    }

    /// Adds labelled training titles as `(title, label)` pairs
    pub fn add_examples<T, L>(mut self, examples: impl IntoIterator<Item = (T, L)>) -> Self
    where
        T: Into<String>,
        L: Into<String>,
    {
        for (title, label) in examples {
            self.titles.push(title.into());
            self.labels.push(label.into());
        }
        self
    }

    /// Fits the vectorizer, the scaler and the SVM on the collected examples.
    ///
    /// # Returns
    /// * `Result<Classifier, ClassifierError>` - The fitted classifier, or an error if:
    ///   - No examples were added, or a label is empty
    ///   - The vectorizer ends up with an empty vocabulary
    ///   - Fewer than two distinct labels were given
    pub fn build(self) -> Result<Classifier, ClassifierError> {
        if self.titles.is_empty() {
            return Err(ClassifierError::Validation("No training examples provided".into()));
        }
        if self.labels.iter().any(|l| l.is_empty()) {
            return Err(ClassifierError::Validation("Class label cannot be empty".into()));
        }
        info!("Fitting classifier on {} examples", self.titles.len());

        let vectorizer = TfidfVectorizer::fit(&self.tfidf_config, &self.titles)?;
        let engineered: Vec<_> = self.titles.iter().map(|t| features::extract(t)).collect();
        let scaler = MinMaxScaler::fit(&engineered)?;

        let rows: Vec<SparseRow> = self
            .titles
            .iter()
            .map(|title| combined_row(&vectorizer, &scaler, title))
            .collect();

        let n_features = vectorizer.vocabulary_size() + NUM_FEATURES;
        let svm = LinearSvc::fit(&self.svm_config, n_features, &rows, &self.labels)?;

        Ok(Classifier {
            vectorizer,
            scaler,
            svm,
        })
    }
}
