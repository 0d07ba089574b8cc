mod builder;
mod classifier;
mod error;
pub mod features;
mod scaler;
mod svm;
mod tfidf;
mod utils;

pub use builder::ClassifierBuilder;
pub use classifier::Classifier;
pub use error::ClassifierError;
pub use features::{TitleFeatures, FEATURE_NAMES, FEATURE_SCHEMA_VERSION};
pub use scaler::MinMaxScaler;
pub use svm::LinearSvc;
pub use tfidf::TfidfVectorizer;
pub use utils::SparseRow;

/// Summary of a fitted classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierInfo {
    pub num_classes: usize,
    pub class_labels: Vec<String>,
    /// Number of TF-IDF terms kept after pruning
    pub vocabulary_size: usize,
    /// Total input dimension of the SVM, text and engineered features together
    pub num_features: usize,
}
