use std::io;

/// Represents the different types of errors that can occur while training or using the classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// Error occurred while reading the training data
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Error occurred while parsing the training CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A required column is absent from the CSV header
    #[error("Missing required column: {0:?}")]
    MissingColumn(String),
    /// The data cannot be partitioned into stratified train/test sets
    #[error("Split error: {0}")]
    Split(String),
    /// Error occurred while fitting a pipeline stage
    #[error("Build error: {0}")]
    Build(String),
    /// Error occurred due to invalid input parameters
    #[error("Validation error: {0}")]
    Validation(String),
}
