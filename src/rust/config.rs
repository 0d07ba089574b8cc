use std::path::PathBuf;

/// Default location of the training data.
pub const DEFAULT_CSV_PATH: &str = "products.csv";

/// Default location of the trained model, shared by trainer and predictor.
pub const DEFAULT_MODEL_PATH: &str = "model_product_category.pkl";

/// Settings for the TF-IDF text vectorizer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TfidfConfig {
    /// Smallest and largest n-gram length, inclusive
    pub ngram_range: (usize, usize),
    /// Terms must appear in at least this many documents
    pub min_df: usize,
    /// Terms appearing in more than this share of documents are dropped
    pub max_df: f64,
    pub lowercase: bool,
    pub strip_accents: bool,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            ngram_range: (1, 2),
            min_df: 2,
            max_df: 0.9,
            lowercase: true,
            strip_accents: true,
        }
    }
}

/// Settings for the one-vs-rest linear SVM.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SvmConfig {
    /// Inverse regularization strength
    pub c: f64,
    /// Stopping tolerance on the projected gradient spread
    pub tol: f64,
    pub max_iter: usize,
    /// Reweight classes inversely to their frequency
    pub balanced: bool,
    pub seed: u64,
}

impl Default for SvmConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            tol: 1e-4,
            max_iter: 5000,
            balanced: true,
            seed: 42,
        }
    }
}

/// Settings for the stratified train/test split.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    pub test_size: f64,
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            seed: 42,
        }
    }
}

/// Everything the trainer needs for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    pub csv_path: PathBuf,
    pub out_path: PathBuf,
    pub tfidf: TfidfConfig,
    pub svm: SvmConfig,
    pub split: SplitConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            out_path: PathBuf::from(DEFAULT_MODEL_PATH),
            tfidf: TfidfConfig::default(),
            svm: SvmConfig::default(),
            split: SplitConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrainingConfig::default();
        assert_eq!(config.csv_path, PathBuf::from("products.csv"));
        assert_eq!(config.out_path, PathBuf::from("model_product_category.pkl"));
        assert_eq!(config.tfidf.ngram_range, (1, 2));
        assert_eq!(config.tfidf.min_df, 2);
        assert_eq!(config.svm.max_iter, 5000);
        assert_eq!(config.split.seed, 42);
    }
}
