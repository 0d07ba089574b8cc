//! A product-title classifier: TF-IDF n-gram features plus five lexical
//! statistics, fed to a one-vs-rest linear SVM.
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use prodcat::Classifier;
//!
//! let classifier = Classifier::builder()
//!     .add_example("Samsung Galaxy smartphone 128GB", "Mobile Phones")
//!     .add_example("Apple iPhone smartphone 64GB", "Mobile Phones")
//!     .add_example("Bosch fridge freezer frost free", "Fridges")
//!     .add_example("Beko fridge freezer 300L", "Fridges")
//!     .build()?;
//!
//! let label = classifier.predict("Hisense fridge freezer");
//! println!("Predicted category: {}", label);
//! # Ok(())
//! # }
//! ```
//!
//! # Training from CSV and persisting
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use prodcat::{model_store, training, TrainingConfig};
//!
//! let config = TrainingConfig::default();
//! let run = training::train_from_csv(&config)?;
//! println!("Accuracy: {:.4}", run.accuracy());
//! model_store::save_classifier(&config.out_path, &run.classifier)?;
//!
//! let classifier = model_store::load_classifier(&config.out_path)?;
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod config;
pub mod dataset;
pub mod metrics;
pub mod model_store;
pub mod repl;
pub mod training;

pub use classifier::{Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, TitleFeatures};
pub use config::{SplitConfig, SvmConfig, TfidfConfig, TrainingConfig, DEFAULT_CSV_PATH, DEFAULT_MODEL_PATH};
pub use dataset::Dataset;
pub use metrics::ClassificationReport;
pub use model_store::{load_classifier, save_classifier, ModelError};

/// Installs env_logger, honoring `RUST_LOG` and defaulting to warnings only.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).try_init();
}
