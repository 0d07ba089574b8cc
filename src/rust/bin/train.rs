use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use prodcat::{model_store, training, SplitConfig, SvmConfig, TrainingConfig, DEFAULT_CSV_PATH, DEFAULT_MODEL_PATH};

/// Train product title -> category classifier
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to products.csv
    #[arg(long, default_value = DEFAULT_CSV_PATH)]
    csv: PathBuf,

    /// Path to save the trained model
    #[arg(long, default_value = DEFAULT_MODEL_PATH)]
    out: PathBuf,

    /// Share of rows held out for evaluation
    #[arg(long, default_value_t = 0.2)]
    test_size: f64,

    /// Seed for the split and the solver
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// SVM inverse regularization strength
    #[arg(long, default_value_t = 1.0)]
    c: f64,

    /// Maximum solver passes per class
    #[arg(long, default_value_t = 5000)]
    max_iter: usize,
}

impl Args {
    fn into_config(self) -> TrainingConfig {
        TrainingConfig {
            csv_path: self.csv,
            out_path: self.out,
            split: SplitConfig {
                test_size: self.test_size,
                seed: self.seed,
            },
            svm: SvmConfig {
                c: self.c,
                max_iter: self.max_iter,
                seed: self.seed,
                ..SvmConfig::default()
            },
            ..TrainingConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    prodcat::init_logger();
    let config = Args::parse().into_config();

    let start_time = Instant::now();
    info!("=== Training on {:?} ===", config.csv_path);

    let run = training::train_from_csv(&config)
        .with_context(|| format!("Training on {:?} failed", config.csv_path))?;
    info!(
        "Trained on {} rows, evaluated on {} (took {:.2?})",
        run.train_size,
        run.test_size,
        start_time.elapsed()
    );

    println!("Accuracy: {:.4}", run.accuracy());
    println!("Classification report:");
    println!("{}", run.report);

    model_store::save_classifier(&config.out_path, &run.classifier)
        .with_context(|| format!("Failed to save model to {:?}", config.out_path))?;
    println!("Saved model to: {}", config.out_path.display());

    Ok(())
}
