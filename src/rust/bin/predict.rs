use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use prodcat::{model_store, repl, DEFAULT_MODEL_PATH};

/// Interactive product category prediction
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to trained model
    #[arg(long, env = "PRODCAT_MODEL", default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,
}

fn main() -> anyhow::Result<()> {
    prodcat::init_logger();
    let args = Args::parse();

    let classifier = model_store::load_classifier(&args.model)
        .with_context(|| format!("Failed to load model from {:?}", args.model))?;
    info!("Model classes: {:?}", classifier.classes());
    println!("Model loaded. Type a product title (or 'quit' to exit).");

    let stdin = io::stdin();
    let count = repl::run(&classifier, stdin.lock(), io::stdout().lock())?;
    info!("Session ended after {} predictions", count);

    Ok(())
}
