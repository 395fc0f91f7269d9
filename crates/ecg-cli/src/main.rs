//! ECG Classifier CLI - classifies extracted ECG features with a pre-trained model.
//!
//! Usage:
//!   ecg-classifier data.csv
//!   ecg-classifier data.csv --model ecg_model/trained_model.json --format json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ecg_core::classify::classify_rows;
use ecg_core::model::{self, DEFAULT_MODEL_PATH};
use ecg_core::report::{print_results, OutputFormat};
use ecg_core::table::FeatureTable;

#[derive(Parser)]
#[command(name = "ecg-classifier")]
#[command(about = "Pre-trained Normal/Arrhythmia classifier for ECG feature CSVs")]
struct Cli {
    /// CSV file of extracted ECG features (32 numeric columns per row)
    csv: PathBuf,

    /// Path to the serialized model artifact
    #[arg(short, long, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    eprintln!("[*] Loading model from {}...", cli.model.display());
    let bundle = model::shared(&cli.model)?;

    let bytes = std::fs::read(&cli.csv)
        .with_context(|| format!("failed to read {}", cli.csv.display()))?;
    let table = FeatureTable::from_csv_bytes(&bytes)?;

    eprintln!("[*] Classifying {} rows...", table.num_rows());
    let rows = classify_rows(&table, bundle)?;

    print_results(&rows, cli.format);

    Ok(())
}
