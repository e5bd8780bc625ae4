//! holdout CLI - Train/Test Splitting
//!
//! Command-line interface for inspecting datasets and writing holdout splits.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};

mod basic;
mod split;

/// holdout - Train/Test Splitting for Arrow Datasets
#[derive(Parser)]
#[command(name = "holdout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display dataset information
    Info {
        /// Path to dataset file
        path: PathBuf,
    },
    /// Display first N rows of a dataset
    Head {
        /// Path to dataset file
        path: PathBuf,
        /// Number of rows to display
        #[arg(short = 'n', long, default_value = "10")]
        rows: usize,
    },
    /// Display dataset schema
    Schema {
        /// Path to dataset file
        path: PathBuf,
    },
    /// Split a dataset into train and test files
    Split {
        /// Input dataset (CSV/Parquet/JSON)
        input: PathBuf,
        /// Where to write the training rows
        #[arg(long)]
        train_output: PathBuf,
        /// Where to write the test rows
        #[arg(long)]
        test_output: PathBuf,
        /// Fraction of rows for the test set [default: 0.2]
        #[arg(short = 'r', long, allow_negative_numbers = true)]
        test_ratio: Option<f64>,
        /// Seed for a random split [default: 42]
        #[arg(short, long, conflicts_with = "id_column")]
        seed: Option<u64>,
        /// Hash this identifier column instead of shuffling
        #[arg(long)]
        id_column: Option<String>,
        /// JSON split configuration; flags override its fields
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Run the holdout CLI.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { path } => basic::cmd_info(&path),
        Commands::Head { path, rows } => basic::cmd_head(&path, rows),
        Commands::Schema { path } => basic::cmd_schema(&path),
        Commands::Split {
            input,
            train_output,
            test_output,
            test_ratio,
            seed,
            id_column,
            config,
        } => split::SplitOverrides {
            config,
            test_ratio,
            seed,
            id_column,
        }
        .resolve()
        .and_then(|split_config| {
            split::cmd_split(&input, &train_output, &test_output, &split_config)
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
