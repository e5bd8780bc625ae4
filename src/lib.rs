//! holdout - Train/Test Splitting for Arrow Datasets
//!
//! Carves a held-out test set out of a tabular dataset, either by a seeded
//! shuffle or by hashing a stable identifier column.
//!
//! # Design Principles
//!
//! 1. **Reproducible** - Same seed, same split, on every platform
//! 2. **Explicit randomness** - The generator is an argument, never global
//! 3. **Stable holdouts** - Identifier hashing never moves an existing row
//!    when the dataset grows
//! 4. **Ecosystem aligned** - Arrow 53, Parquet 53
//!
//! # Quick Start
//!
//! ```no_run
//! use holdout::{split_train_test_by_id, split_train_test_seeded, ArrowDataset, Dataset};
//!
//! let dataset = ArrowDataset::from_csv("data/housing.csv").unwrap();
//!
//! // Reproducible shuffle
//! let split = split_train_test_seeded(&dataset, 0.2, 42).unwrap();
//! println!("train={} test={}", split.train().len(), split.test().len());
//!
//! // Stable across dataset updates
//! let with_ids = dataset.with_row_index("id").unwrap();
//! let split = split_train_test_by_id(&with_ids, 0.2, "id").unwrap();
//! split.test().to_parquet("data/test.parquet").unwrap();
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::cast_lossless,
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        clippy::float_cmp,
        clippy::unreadable_literal
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]

/// CLI module for command-line interface
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dataset;
pub mod datasets;
pub mod error;
pub mod split;

// Re-export arrow types commonly needed
pub use arrow::{
    array::RecordBatch,
    datatypes::{Schema, SchemaRef},
};
pub use config::{SplitConfig, SplitStrategy};
pub use dataset::{ArrowDataset, CsvOptions, Dataset};
pub use error::{Error, Result};
pub use split::{
    split_train_test, split_train_test_by_id, split_train_test_seeded, DatasetSplit, SplitIndices,
};
