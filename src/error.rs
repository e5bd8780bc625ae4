//! Error types for holdout.

use std::path::PathBuf;

/// Result type alias for holdout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or splitting datasets.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred, if known.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Arrow error during data processing.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Parquet error during file operations.
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// JSON error while serializing a split configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Index out of bounds when selecting rows.
    #[error("Index {index} out of bounds for dataset with {len} rows")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The actual length of the dataset.
        len: usize,
    },

    /// Column not found in schema.
    #[error("Column '{name}' not found in schema")]
    ColumnNotFound {
        /// The name of the missing column.
        name: String,
    },

    /// An identifier value could not be coerced to a 64-bit integer.
    #[error("Cannot convert identifier in column '{column}' at row {row} to i64: {message}")]
    IdConversion {
        /// Name of the identifier column.
        column: String,
        /// Global row index of the offending value.
        row: usize,
        /// What went wrong with the value.
        message: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// Unsupported file format.
    #[error("Unsupported format: {format}")]
    UnsupportedFormat {
        /// The unsupported format name or extension.
        format: String,
    },

    /// A dataset was built from no batches at all.
    #[error("Dataset is empty")]
    EmptyDataset,

    /// Schema mismatch between datasets or batches.
    #[error("Schema mismatch: {message}")]
    SchemaMismatch {
        /// Description of the schema mismatch.
        message: String,
    },
}

impl Error {
    /// Create an I/O error with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create a column not found error.
    pub fn column_not_found(name: impl Into<String>) -> Self {
        Self::ColumnNotFound { name: name.into() }
    }

    /// Create an identifier conversion error.
    pub fn id_conversion(column: impl Into<String>, row: usize, message: impl Into<String>) -> Self {
        Self::IdConversion {
            column: column.into(),
            row,
            message: message.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an unsupported format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Create a schema mismatch error.
    pub fn schema_mismatch(message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            message: message.into(),
        }
    }
}
