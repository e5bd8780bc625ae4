//! Split configuration
//!
//! A [`SplitConfig`] names a strategy and a test ratio so that a split can be
//! described once, stored as JSON next to the data, and replayed later.
//!
//! ```json
//! { "test_ratio": 0.2, "strategy": { "method": "random", "seed": 42 } }
//! { "test_ratio": 0.2, "strategy": { "method": "id_hash", "id_column": "id" } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    split::{split_train_test_by_id, split_train_test_seeded, DatasetSplit, DEFAULT_SEED},
    ArrowDataset,
};

/// Test ratio used by [`SplitConfig::default`].
pub const DEFAULT_TEST_RATIO: f64 = 0.2;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

/// How rows are assigned to the test set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum SplitStrategy {
    /// Seeded shuffle; the first `floor(len * ratio)` rows form the test set.
    Random {
        /// Generator seed
        #[serde(default = "default_seed")]
        seed: u64,
    },
    /// CRC-32 of an integer identifier column.
    IdHash {
        /// Column holding the identifier
        id_column: String,
    },
}

impl Default for SplitStrategy {
    fn default() -> Self {
        Self::Random { seed: DEFAULT_SEED }
    }
}

/// A complete, replayable split description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of rows for the test set. Not validated.
    pub test_ratio: f64,
    /// Assignment strategy
    #[serde(default)]
    pub strategy: SplitStrategy,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self::random(DEFAULT_TEST_RATIO)
    }
}

impl SplitConfig {
    /// Random split with [`DEFAULT_SEED`].
    pub fn random(test_ratio: f64) -> Self {
        Self {
            test_ratio,
            strategy: SplitStrategy::default(),
        }
    }

    /// Identifier-hash split on `id_column`.
    pub fn by_id(test_ratio: f64, id_column: impl Into<String>) -> Self {
        Self {
            test_ratio,
            strategy: SplitStrategy::IdHash {
                id_column: id_column.into(),
            },
        }
    }

    /// Switch to a random split with `seed`, keeping the ratio.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.strategy = SplitStrategy::Random { seed };
        self
    }

    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if the text is not a valid configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// Read a configuration from a JSON file.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::InvalidConfig`] if its content is not a valid configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
        Self::from_json_str(&text)
    }

    /// Pretty-printed JSON form of this configuration.
    ///
    /// # Errors
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Run the configured splitter on `dataset`.
    ///
    /// # Errors
    /// Propagates the errors of the selected splitter.
    pub fn split(&self, dataset: &ArrowDataset) -> Result<DatasetSplit> {
        match &self.strategy {
            SplitStrategy::Random { seed } => {
                split_train_test_seeded(dataset, self.test_ratio, *seed)
            }
            SplitStrategy::IdHash { id_column } => {
                split_train_test_by_id(dataset, self.test_ratio, id_column)
            }
        }
    }
}
