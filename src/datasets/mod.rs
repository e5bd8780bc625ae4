//! Canonical ML datasets
//!
//! Small, embedded tables for demos, doctests and benchmarks.
//!
//! # Example
//!
//! ```
//! use holdout::datasets::{iris, CanonicalDataset};
//!
//! let iris = iris().unwrap();
//! assert_eq!(iris.len(), 150);
//! assert_eq!(iris.num_classes(), 3);
//! ```

mod iris;

pub use iris::{iris, IrisDataset, IRIS_ID_COLUMN};

use crate::{ArrowDataset, Dataset};

/// A canonical ML dataset
pub trait CanonicalDataset {
    /// Returns the full dataset
    fn data(&self) -> &ArrowDataset;

    /// Returns the number of samples
    fn len(&self) -> usize {
        self.data().len()
    }

    /// Returns true if the dataset is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of features (excluding label)
    fn num_features(&self) -> usize;

    /// Returns the number of classes (for classification datasets)
    fn num_classes(&self) -> usize;

    /// Returns the feature column names
    fn feature_names(&self) -> &'static [&'static str];

    /// Returns the label/target column name
    fn target_name(&self) -> &'static str;

    /// Returns a description of the dataset
    fn description(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_dataset_is_empty() {
        let iris = iris().unwrap_or_else(|e| panic!("Should load iris: {e}"));
        assert!(!iris.is_empty());
        assert_eq!(iris.len(), iris.data().len());
    }

    #[test]
    fn test_canonical_feature_names_match_schema() {
        let iris = iris().unwrap_or_else(|e| panic!("Should load iris: {e}"));
        let schema = iris.data().schema();
        for name in iris.feature_names() {
            assert!(schema.field_with_name(name).is_ok(), "missing {name}");
        }
        assert_eq!(iris.feature_names().len(), iris.num_features());
    }
}
