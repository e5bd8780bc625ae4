//! Train/test splitting
//!
//! Two independent splitters, both returning a [`DatasetSplit`]:
//!
//! - [`split_train_test`] shuffles row positions with a caller-supplied
//!   generator and takes the first `floor(len * test_ratio)` as the test set.
//! - [`split_train_test_by_id`] puts a row in the test set when the CRC-32 of
//!   its identifier falls below `test_ratio * 2^32`. Membership depends on the
//!   identifier alone, so rows appended later never move existing rows.
//!
//! Test ratios are not validated. Values below 0 give an empty test set and
//! values above 1 give an empty train set.
//!
//! # Example
//!
//! ```
//! use holdout::{
//!     datasets::{iris, CanonicalDataset},
//!     split::{split_train_test_by_id, split_train_test_seeded},
//!     Dataset,
//! };
//!
//! let iris = iris().unwrap();
//!
//! let split = split_train_test_seeded(iris.data(), 0.2, 42).unwrap();
//! assert_eq!(split.test().len(), 30);
//!
//! let with_ids = iris.with_ids().unwrap();
//! let split = split_train_test_by_id(&with_ids, 0.2, "id").unwrap();
//! assert_eq!(split.train().len() + split.test().len(), 150);
//! ```

pub mod hash;
pub mod ids;
pub mod random;

pub use hash::{
    hash_split_indices, id_checksum, split_train_test_by_id, test_set_check, test_set_mask,
};
pub use ids::identifier_values;
pub use random::{
    random_split_indices, seeded_rng, shuffled_indices, split_train_test, split_train_test_seeded,
    test_set_size, SplitRng, DEFAULT_SEED,
};

use crate::{error::Result, ArrowDataset, Dataset};

/// A train/test pair carved out of one dataset.
///
/// Both halves share the source schema and hold disjoint copies of its rows.
#[derive(Debug, Clone)]
pub struct DatasetSplit {
    /// Training dataset
    pub train: ArrowDataset,
    /// Test/holdout dataset
    pub test: ArrowDataset,
}

impl DatasetSplit {
    /// Create a train/test split
    pub fn new(train: ArrowDataset, test: ArrowDataset) -> Self {
        Self { train, test }
    }

    /// Get training data
    pub fn train(&self) -> &ArrowDataset {
        &self.train
    }

    /// Get test data
    pub fn test(&self) -> &ArrowDataset {
        &self.test
    }

    /// Total number of rows across both halves
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len()
    }

    /// True when neither half holds a row
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consume the split, returning `(train, test)`
    pub fn into_parts(self) -> (ArrowDataset, ArrowDataset) {
        (self.train, self.test)
    }
}

/// A split expressed as global row positions of the source dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitIndices {
    /// Row positions assigned to the training set
    pub train: Vec<usize>,
    /// Row positions assigned to the test set
    pub test: Vec<usize>,
}

impl SplitIndices {
    /// Total number of assigned rows
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len()
    }

    /// True when no rows are assigned
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the selected rows out of `dataset`, keeping the order of each
    /// index list.
    ///
    /// # Errors
    /// Returns an error if an index is out of bounds for `dataset`.
    pub fn materialize(&self, dataset: &ArrowDataset) -> Result<DatasetSplit> {
        Ok(DatasetSplit::new(
            dataset.take_rows(&self.train)?,
            dataset.take_rows(&self.test)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::{
        array::{Int64Array, RecordBatch},
        datatypes::{DataType, Field, Schema},
    };

    use super::*;
    use crate::Error;

    fn make_dataset(n: i64) -> ArrowDataset {
        let schema = Arc::new(Schema::new(vec![Field::new("id", DataType::Int64, false)]));
        let batch = RecordBatch::try_new(
            schema,
            vec![Arc::new(Int64Array::from((0..n).collect::<Vec<_>>()))],
        )
        .expect("batch creation failed");
        ArrowDataset::from_batch(batch).expect("dataset creation failed")
    }

    fn ids(dataset: &ArrowDataset) -> Vec<i64> {
        dataset
            .iter()
            .flat_map(|batch| {
                batch
                    .column(0)
                    .as_any()
                    .downcast_ref::<Int64Array>()
                    .expect("downcast")
                    .values()
                    .to_vec()
            })
            .collect()
    }

    #[test]
    fn test_materialize_keeps_index_order() {
        let dataset = make_dataset(6);
        let indices = SplitIndices {
            train: vec![5, 1, 3],
            test: vec![4, 0, 2],
        };

        let split = indices.materialize(&dataset).expect("materialize");

        assert_eq!(ids(split.train()), vec![5, 1, 3]);
        assert_eq!(ids(split.test()), vec![4, 0, 2]);
        assert_eq!(split.len(), 6);
    }

    #[test]
    fn test_materialize_empty_side_keeps_schema() {
        let dataset = make_dataset(4);
        let indices = SplitIndices {
            train: vec![0, 1, 2, 3],
            test: vec![],
        };

        let split = indices.materialize(&dataset).expect("materialize");

        assert!(split.test().is_empty());
        assert_eq!(split.test().schema(), dataset.schema());
    }

    #[test]
    fn test_materialize_rejects_out_of_range_index() {
        let dataset = make_dataset(3);
        let indices = SplitIndices {
            train: vec![0],
            test: vec![3],
        };

        let result = indices.materialize(&dataset);
        assert!(matches!(result, Err(Error::IndexOutOfBounds { index: 3, .. })));
    }

    #[test]
    fn test_split_accessors_and_into_parts() {
        let split = DatasetSplit::new(make_dataset(8), make_dataset(2));

        assert_eq!(split.train().len(), 8);
        assert_eq!(split.test().len(), 2);
        assert!(!split.is_empty());

        let (train, test) = split.into_parts();
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);
    }

    #[test]
    fn test_split_indices_default_is_empty() {
        let indices = SplitIndices::default();
        assert!(indices.is_empty());
        assert_eq!(indices.len(), 0);
    }
}
