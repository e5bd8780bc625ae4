//! Identifier-hash splitting
//!
//! A row goes to the test set when `crc32(id) < test_ratio * 2^32`, with the
//! checksum taken over the identifier's 8 little-endian bytes. Assignment is
//! a pure function of the identifier: re-running after rows are appended
//! leaves every earlier row where it was, and the answer is the same on
//! every platform.

use arrow::array::{Array, BooleanArray};
use tracing::debug;

use super::{ids::identifier_values, DatasetSplit, SplitIndices};
use crate::{
    error::{Error, Result},
    ArrowDataset, Dataset,
};

/// Size of the CRC-32 output space, `2^32`.
const CHECKSUM_SPACE: f64 = 4_294_967_296.0;

/// CRC-32 (IEEE) of `id` encoded as 8 little-endian bytes.
///
/// ```
/// assert_eq!(holdout::split::id_checksum(5), 0x2DC2_D10D);
/// ```
pub fn id_checksum(id: i64) -> u32 {
    crc32fast::hash(&id.to_le_bytes())
}

/// True when `id` belongs in the test set for `test_ratio`.
pub fn test_set_check(id: i64, test_ratio: f64) -> bool {
    f64::from(id_checksum(id)) < test_ratio * CHECKSUM_SPACE
}

/// Test-set membership of each id, in the order given.
pub fn test_set_mask(ids: &[i64], test_ratio: f64) -> BooleanArray {
    ids.iter()
        .map(|&id| Some(test_set_check(id, test_ratio)))
        .collect()
}

/// Partition the positions of `ids` by [`test_set_mask`], keeping the
/// original order on both sides.
pub fn hash_split_indices(ids: &[i64], test_ratio: f64) -> SplitIndices {
    let in_test = test_set_mask(ids, test_ratio);
    let (test, train): (Vec<usize>, Vec<usize>) =
        (0..in_test.len()).partition(|&row| in_test.value(row));
    SplitIndices { train, test }
}

/// Split `dataset` by hashing the identifier column `id_column`.
///
/// Both halves keep the source row order. `dataset` is not modified.
///
/// # Arguments
/// * `dataset` - Source dataset to split
/// * `test_ratio` - Target fraction of rows for the test set (not validated)
/// * `id_column` - Column holding a unique, stable, integer-convertible id
///
/// # Errors
/// - [`Error::ColumnNotFound`] if `id_column` does not exist
/// - [`Error::IdConversion`] if a value is null or cannot be read as an `i64`
pub fn split_train_test_by_id(
    dataset: &ArrowDataset,
    test_ratio: f64,
    id_column: &str,
) -> Result<DatasetSplit> {
    let ids = identifier_values(dataset, id_column)?;

    let in_test = test_set_mask(&ids, test_ratio);
    let in_train = arrow::compute::not(&in_test).map_err(Error::Arrow)?;

    let split = DatasetSplit::new(dataset.filter_rows(&in_train)?, dataset.filter_rows(&in_test)?);
    debug!(
        rows = dataset.len(),
        test_ratio,
        id_column,
        train_rows = split.train().len(),
        test_rows = split.test().len(),
        "id hash split"
    );
    Ok(split)
}
