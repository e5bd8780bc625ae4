// Ratio arithmetic converts between row counts and f64 on purpose.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

//! Seeded random splitting
//!
//! The generator is an argument, never ambient state. Two calls that start
//! from equal generators produce equal splits, and callers on different
//! threads never interfere with each other.

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use super::{DatasetSplit, SplitIndices};
use crate::{error::Result, ArrowDataset, Dataset};

/// Seed used when the caller does not choose one.
pub const DEFAULT_SEED: u64 = 42;

/// Generator returned by [`seeded_rng`].
///
/// ChaCha8's output stream is fixed by its seed on every platform and in
/// every release of `rand_chacha`, unlike `StdRng`.
pub type SplitRng = ChaCha8Rng;

/// Build the generator the seeded helpers use.
pub fn seeded_rng(seed: u64) -> SplitRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Permutation of `0..len` drawn from `rng` (Fisher-Yates).
pub fn shuffled_indices<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    indices.shuffle(rng);
    indices
}

/// Number of test rows for `len` rows: `floor(len * test_ratio)`, clamped
/// to `0..=len`.
///
/// Negative and NaN ratios give 0; ratios above 1 give `len`.
pub fn test_set_size(len: usize, test_ratio: f64) -> usize {
    // `as` saturates, so negative and NaN products land on 0.
    (((len as f64) * test_ratio) as usize).min(len)
}

/// Shuffle `0..len` and cut the permutation at [`test_set_size`].
///
/// The test set is the head of the permutation and the train set its tail;
/// both keep permutation order.
pub fn random_split_indices<R: Rng + ?Sized>(
    len: usize,
    test_ratio: f64,
    rng: &mut R,
) -> SplitIndices {
    let mut test = shuffled_indices(len, rng);
    let train = test.split_off(test_set_size(len, test_ratio));
    SplitIndices { train, test }
}

/// Split `dataset` by a random permutation drawn from `rng`.
///
/// Rows in each half appear in permutation order. `dataset` is not modified.
///
/// # Arguments
/// * `dataset` - Source dataset to split
/// * `test_ratio` - Fraction of rows for the test set (not validated)
/// * `rng` - Generator driving the permutation; it is advanced by the call
///
/// # Errors
/// Returns an error if Arrow fails to copy the selected rows.
///
/// # Example
///
/// ```
/// use holdout::{split::{seeded_rng, split_train_test}, datasets::{iris, CanonicalDataset}, Dataset};
///
/// let iris = iris().unwrap();
/// let mut rng = seeded_rng(7);
/// let split = split_train_test(iris.data(), 0.25, &mut rng).unwrap();
/// assert_eq!(split.test().len(), 37);
/// assert_eq!(split.train().len(), 113);
/// ```
pub fn split_train_test<R: Rng + ?Sized>(
    dataset: &ArrowDataset,
    test_ratio: f64,
    rng: &mut R,
) -> Result<DatasetSplit> {
    let indices = random_split_indices(dataset.len(), test_ratio, rng);
    debug!(
        rows = dataset.len(),
        test_ratio,
        train_rows = indices.train.len(),
        test_rows = indices.test.len(),
        "random split"
    );
    indices.materialize(dataset)
}

/// [`split_train_test`] with a fresh generator from [`seeded_rng`].
///
/// The same `(dataset, test_ratio, seed)` always yields the same split.
///
/// # Errors
/// Returns an error if Arrow fails to copy the selected rows.
pub fn split_train_test_seeded(
    dataset: &ArrowDataset,
    test_ratio: f64,
    seed: u64,
) -> Result<DatasetSplit> {
    debug!(seed, "seeding split generator");
    let mut rng = seeded_rng(seed);
    split_train_test(dataset, test_ratio, &mut rng)
}
