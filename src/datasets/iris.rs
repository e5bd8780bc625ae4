//! Iris dataset loader
//!
//! The classic Iris flower dataset by Ronald Fisher (1936): 150 samples of 3
//! iris species with 4 measurements each. Rows are ordered by species, which
//! is exactly why they need shuffling before a holdout is taken.
//!
//! # Example
//!
//! ```
//! use holdout::{datasets::{iris, CanonicalDataset}, split::split_train_test_by_id, Dataset};
//!
//! let iris = iris().unwrap();
//! assert_eq!(iris.len(), 150);
//!
//! let split = split_train_test_by_id(&iris.with_ids().unwrap(), 0.2, "id").unwrap();
//! assert_eq!(split.test().len(), 32);
//! ```

use std::sync::Arc;

use arrow::{
    array::{Array, Float64Array, RecordBatch, StringArray},
    datatypes::{DataType, Field, Schema},
};

use super::CanonicalDataset;
use crate::{ArrowDataset, Error, Result};

/// Name of the identifier column added by [`IrisDataset::with_ids`].
pub const IRIS_ID_COLUMN: &str = "id";

const FEATURE_NAMES: [&str; 4] = ["sepal_length", "sepal_width", "petal_length", "petal_width"];

/// Load the Iris dataset
///
/// Returns a dataset with 150 samples and 5 columns:
/// - sepal_length (f64)
/// - sepal_width (f64)
/// - petal_length (f64)
/// - petal_width (f64)
/// - species (string: "setosa", "versicolor", "virginica")
///
/// # Errors
///
/// Returns an error if the embedded table cannot be assembled.
pub fn iris() -> Result<IrisDataset> {
    IrisDataset::load()
}

/// The Iris flower dataset
#[derive(Debug, Clone)]
pub struct IrisDataset {
    data: ArrowDataset,
}

impl IrisDataset {
    /// Load the embedded Iris dataset
    ///
    /// # Errors
    ///
    /// Returns an error if dataset construction fails.
    pub fn load() -> Result<Self> {
        let schema = Arc::new(Schema::new(vec![
            Field::new("sepal_length", DataType::Float64, false),
            Field::new("sepal_width", DataType::Float64, false),
            Field::new("petal_length", DataType::Float64, false),
            Field::new("petal_width", DataType::Float64, false),
            Field::new("species", DataType::Utf8, false),
        ]));

        // Data from UCI ML Repository / scikit-learn
        let (sepal_length, sepal_width, petal_length, petal_width, species) = iris_data();

        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Float64Array::from(sepal_length)),
                Arc::new(Float64Array::from(sepal_width)),
                Arc::new(Float64Array::from(petal_length)),
                Arc::new(Float64Array::from(petal_width)),
                Arc::new(StringArray::from(species)),
            ],
        )
        .map_err(Error::Arrow)?;

        Ok(Self {
            data: ArrowDataset::from_batch(batch)?,
        })
    }

    /// Get the underlying Arrow dataset
    #[must_use]
    pub fn into_inner(self) -> ArrowDataset {
        self.data
    }

    /// The table with a leading Int64 `id` column holding each row's
    /// position (0..150), ready for the identifier-hash splitter.
    ///
    /// # Errors
    ///
    /// Returns an error if the column cannot be added.
    pub fn with_ids(&self) -> Result<ArrowDataset> {
        self.data.with_row_index(IRIS_ID_COLUMN)
    }

    /// Feature columns only (species dropped)
    ///
    /// # Errors
    ///
    /// Returns an error if the projection fails.
    pub fn features(&self) -> Result<ArrowDataset> {
        let batch = self.data.to_batch()?;
        let projected = batch.project(&[0, 1, 2, 3]).map_err(Error::Arrow)?;
        ArrowDataset::from_batch(projected)
    }

    /// Species labels in row order
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.data
            .batches()
            .iter()
            .filter_map(|batch| batch.column_by_name("species"))
            .filter_map(|col| col.as_any().downcast_ref::<StringArray>())
            .flat_map(|arr| (0..arr.len()).map(|i| arr.value(i).to_string()))
            .collect()
    }

    /// Species labels as numbers (0=setosa, 1=versicolor, 2=virginica)
    #[must_use]
    pub fn labels_numeric(&self) -> Vec<i32> {
        self.labels()
            .iter()
            .map(|s| match s.as_str() {
                "setosa" => 0,
                "versicolor" => 1,
                "virginica" => 2,
                _ => -1,
            })
            .collect()
    }
}

impl CanonicalDataset for IrisDataset {
    fn data(&self) -> &ArrowDataset {
        &self.data
    }

    fn num_features(&self) -> usize {
        FEATURE_NAMES.len()
    }

    fn num_classes(&self) -> usize {
        3
    }

    fn feature_names(&self) -> &'static [&'static str] {
        &FEATURE_NAMES
    }

    fn target_name(&self) -> &'static str {
        "species"
    }

    fn description(&self) -> &'static str {
        "Iris flower dataset (Fisher, 1936). 150 samples of 3 iris species \
         (setosa, versicolor, virginica) with 4 features: sepal length/width \
         and petal length/width in centimeters."
    }
}

/// Returns the embedded Iris dataset values
#[allow(clippy::type_complexity, clippy::similar_names)]
fn iris_data() -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<&'static str>) {
    // Iris setosa (50 samples)
    let setosa_sl = vec![
        5.1, 4.9, 4.7, 4.6, 5.0, 5.4, 4.6, 5.0, 4.4, 4.9, 5.4, 4.8, 4.8, 4.3, 5.8, 5.7, 5.4, 5.1,
        5.7, 5.1, 5.4, 5.1, 4.6, 5.1, 4.8, 5.0, 5.0, 5.2, 5.2, 4.7, 4.8, 5.4, 5.2, 5.5, 4.9, 5.0,
        5.5, 4.9, 4.4, 5.1, 5.0, 4.5, 4.4, 5.0, 5.1, 4.8, 5.1, 4.6, 5.3, 5.0,
    ];
    let setosa_sw = vec![
        3.5, 3.0, 3.2, 3.1, 3.6, 3.9, 3.4, 3.4, 2.9, 3.1, 3.7, 3.4, 3.0, 3.0, 4.0, 4.4, 3.9, 3.5,
        3.8, 3.8, 3.4, 3.7, 3.6, 3.3, 3.4, 3.0, 3.4, 3.5, 3.4, 3.2, 3.1, 3.4, 4.1, 4.2, 3.1, 3.2,
        3.5, 3.6, 3.0, 3.4, 3.5, 2.3, 3.2, 3.5, 3.8, 3.0, 3.8, 3.2, 3.7, 3.3,
    ];
    let setosa_pl = vec![
        1.4, 1.4, 1.3, 1.5, 1.4, 1.7, 1.4, 1.5, 1.4, 1.5, 1.5, 1.6, 1.4, 1.1, 1.2, 1.5, 1.3, 1.4,
        1.7, 1.5, 1.7, 1.5, 1.0, 1.7, 1.9, 1.6, 1.6, 1.5, 1.4, 1.6, 1.6, 1.5, 1.5, 1.4, 1.5, 1.2,
        1.3, 1.4, 1.3, 1.5, 1.3, 1.3, 1.3, 1.6, 1.9, 1.4, 1.6, 1.4, 1.5, 1.4,
    ];
    let setosa_pw = vec![
        0.2, 0.2, 0.2, 0.2, 0.2, 0.4, 0.3, 0.2, 0.2, 0.1, 0.2, 0.2, 0.1, 0.1, 0.2, 0.4, 0.4, 0.3,
        0.3, 0.3, 0.2, 0.4, 0.2, 0.5, 0.2, 0.2, 0.4, 0.2, 0.2, 0.2, 0.2, 0.4, 0.1, 0.2, 0.2, 0.2,
        0.2, 0.1, 0.2, 0.2, 0.3, 0.3, 0.2, 0.6, 0.4, 0.3, 0.2, 0.2, 0.2, 0.2,
    ];

    // Iris versicolor (50 samples)
    let versicolor_sl = vec![
        7.0, 6.4, 6.9, 5.5, 6.5, 5.7, 6.3, 4.9, 6.6, 5.2, 5.0, 5.9, 6.0, 6.1, 5.6, 6.7, 5.6, 5.8,
        6.2, 5.6, 5.9, 6.1, 6.3, 6.1, 6.4, 6.6, 6.8, 6.7, 6.0, 5.7, 5.5, 5.5, 5.8, 6.0, 5.4, 6.0,
        6.7, 6.3, 5.6, 5.5, 5.5, 6.1, 5.8, 5.0, 5.6, 5.7, 5.7, 6.2, 5.1, 5.7,
    ];
    let versicolor_sw = vec![
        3.2, 3.2, 3.1, 2.3, 2.8, 2.8, 3.3, 2.4, 2.9, 2.7, 2.0, 3.0, 2.2, 2.9, 2.9, 3.1, 3.0, 2.7,
        2.2, 2.5, 3.2, 2.8, 2.5, 2.8, 2.9, 3.0, 2.8, 3.0, 2.9, 2.6, 2.4, 2.4, 2.7, 2.7, 3.0, 3.4,
        3.1, 2.3, 3.0, 2.5, 2.6, 3.0, 2.6, 2.3, 2.7, 3.0, 2.9, 2.9, 2.5, 2.8,
    ];
    let versicolor_pl = vec![
        4.7, 4.5, 4.9, 4.0, 4.6, 4.5, 4.7, 3.3, 4.6, 3.9, 3.5, 4.2, 4.0, 4.7, 3.6, 4.4, 4.5, 4.1,
        4.5, 3.9, 4.8, 4.0, 4.9, 4.7, 4.3, 4.4, 4.8, 5.0, 4.5, 3.5, 3.8, 3.7, 3.9, 5.1, 4.5, 4.5,
        4.7, 4.4, 4.1, 4.0, 4.4, 4.6, 4.0, 3.3, 4.2, 4.2, 4.2, 4.3, 3.0, 4.1,
    ];
    let versicolor_pw = vec![
        1.4, 1.5, 1.5, 1.3, 1.5, 1.3, 1.6, 1.0, 1.3, 1.4, 1.0, 1.5, 1.0, 1.4, 1.3, 1.4, 1.5, 1.0,
        1.5, 1.1, 1.8, 1.3, 1.5, 1.2, 1.3, 1.4, 1.4, 1.7, 1.5, 1.0, 1.1, 1.0, 1.2, 1.6, 1.5, 1.6,
        1.5, 1.3, 1.3, 1.3, 1.2, 1.4, 1.2, 1.0, 1.3, 1.2, 1.3, 1.3, 1.1, 1.3,
    ];

    // Iris virginica (50 samples)
    let virginica_sl = vec![
        6.3, 5.8, 7.1, 6.3, 6.5, 7.6, 4.9, 7.3, 6.7, 7.2, 6.5, 6.4, 6.8, 5.7, 5.8, 6.4, 6.5, 7.7,
        7.7, 6.0, 6.9, 5.6, 7.7, 6.3, 6.7, 7.2, 6.2, 6.1, 6.4, 7.2, 7.4, 7.9, 6.4, 6.3, 6.1, 7.7,
        6.3, 6.4, 6.0, 6.9, 6.7, 6.9, 5.8, 6.8, 6.7, 6.7, 6.3, 6.5, 6.2, 5.9,
    ];
    let virginica_sw = vec![
        3.3, 2.7, 3.0, 2.9, 3.0, 3.0, 2.5, 2.9, 2.5, 3.6, 3.2, 2.7, 3.0, 2.5, 2.8, 3.2, 3.0, 3.8,
        2.6, 2.2, 3.2, 2.8, 2.8, 2.7, 3.3, 3.2, 2.8, 3.0, 2.8, 3.0, 2.8, 3.8, 2.8, 2.8, 2.6, 3.0,
        3.4, 3.1, 3.0, 3.1, 3.1, 3.1, 2.7, 3.2, 3.3, 3.0, 2.5, 3.0, 3.4, 3.0,
    ];
    let virginica_pl = vec![
        6.0, 5.1, 5.9, 5.6, 5.8, 6.6, 4.5, 6.3, 5.8, 6.1, 5.1, 5.3, 5.5, 5.0, 5.1, 5.3, 5.5, 6.7,
        6.9, 5.0, 5.7, 4.9, 6.7, 4.9, 5.7, 6.0, 4.8, 4.9, 5.6, 5.8, 6.1, 6.4, 5.6, 5.1, 5.6, 6.1,
        5.6, 5.5, 4.8, 5.4, 5.6, 5.1, 5.1, 5.9, 5.7, 5.2, 5.0, 5.2, 5.4, 5.1,
    ];
    let virginica_pw = vec![
        2.5, 1.9, 2.1, 1.8, 2.2, 2.1, 1.7, 1.8, 1.8, 2.5, 2.0, 1.9, 2.1, 2.0, 2.4, 2.3, 1.8, 2.2,
        2.3, 1.5, 2.3, 2.0, 2.0, 1.8, 2.1, 1.8, 1.8, 1.8, 2.1, 1.6, 1.9, 2.0, 2.2, 1.5, 1.4, 2.3,
        2.4, 1.8, 1.8, 2.1, 2.4, 2.3, 1.9, 2.3, 2.5, 2.3, 1.9, 2.0, 2.3, 1.8,
    ];

    // Combine all data
    let mut sepal_length = setosa_sl;
    sepal_length.extend(versicolor_sl);
    sepal_length.extend(virginica_sl);

    let mut sepal_width = setosa_sw;
    sepal_width.extend(versicolor_sw);
    sepal_width.extend(virginica_sw);

    let mut petal_length = setosa_pl;
    petal_length.extend(versicolor_pl);
    petal_length.extend(virginica_pl);

    let mut petal_width = setosa_pw;
    petal_width.extend(versicolor_pw);
    petal_width.extend(virginica_pw);

    let species: Vec<&'static str> = std::iter::repeat("setosa")
        .take(50)
        .chain(std::iter::repeat("versicolor").take(50))
        .chain(std::iter::repeat("virginica").take(50))
        .collect();

    (
        sepal_length,
        sepal_width,
        petal_length,
        petal_width,
        species,
    )
}
