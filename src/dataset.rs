//! Dataset types for holdout.
//!
//! Provides the [`Dataset`] trait and the [`ArrowDataset`] table that both
//! splitters consume and produce.

use std::{path::Path, sync::Arc};

use arrow::{
    array::{Array, ArrayRef, BooleanArray, Int64Array, RecordBatch, UInt64Array},
    datatypes::{DataType, Field, FieldRef, Schema, SchemaRef},
};
use parquet::{
    arrow::{arrow_reader::ParquetRecordBatchReaderBuilder, ArrowWriter},
    file::properties::WriterProperties,
};

use crate::error::{Error, Result};

/// A table of rows addressable by global position.
///
/// All implementations must be thread-safe (Send + Sync).
pub trait Dataset: Send + Sync {
    /// Returns the total number of rows in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset contains no rows.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a single row as a RecordBatch with one row.
    ///
    /// Returns `None` if the index is out of bounds.
    fn get(&self, index: usize) -> Option<RecordBatch>;

    /// Returns the schema of the dataset.
    fn schema(&self) -> SchemaRef;

    /// Returns an iterator over all RecordBatches in the dataset.
    fn iter(&self) -> Box<dyn Iterator<Item = RecordBatch> + Send + '_>;

    /// Returns the number of batches in the dataset.
    fn num_batches(&self) -> usize;

    /// Returns a specific batch by index.
    fn get_batch(&self, index: usize) -> Option<&RecordBatch>;
}

/// An in-memory dataset backed by Arrow RecordBatches.
///
/// Row selection methods ([`take_rows`](Self::take_rows),
/// [`filter_rows`](Self::filter_rows)) return new datasets and never modify
/// `self`.
///
/// # Example
///
/// ```no_run
/// use holdout::{ArrowDataset, Dataset};
///
/// let dataset = ArrowDataset::from_csv("housing.csv").unwrap();
/// println!("Dataset has {} rows", dataset.len());
/// ```
#[derive(Debug, Clone)]
pub struct ArrowDataset {
    batches: Vec<RecordBatch>,
    schema: SchemaRef,
    row_count: usize,
}

impl ArrowDataset {
    /// Creates a new ArrowDataset from a vector of RecordBatches.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The batches vector is empty
    /// - The batches have inconsistent schemas
    pub fn new(batches: Vec<RecordBatch>) -> Result<Self> {
        let Some(first) = batches.first() else {
            return Err(Error::EmptyDataset);
        };
        let schema = first.schema();

        for (i, batch) in batches.iter().enumerate().skip(1) {
            if batch.schema() != schema {
                return Err(Error::schema_mismatch(format!(
                    "Batch {} has different schema than batch 0",
                    i
                )));
            }
        }

        let row_count = batches.iter().map(|b| b.num_rows()).sum();

        Ok(Self {
            batches,
            schema,
            row_count,
        })
    }

    /// Creates an ArrowDataset from a single RecordBatch.
    ///
    /// # Errors
    ///
    /// Never fails for a single batch; the `Result` mirrors [`Self::new`].
    pub fn from_batch(batch: RecordBatch) -> Result<Self> {
        Self::new(vec![batch])
    }

    /// Creates a zero-row dataset with the given schema.
    pub fn empty(schema: SchemaRef) -> Self {
        Self {
            batches: vec![RecordBatch::new_empty(Arc::clone(&schema))],
            schema,
            row_count: 0,
        }
    }

    /// Returns the underlying batches.
    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    /// Consumes the dataset and returns the underlying batches.
    pub fn into_batches(self) -> Vec<RecordBatch> {
        self.batches
    }

    /// Concatenates all batches into one.
    ///
    /// # Errors
    ///
    /// Returns an error if Arrow fails to concatenate the columns.
    pub fn to_batch(&self) -> Result<RecordBatch> {
        if let [single] = self.batches.as_slice() {
            return Ok(single.clone());
        }
        arrow::compute::concat_batches(&self.schema, &self.batches).map_err(Error::Arrow)
    }

    /// Returns a new dataset holding the rows at `indices`, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if any index is `>= len()`.
    pub fn take_rows(&self, indices: &[usize]) -> Result<Self> {
        if let Some(&index) = indices.iter().find(|&&i| i >= self.row_count) {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.row_count,
            });
        }
        if indices.is_empty() {
            return Ok(Self::empty(self.schema()));
        }

        let batch = self.to_batch()?;
        let indices_array = UInt64Array::from_iter_values(indices.iter().map(|&i| i as u64));
        let columns: Vec<ArrayRef> = batch
            .columns()
            .iter()
            .map(|col| arrow::compute::take(col.as_ref(), &indices_array, None).map_err(Error::Arrow))
            .collect::<Result<Vec<_>>>()?;

        let taken = RecordBatch::try_new(batch.schema(), columns).map_err(Error::Arrow)?;
        Self::from_batch(taken)
    }

    /// Returns a new dataset holding the rows where `mask` is true, in
    /// their original order. Null mask entries drop the row.
    ///
    /// # Errors
    ///
    /// Returns an error if the mask length differs from `len()`.
    pub fn filter_rows(&self, mask: &BooleanArray) -> Result<Self> {
        if mask.len() != self.row_count {
            return Err(Error::schema_mismatch(format!(
                "Filter mask has {} entries for {} rows",
                mask.len(),
                self.row_count
            )));
        }

        let batch = self.to_batch()?;
        let filtered = arrow::compute::filter_record_batch(&batch, mask).map_err(Error::Arrow)?;
        Self::from_batch(filtered)
    }

    /// Returns a dataset with the rows of `other` appended after `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two schemas differ.
    pub fn append(&self, other: &Self) -> Result<Self> {
        if self.schema != other.schema {
            return Err(Error::schema_mismatch(
                "Cannot append dataset with a different schema",
            ));
        }
        let batches = self
            .batches
            .iter()
            .chain(other.batches.iter())
            .cloned()
            .collect();
        Self::new(batches)
    }

    /// Prepends a non-null Int64 column holding each row's position.
    ///
    /// Gives a table without a natural key a stable identifier, provided new
    /// rows are only ever appended at the end.
    ///
    /// # Errors
    ///
    /// Returns an error if a column called `name` already exists.
    #[allow(clippy::cast_possible_wrap)]
    pub fn with_row_index(&self, name: &str) -> Result<Self> {
        if self.schema.column_with_name(name).is_some() {
            return Err(Error::schema_mismatch(format!(
                "Column '{name}' already exists"
            )));
        }

        let mut fields: Vec<FieldRef> = vec![Arc::new(Field::new(name, DataType::Int64, false))];
        fields.extend(self.schema.fields().iter().cloned());
        let schema = Arc::new(Schema::new_with_metadata(
            fields,
            self.schema.metadata().clone(),
        ));

        let mut offset = 0usize;
        let mut batches = Vec::with_capacity(self.batches.len());
        for batch in &self.batches {
            let rows = batch.num_rows();
            let index = Int64Array::from_iter_values((offset..offset + rows).map(|i| i as i64));
            offset += rows;

            let mut columns: Vec<ArrayRef> = vec![Arc::new(index)];
            columns.extend(batch.columns().iter().cloned());
            batches.push(RecordBatch::try_new(Arc::clone(&schema), columns).map_err(Error::Arrow)?);
        }

        Self::new(batches)
    }

    /// Loads a dataset from a Parquet file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not valid Parquet.
    pub fn from_parquet(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;

        let builder = ParquetRecordBatchReaderBuilder::try_new(file).map_err(Error::Parquet)?;
        let schema = Arc::clone(builder.schema());
        let reader = builder.build().map_err(Error::Parquet)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        Self::from_batches_or_empty(batches, schema)
    }

    /// Saves the dataset to a Parquet file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    pub fn to_parquet(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| Error::io(e, path))?;

        let props = WriterProperties::builder().build();
        let mut writer =
            ArrowWriter::try_new(file, self.schema(), Some(props)).map_err(Error::Parquet)?;

        for batch in &self.batches {
            writer.write(batch).map_err(Error::Parquet)?;
        }

        writer.close().map_err(Error::Parquet)?;
        Ok(())
    }

    /// Loads a dataset from a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not valid CSV.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_csv_with_options(path, CsvOptions::default())
    }

    /// Loads a dataset from a CSV file with options.
    ///
    /// A file with a header and no data rows loads as a zero-row dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    pub fn from_csv_with_options(path: impl AsRef<Path>, options: CsvOptions) -> Result<Self> {
        use std::io::{BufReader, Seek, SeekFrom};

        use arrow_csv::{reader::Format, ReaderBuilder};

        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;
        let mut buf_reader = BufReader::new(file);

        let schema = if let Some(schema) = options.schema {
            Arc::new(schema)
        } else {
            let mut format = Format::default().with_header(options.has_header);
            if let Some(delim) = options.delimiter {
                format = format.with_delimiter(delim);
            }
            let (inferred, _) = format
                .infer_schema(&mut buf_reader, Some(1000))
                .map_err(Error::Arrow)?;

            buf_reader
                .seek(SeekFrom::Start(0))
                .map_err(|e| Error::io(e, path))?;

            Arc::new(inferred)
        };

        let mut builder = ReaderBuilder::new(Arc::clone(&schema))
            .with_batch_size(options.batch_size)
            .with_header(options.has_header);
        if let Some(delim) = options.delimiter {
            builder = builder.with_delimiter(delim);
        }

        let reader = builder.build(buf_reader).map_err(Error::Arrow)?;
        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        Self::from_batches_or_empty(batches, schema)
    }

    /// Loads a dataset from a CSV string with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid CSV.
    pub fn from_csv_str(data: &str) -> Result<Self> {
        use std::io::Cursor;

        use arrow_csv::{reader::Format, ReaderBuilder};

        let mut cursor_for_infer = Cursor::new(data.as_bytes());
        let (inferred, _) = Format::default()
            .with_header(true)
            .infer_schema(&mut cursor_for_infer, Some(1000))
            .map_err(Error::Arrow)?;

        let schema = Arc::new(inferred);
        let reader = ReaderBuilder::new(Arc::clone(&schema))
            .with_batch_size(8192)
            .with_header(true)
            .build(Cursor::new(data.as_bytes()))
            .map_err(Error::Arrow)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        Self::from_batches_or_empty(batches, schema)
    }

    /// Saves the dataset to a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    pub fn to_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        use arrow_csv::WriterBuilder;

        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| Error::io(e, path))?;

        let mut writer = WriterBuilder::new().with_header(true).build(file);
        for batch in &self.batches {
            writer.write(batch).map_err(Error::Arrow)?;
        }

        Ok(())
    }

    /// Loads a dataset from a JSON Lines file, one object per row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        use std::io::BufReader;

        use arrow_json::ReaderBuilder;

        let path = path.as_ref();

        let infer_file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;
        let (inferred, _) =
            arrow_json::reader::infer_json_schema(BufReader::new(infer_file), Some(1000))
                .map_err(Error::Arrow)?;
        let schema = Arc::new(inferred);

        let file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;
        let reader = ReaderBuilder::new(Arc::clone(&schema))
            .with_batch_size(8192)
            .build(BufReader::new(file))
            .map_err(Error::Arrow)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        Self::from_batches_or_empty(batches, schema)
    }

    /// Saves the dataset to a JSON Lines file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    pub fn to_json(&self, path: impl AsRef<Path>) -> Result<()> {
        use std::io::BufWriter;

        use arrow_json::LineDelimitedWriter;

        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|e| Error::io(e, path))?;

        let mut writer = LineDelimitedWriter::new(BufWriter::new(file));
        for batch in &self.batches {
            writer.write(batch).map_err(Error::Arrow)?;
        }
        writer.finish().map_err(Error::Arrow)?;

        Ok(())
    }

    fn from_batches_or_empty(batches: Vec<RecordBatch>, schema: SchemaRef) -> Result<Self> {
        if batches.is_empty() {
            return Ok(Self::empty(schema));
        }
        Self::new(batches)
    }

    /// Finds the batch and local row index for a global row index.
    fn find_row(&self, global_index: usize) -> Option<(usize, usize)> {
        if global_index >= self.row_count {
            return None;
        }

        let mut remaining = global_index;
        for (batch_idx, batch) in self.batches.iter().enumerate() {
            let batch_rows = batch.num_rows();
            if remaining < batch_rows {
                return Some((batch_idx, remaining));
            }
            remaining -= batch_rows;
        }

        None
    }
}

impl Dataset for ArrowDataset {
    fn len(&self) -> usize {
        self.row_count
    }

    fn get(&self, index: usize) -> Option<RecordBatch> {
        let (batch_idx, local_idx) = self.find_row(index)?;
        Some(self.batches[batch_idx].slice(local_idx, 1))
    }

    fn schema(&self) -> SchemaRef {
        Arc::clone(&self.schema)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = RecordBatch> + Send + '_> {
        Box::new(self.batches.iter().cloned())
    }

    fn num_batches(&self) -> usize {
        self.batches.len()
    }

    fn get_batch(&self, index: usize) -> Option<&RecordBatch> {
        self.batches.get(index)
    }
}

/// Options for CSV parsing.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Whether the CSV file has a header row.
    pub has_header: bool,
    /// Delimiter character (default is comma).
    pub delimiter: Option<u8>,
    /// Batch size for reading.
    pub batch_size: usize,
    /// Optional schema (inferred if not provided).
    pub schema: Option<Schema>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: None,
            batch_size: 8192,
            schema: None,
        }
    }
}

impl CsvOptions {
    /// Creates new CSV options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the file has a header row.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Sets the delimiter character.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Sets the batch size for reading.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the schema for parsing.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}

#[cfg(test)]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::uninlined_format_args
)]
mod tests {
    use arrow::array::{Int32Array, StringArray};

    use super::*;

    fn create_test_batch(start: i32, count: usize) -> RecordBatch {
        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int32, false),
            Field::new("name", DataType::Utf8, false),
        ]));

        let ids: Vec<i32> = (start..start + count as i32).collect();
        let names: Vec<String> = ids.iter().map(|i| format!("item_{}", i)).collect();

        RecordBatch::try_new(
            schema,
            vec![Arc::new(Int32Array::from(ids)), Arc::new(StringArray::from(names))],
        )
        .ok()
        .unwrap_or_else(|| panic!("Failed to create test batch"))
    }

    fn two_batch_dataset() -> ArrowDataset {
        ArrowDataset::new(vec![create_test_batch(0, 5), create_test_batch(5, 5)])
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"))
    }

    fn ids_of(dataset: &ArrowDataset) -> Vec<i32> {
        dataset
            .iter()
            .flat_map(|batch| {
                batch
                    .column(0)
                    .as_any()
                    .downcast_ref::<Int32Array>()
                    .map(|arr| arr.values().to_vec())
                    .unwrap_or_default()
            })
            .collect()
    }

    #[test]
    fn test_new_dataset() {
        let dataset = ArrowDataset::new(vec![create_test_batch(0, 10)])
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"));
        assert_eq!(dataset.len(), 10);
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_no_batches_is_error() {
        assert!(matches!(ArrowDataset::new(vec![]), Err(Error::EmptyDataset)));
    }

    #[test]
    fn test_schema_mismatch_between_batches() {
        let other_schema = Arc::new(Schema::new(vec![Field::new("x", DataType::Int32, false)]));
        let other = RecordBatch::try_new(other_schema, vec![Arc::new(Int32Array::from(vec![1]))])
            .ok()
            .unwrap_or_else(|| panic!("Should create batch"));

        let result = ArrowDataset::new(vec![create_test_batch(0, 2), other]);
        assert!(matches!(result, Err(Error::SchemaMismatch { .. })));
    }

    #[test]
    fn test_empty_has_schema_and_no_rows() {
        let dataset = two_batch_dataset();
        let empty = ArrowDataset::empty(dataset.schema());
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
        assert_eq!(empty.schema(), dataset.schema());
        assert_eq!(empty.num_batches(), 1);
    }

    #[test]
    fn test_get_row_across_batches() {
        let dataset = two_batch_dataset();
        let row = dataset
            .get(7)
            .unwrap_or_else(|| panic!("Row should exist"));
        let id = row
            .column(0)
            .as_any()
            .downcast_ref::<Int32Array>()
            .map(|arr| arr.value(0));
        assert_eq!(id, Some(7));
        assert!(dataset.get(10).is_none());
    }

    #[test]
    fn test_to_batch_concatenates() {
        let batch = two_batch_dataset()
            .to_batch()
            .ok()
            .unwrap_or_else(|| panic!("Should concatenate"));
        assert_eq!(batch.num_rows(), 10);
    }

    #[test]
    fn test_take_rows_keeps_requested_order() {
        let dataset = two_batch_dataset();
        let taken = dataset
            .take_rows(&[9, 0, 4, 5])
            .ok()
            .unwrap_or_else(|| panic!("Should take rows"));
        assert_eq!(ids_of(&taken), vec![9, 0, 4, 5]);
        assert_eq!(dataset.len(), 10);
    }

    #[test]
    fn test_take_rows_out_of_bounds() {
        let result = two_batch_dataset().take_rows(&[1, 10]);
        assert!(matches!(
            result,
            Err(Error::IndexOutOfBounds { index: 10, len: 10 })
        ));
    }

    #[test]
    fn test_take_no_rows_gives_empty_dataset() {
        let dataset = two_batch_dataset();
        let taken = dataset
            .take_rows(&[])
            .ok()
            .unwrap_or_else(|| panic!("Should take rows"));
        assert!(taken.is_empty());
        assert_eq!(taken.schema(), dataset.schema());
    }

    #[test]
    fn test_filter_rows_preserves_order() {
        let dataset = two_batch_dataset();
        let mask = BooleanArray::from((0..10).map(|i| i % 3 == 0).collect::<Vec<_>>());
        let filtered = dataset
            .filter_rows(&mask)
            .ok()
            .unwrap_or_else(|| panic!("Should filter"));
        assert_eq!(ids_of(&filtered), vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_filter_rows_wrong_mask_length() {
        let mask = BooleanArray::from(vec![true, false]);
        assert!(two_batch_dataset().filter_rows(&mask).is_err());
    }

    #[test]
    fn test_append() {
        let first = ArrowDataset::from_batch(create_test_batch(0, 3))
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"));
        let second = ArrowDataset::from_batch(create_test_batch(3, 2))
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"));

        let combined = first
            .append(&second)
            .ok()
            .unwrap_or_else(|| panic!("Should append"));
        assert_eq!(ids_of(&combined), vec![0, 1, 2, 3, 4]);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_with_row_index_spans_batches() {
        let indexed = two_batch_dataset()
            .with_row_index("row_id")
            .ok()
            .unwrap_or_else(|| panic!("Should add index"));

        let schema = indexed.schema();
        assert_eq!(schema.field(0).name(), "row_id");
        assert_eq!(schema.field(0).data_type(), &DataType::Int64);
        assert_eq!(schema.fields().len(), 3);

        let positions: Vec<i64> = indexed
            .iter()
            .flat_map(|batch| {
                batch
                    .column(0)
                    .as_any()
                    .downcast_ref::<Int64Array>()
                    .map(|arr| arr.values().to_vec())
                    .unwrap_or_default()
            })
            .collect();
        assert_eq!(positions, (0..10).collect::<Vec<i64>>());
    }

    #[test]
    fn test_with_row_index_rejects_existing_name() {
        assert!(two_batch_dataset().with_row_index("id").is_err());
    }

    #[test]
    fn test_csv_roundtrip() {
        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_dir.path().join("rows.csv");

        let dataset = two_batch_dataset();
        dataset
            .to_csv(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should write csv"));

        let loaded = ArrowDataset::from_csv(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should read csv"));
        assert_eq!(loaded.len(), 10);
        assert_eq!(loaded.schema().field(1).name(), "name");
    }

    #[test]
    fn test_csv_header_only_is_zero_rows() {
        let dataset = ArrowDataset::from_csv_str("id,name\n")
            .ok()
            .unwrap_or_else(|| panic!("Should parse header"));
        assert!(dataset.is_empty());
        assert_eq!(dataset.schema().fields().len(), 2);
    }

    #[test]
    fn test_csv_options_delimiter_and_batch_size() {
        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_dir.path().join("rows.csv");
        let body: String = (0..10).map(|i| format!("{};{}\n", i, i * 2)).collect();
        std::fs::write(&path, format!("id;value\n{body}"))
            .unwrap_or_else(|e| panic!("Should write csv: {e}"));

        let options = CsvOptions::new().with_delimiter(b';').with_batch_size(4);
        let dataset = ArrowDataset::from_csv_with_options(&path, options)
            .ok()
            .unwrap_or_else(|| panic!("Should read csv"));
        assert_eq!(dataset.len(), 10);
        assert_eq!(dataset.num_batches(), 3);
        assert_eq!(dataset.schema().field(1).name(), "value");

        let split = crate::split::split_train_test_by_id(&dataset, 0.5, "id")
            .ok()
            .unwrap_or_else(|| panic!("Should split"));
        let test_ids: Vec<i64> = split
            .test()
            .iter()
            .flat_map(|batch| {
                batch
                    .column(0)
                    .as_any()
                    .downcast_ref::<Int64Array>()
                    .map(|arr| arr.values().to_vec())
                    .unwrap_or_default()
            })
            .collect();
        assert_eq!(test_ids, vec![0, 2, 5, 7, 9]);
    }

    #[test]
    fn test_csv_options_pinned_schema_without_header() {
        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_dir.path().join("rows.csv");
        let body: String = (0..10).map(|i| format!("{},item_{}\n", i, i)).collect();
        std::fs::write(&path, body).unwrap_or_else(|e| panic!("Should write csv: {e}"));

        let schema = Schema::new(vec![
            Field::new("key", DataType::Utf8, false),
            Field::new("name", DataType::Utf8, false),
        ]);
        let options = CsvOptions::new().with_header(false).with_schema(schema);
        let dataset = ArrowDataset::from_csv_with_options(&path, options)
            .ok()
            .unwrap_or_else(|| panic!("Should read csv"));
        assert_eq!(dataset.len(), 10);
        assert_eq!(dataset.schema().field(0).data_type(), &DataType::Utf8);

        // Utf8 keys are parsed as integers by the hash splitter
        let split = crate::split::split_train_test_by_id(&dataset, 0.5, "key")
            .ok()
            .unwrap_or_else(|| panic!("Should split"));
        let test_keys: Vec<String> = split
            .test()
            .iter()
            .flat_map(|batch| {
                batch
                    .column(0)
                    .as_any()
                    .downcast_ref::<StringArray>()
                    .map(|arr| arr.iter().flatten().map(str::to_string).collect::<Vec<_>>())
                    .unwrap_or_default()
            })
            .collect();
        assert_eq!(test_keys, vec!["0", "2", "5", "7", "9"]);
    }

    #[test]
    fn test_parquet_roundtrip() {
        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_dir.path().join("rows.parquet");

        two_batch_dataset()
            .to_parquet(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should write parquet"));
        let loaded = ArrowDataset::from_parquet(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should read parquet"));
        assert_eq!(ids_of(&loaded), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_json_roundtrip() {
        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_dir.path().join("rows.jsonl");

        two_batch_dataset()
            .to_json(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should write json"));
        let loaded = ArrowDataset::from_json(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should read json"));
        assert_eq!(loaded.len(), 10);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ArrowDataset::from_csv("/nonexistent/holdout/data.csv");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
