//! Basic CLI commands for dataset loading and inspection.

use std::path::Path;

use arrow::util::pretty::print_batches;

use crate::{ArrowDataset, Dataset};

fn extension(path: &Path) -> &str {
    path.extension().and_then(|e| e.to_str()).unwrap_or("")
}

/// Load a dataset from a file path based on extension.
pub(crate) fn load_dataset(path: &Path) -> crate::Result<ArrowDataset> {
    match extension(path) {
        "parquet" => ArrowDataset::from_parquet(path),
        "csv" => ArrowDataset::from_csv(path),
        "json" | "jsonl" => ArrowDataset::from_json(path),
        ext => Err(crate::Error::unsupported_format(ext)),
    }
}

/// Save a dataset to a file path based on extension.
pub(crate) fn save_dataset(dataset: &ArrowDataset, path: &Path) -> crate::Result<()> {
    match extension(path) {
        "parquet" => dataset.to_parquet(path),
        "csv" => dataset.to_csv(path),
        "json" | "jsonl" => dataset.to_json(path),
        ext => Err(crate::Error::unsupported_format(ext)),
    }
}

/// Get format name from file extension.
pub(crate) fn get_format(path: &Path) -> &'static str {
    match extension(path) {
        "parquet" => "Parquet",
        "csv" => "CSV",
        "json" | "jsonl" => "JSON",
        _ => "Unknown",
    }
}

/// Display dataset information.
pub(crate) fn cmd_info(path: &Path) -> crate::Result<()> {
    let dataset = load_dataset(path)?;

    let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

    println!("File: {}", path.display());
    println!("Format: {}", get_format(path));
    println!("Rows: {}", dataset.len());
    println!("Batches: {}", dataset.num_batches());
    println!("Columns: {}", dataset.schema().fields().len());
    println!("Size: {} bytes", file_size);

    Ok(())
}

/// Display first N rows of a dataset.
pub(crate) fn cmd_head(path: &Path, rows: usize) -> crate::Result<()> {
    let dataset = load_dataset(path)?;

    if dataset.is_empty() {
        println!("Dataset is empty");
        return Ok(());
    }

    let mut collected = Vec::new();
    let mut count = 0;

    for batch in dataset.iter() {
        if count >= rows {
            break;
        }
        let take = (rows - count).min(batch.num_rows());
        if take > 0 {
            collected.push(batch.slice(0, take));
            count += take;
        }
    }

    if collected.is_empty() {
        println!("No data to display");
        return Ok(());
    }

    print_batches(&collected).map_err(crate::Error::Arrow)?;

    if count < dataset.len() {
        println!("... showing {} of {} rows", count, dataset.len());
    }

    Ok(())
}

/// Display dataset schema.
pub(crate) fn cmd_schema(path: &Path) -> crate::Result<()> {
    let dataset = load_dataset(path)?;
    let schema = dataset.schema();

    println!("Schema for {}:", path.display());
    println!();

    for (i, field) in schema.fields().iter().enumerate() {
        let nullable = if field.is_nullable() {
            "nullable"
        } else {
            "not null"
        };
        println!(
            "  {}: {} ({}) [{}]",
            i,
            field.name(),
            field.data_type(),
            nullable
        );
    }

    println!();
    println!("Total columns: {}", schema.fields().len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{path::PathBuf, sync::Arc};

    use arrow::{
        array::{Int32Array, RecordBatch, StringArray},
        datatypes::{DataType, Field, Schema},
    };

    use super::*;
    use crate::Error;

    fn create_test_dataset(rows: usize) -> ArrowDataset {
        let schema = Arc::new(Schema::new(vec![
            Field::new("id", DataType::Int32, false),
            Field::new("name", DataType::Utf8, false),
        ]));

        let ids: Vec<i32> = (0..rows as i32).collect();
        let names: Vec<String> = ids.iter().map(|i| format!("item_{}", i)).collect();

        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Int32Array::from(ids)),
                Arc::new(StringArray::from(names)),
            ],
        )
        .ok()
        .unwrap_or_else(|| panic!("Should create batch"));

        ArrowDataset::from_batch(batch)
            .ok()
            .unwrap_or_else(|| panic!("Should create dataset"))
    }

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
        dir.path().join(name)
    }

    #[test]
    fn test_save_and_load_each_format() {
        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let dataset = create_test_dataset(25);

        for name in ["data.parquet", "data.csv", "data.json", "data.jsonl"] {
            let path = temp_path(&temp_dir, name);
            save_dataset(&dataset, &path)
                .ok()
                .unwrap_or_else(|| panic!("Should save {name}"));
            let loaded = load_dataset(&path)
                .ok()
                .unwrap_or_else(|| panic!("Should load {name}"));
            assert_eq!(loaded.len(), 25, "{name}");
            assert_eq!(loaded.schema().fields().len(), 2, "{name}");
        }
    }

    #[test]
    fn test_unsupported_extension() {
        let dataset = create_test_dataset(1);

        let result = save_dataset(&dataset, Path::new("out.xlsx"));
        assert!(matches!(result, Err(Error::UnsupportedFormat { ref format }) if format == "xlsx"));

        let result = load_dataset(Path::new("no_extension"));
        assert!(matches!(result, Err(Error::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_get_format() {
        assert_eq!(get_format(Path::new("a.parquet")), "Parquet");
        assert_eq!(get_format(Path::new("a.csv")), "CSV");
        assert_eq!(get_format(Path::new("a.jsonl")), "JSON");
        assert_eq!(get_format(Path::new("a.bin")), "Unknown");
    }

    #[test]
    fn test_cmd_info() {
        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_path(&temp_dir, "test.parquet");
        create_test_dataset(100)
            .to_parquet(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should write parquet"));

        assert!(cmd_info(&path).is_ok());
    }

    #[test]
    fn test_cmd_head() {
        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_path(&temp_dir, "test.csv");
        create_test_dataset(100)
            .to_csv(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should write csv"));

        assert!(cmd_head(&path, 5).is_ok());
        assert!(cmd_head(&path, 0).is_ok());
        assert!(cmd_head(&path, 500).is_ok());
    }

    #[test]
    fn test_cmd_schema() {
        let temp_dir = tempfile::tempdir()
            .ok()
            .unwrap_or_else(|| panic!("Should create temp dir"));
        let path = temp_path(&temp_dir, "test.parquet");
        create_test_dataset(10)
            .to_parquet(&path)
            .ok()
            .unwrap_or_else(|| panic!("Should write parquet"));

        assert!(cmd_schema(&path).is_ok());
    }

    #[test]
    fn test_cmd_info_missing_file() {
        let result = cmd_info(Path::new("/nonexistent/data.parquet"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
