//! Identifier column coercion
//!
//! The hash splitter reads its identifier column as `i64`. Signed and
//! unsigned integers, integral floats and decimal strings are accepted;
//! anything else fails with [`Error::IdConversion`] naming the global row.

use std::fmt::Display;

use arrow::{
    array::{Array, ArrowPrimitiveType, LargeStringArray, PrimitiveArray, StringArray},
    datatypes::{
        DataType, Float32Type, Float64Type, Int16Type, Int32Type, Int64Type, Int8Type,
        UInt16Type, UInt32Type, UInt64Type, UInt8Type,
    },
};

use crate::{
    error::{Error, Result},
    ArrowDataset, Dataset,
};

/// Read `id_column` of `dataset` as one `i64` per row, in row order.
///
/// # Errors
/// - [`Error::ColumnNotFound`] if the column does not exist
/// - [`Error::IdConversion`] for nulls, values outside the `i64` range,
///   non-integral or non-finite floats, unparsable strings and unsupported
///   column types
pub fn identifier_values(dataset: &ArrowDataset, id_column: &str) -> Result<Vec<i64>> {
    let schema = dataset.schema();
    let (column_index, _) = schema
        .column_with_name(id_column)
        .ok_or_else(|| Error::column_not_found(id_column))?;

    let mut ids = Vec::with_capacity(dataset.len());
    for batch in dataset.batches() {
        append_ids(batch.column(column_index).as_ref(), id_column, &mut ids)?;
    }
    Ok(ids)
}

fn append_ids(array: &dyn Array, column: &str, out: &mut Vec<i64>) -> Result<()> {
    match array.data_type() {
        DataType::Int8 => append_primitive::<Int8Type>(array, column, out, |v| Ok(i64::from(v))),
        DataType::Int16 => append_primitive::<Int16Type>(array, column, out, |v| Ok(i64::from(v))),
        DataType::Int32 => append_primitive::<Int32Type>(array, column, out, |v| Ok(i64::from(v))),
        DataType::Int64 => append_primitive::<Int64Type>(array, column, out, Ok),
        DataType::UInt8 => append_primitive::<UInt8Type>(array, column, out, |v| Ok(i64::from(v))),
        DataType::UInt16 => {
            append_primitive::<UInt16Type>(array, column, out, |v| Ok(i64::from(v)))
        }
        DataType::UInt32 => {
            append_primitive::<UInt32Type>(array, column, out, |v| Ok(i64::from(v)))
        }
        DataType::UInt64 => append_primitive::<UInt64Type>(array, column, out, |v| {
            i64::try_from(v).map_err(|_| format!("value {v} is outside the i64 range"))
        }),
        DataType::Float32 => {
            append_primitive::<Float32Type>(array, column, out, |v| float_to_id(f64::from(v)))
        }
        DataType::Float64 => append_primitive::<Float64Type>(array, column, out, float_to_id),
        DataType::Utf8 => {
            let arr = array
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| Error::id_conversion(column, out.len(), "failed to downcast Utf8"))?;
            append_strings(arr.iter(), column, out)
        }
        DataType::LargeUtf8 => {
            let arr = array
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .ok_or_else(|| {
                    Error::id_conversion(column, out.len(), "failed to downcast LargeUtf8")
                })?;
            append_strings(arr.iter(), column, out)
        }
        dt => Err(Error::id_conversion(
            column,
            out.len(),
            format!("unsupported identifier type {dt}"),
        )),
    }
}

fn append_primitive<T>(
    array: &dyn Array,
    column: &str,
    out: &mut Vec<i64>,
    convert: impl Fn(T::Native) -> std::result::Result<i64, String>,
) -> Result<()>
where
    T: ArrowPrimitiveType,
    T::Native: Display,
{
    let arr = array
        .as_any()
        .downcast_ref::<PrimitiveArray<T>>()
        .ok_or_else(|| {
            Error::id_conversion(
                column,
                out.len(),
                format!("failed to downcast {}", array.data_type()),
            )
        })?;

    for value in arr.iter() {
        let row = out.len();
        let value = value.ok_or_else(|| Error::id_conversion(column, row, "identifier is null"))?;
        let id = convert(value).map_err(|message| Error::id_conversion(column, row, message))?;
        out.push(id);
    }
    Ok(())
}

fn append_strings<'a>(
    values: impl Iterator<Item = Option<&'a str>>,
    column: &str,
    out: &mut Vec<i64>,
) -> Result<()> {
    for value in values {
        let row = out.len();
        let text = value.ok_or_else(|| Error::id_conversion(column, row, "identifier is null"))?;
        let id = text.trim().parse::<i64>().map_err(|e| {
            Error::id_conversion(column, row, format!("'{text}' is not an integer: {e}"))
        })?;
        out.push(id);
    }
    Ok(())
}

// 2^63; `i64::MAX as f64` rounds up to this value, which is already out of range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation)]
fn float_to_id(value: f64) -> std::result::Result<i64, String> {
    if !value.is_finite() {
        return Err(format!("value {value} is not finite"));
    }
    if value.fract() != 0.0 {
        return Err(format!("value {value} is not an integer"));
    }
    if !(-I64_BOUND..I64_BOUND).contains(&value) {
        return Err(format!("value {value} is outside the i64 range"));
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use arrow::{
        array::{
            ArrayRef, BooleanArray, Float32Array, Float64Array, Int16Array, Int32Array,
            Int64Array, Int8Array, RecordBatch, UInt16Array, UInt32Array, UInt64Array, UInt8Array,
        },
        datatypes::{Field, Schema},
    };

    use super::*;

    fn dataset_with(column: ArrayRef) -> ArrowDataset {
        let schema = Arc::new(Schema::new(vec![Field::new(
            "id",
            column.data_type().clone(),
            true,
        )]));
        let batch = RecordBatch::try_new(schema, vec![column]).expect("batch creation failed");
        ArrowDataset::from_batch(batch).expect("dataset creation failed")
    }

    fn read(column: ArrayRef) -> Result<Vec<i64>> {
        identifier_values(&dataset_with(column), "id")
    }

    #[test]
    fn test_signed_integer_types() {
        assert_eq!(read(Arc::new(Int8Array::from(vec![-3, 4]))).expect("i8"), vec![-3, 4]);
        assert_eq!(read(Arc::new(Int16Array::from(vec![300]))).expect("i16"), vec![300]);
        assert_eq!(read(Arc::new(Int32Array::from(vec![7, -7]))).expect("i32"), vec![7, -7]);
        assert_eq!(
            read(Arc::new(Int64Array::from(vec![i64::MIN, i64::MAX]))).expect("i64"),
            vec![i64::MIN, i64::MAX]
        );
    }

    #[test]
    fn test_unsigned_integer_types() {
        assert_eq!(read(Arc::new(UInt8Array::from(vec![255]))).expect("u8"), vec![255]);
        assert_eq!(read(Arc::new(UInt16Array::from(vec![1, 2]))).expect("u16"), vec![1, 2]);
        assert_eq!(
            read(Arc::new(UInt32Array::from(vec![u32::MAX]))).expect("u32"),
            vec![i64::from(u32::MAX)]
        );
        assert_eq!(
            read(Arc::new(UInt64Array::from(vec![42_u64]))).expect("u64"),
            vec![42]
        );
    }

    #[test]
    fn test_u64_above_i64_max_fails() {
        let result = read(Arc::new(UInt64Array::from(vec![1, u64::MAX])));
        assert!(matches!(result, Err(Error::IdConversion { row: 1, .. })));
    }

    #[test]
    fn test_integral_floats_are_accepted() {
        assert_eq!(
            read(Arc::new(Float64Array::from(vec![3.0, -12.0]))).expect("f64"),
            vec![3, -12]
        );
        assert_eq!(read(Arc::new(Float32Array::from(vec![8.0_f32]))).expect("f32"), vec![8]);
    }

    #[test]
    fn test_fractional_float_fails() {
        let result = read(Arc::new(Float64Array::from(vec![1.0, 2.5])));
        match result {
            Err(Error::IdConversion { row, message, .. }) => {
                assert_eq!(row, 1);
                assert!(message.contains("2.5"));
            }
            other => panic!("Expected IdConversion, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_and_huge_floats_fail() {
        assert!(read(Arc::new(Float64Array::from(vec![f64::NAN]))).is_err());
        assert!(read(Arc::new(Float64Array::from(vec![f64::INFINITY]))).is_err());
        assert!(read(Arc::new(Float64Array::from(vec![1e19]))).is_err());
        assert!(read(Arc::new(Float64Array::from(vec![-1e19]))).is_err());
    }

    #[test]
    fn test_decimal_strings_are_parsed() {
        let values = read(Arc::new(StringArray::from(vec!["12", " -4 ", "0"]))).expect("utf8");
        assert_eq!(values, vec![12, -4, 0]);

        let values = read(Arc::new(LargeStringArray::from(vec!["99"]))).expect("large utf8");
        assert_eq!(values, vec![99]);
    }

    #[test]
    fn test_unparsable_string_fails() {
        let result = read(Arc::new(StringArray::from(vec!["1", "2", "x3"])));
        match result {
            Err(Error::IdConversion { row, message, .. }) => {
                assert_eq!(row, 2);
                assert!(message.contains("x3"));
            }
            other => panic!("Expected IdConversion, got {other:?}"),
        }
    }

    #[test]
    fn test_null_identifier_fails() {
        let result = read(Arc::new(Int64Array::from(vec![Some(1), None])));
        match result {
            Err(Error::IdConversion { row, message, .. }) => {
                assert_eq!(row, 1);
                assert!(message.contains("null"));
            }
            other => panic!("Expected IdConversion, got {other:?}"),
        }
    }

    #[test]
    fn test_unsupported_type_fails() {
        let result = read(Arc::new(BooleanArray::from(vec![true])));
        assert!(matches!(result, Err(Error::IdConversion { row: 0, .. })));
    }

    #[test]
    fn test_missing_column() {
        let dataset = dataset_with(Arc::new(Int64Array::from(vec![1])));
        let result = identifier_values(&dataset, "key");
        assert!(matches!(result, Err(Error::ColumnNotFound { .. })));
    }

    #[test]
    fn test_rows_numbered_across_batches() {
        let schema = Arc::new(Schema::new(vec![Field::new("id", DataType::Int64, true)]));
        let first = RecordBatch::try_new(
            Arc::clone(&schema),
            vec![Arc::new(Int64Array::from(vec![1, 2, 3]))],
        )
        .expect("batch");
        let second =
            RecordBatch::try_new(schema, vec![Arc::new(Int64Array::from(vec![Some(4), None]))])
                .expect("batch");
        let dataset = ArrowDataset::new(vec![first, second]).expect("dataset");

        let result = identifier_values(&dataset, "id");

        assert!(matches!(result, Err(Error::IdConversion { row: 4, .. })));
    }
}
