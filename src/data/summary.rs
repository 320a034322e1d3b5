use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use log::info;

use super::model::{ColumnKind, Dataset, Value};
use crate::stats::{pearson, Summary};

/// Row labels of the `describe` table, in print order.
pub const DESCRIBE_ROWS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

// ---------------------------------------------------------------------------
// Table builders
// ---------------------------------------------------------------------------

/// Count, mean, std, min, quartiles and max of every numeric column.
pub fn describe(dataset: &Dataset) -> Result<RecordBatch> {
    let mut fields = vec![Field::new("", DataType::Utf8, false)];
    let mut arrays: Vec<ArrayRef> = vec![Arc::new(StringArray::from(DESCRIBE_ROWS.to_vec()))];

    for idx in dataset.numeric_columns() {
        let values: Vec<f64> = dataset.records.iter().filter_map(|r| r.values[idx].as_f64()).collect();
        let s = Summary::of(&values);
        let column = vec![
            s.count as f64,
            s.mean,
            s.std,
            s.min,
            s.q25,
            s.median,
            s.q75,
            s.max,
        ];
        fields.push(Field::new(dataset.columns[idx].name.as_str(), DataType::Float64, false));
        arrays.push(Arc::new(Float64Array::from(column)));
    }

    batch(fields, arrays)
}

/// The first `n` rows of the numeric columns.
pub fn head(dataset: &Dataset, n: usize) -> Result<RecordBatch> {
    let rows = &dataset.records[..n.min(dataset.len())];
    let mut fields = Vec::new();
    let mut arrays: Vec<ArrayRef> = Vec::new();

    for idx in dataset.numeric_columns() {
        let name = dataset.columns[idx].name.as_str();
        if dataset.columns[idx].kind == ColumnKind::Integer {
            let cells: Vec<Option<i64>> = rows
                .iter()
                .map(|r| match r.values[idx] {
                    Value::Integer(i) => Some(i),
                    _ => None,
                })
                .collect();
            fields.push(Field::new(name, DataType::Int64, true));
            arrays.push(Arc::new(Int64Array::from(cells)));
        } else {
            let cells: Vec<Option<f64>> = rows.iter().map(|r| r.values[idx].as_f64()).collect();
            fields.push(Field::new(name, DataType::Float64, true));
            arrays.push(Arc::new(Float64Array::from(cells)));
        }
    }

    batch(fields, arrays)
}

/// Pairwise Pearson correlation among numeric columns.
///
/// Each pair uses only rows where both cells are present.
pub fn correlation(dataset: &Dataset) -> Result<RecordBatch> {
    let numeric = dataset.numeric_columns();
    let names: Vec<&str> = numeric.iter().map(|&i| dataset.columns[i].name.as_str()).collect();

    let mut fields = vec![Field::new("", DataType::Utf8, false)];
    let mut arrays: Vec<ArrayRef> = vec![Arc::new(StringArray::from(names.clone()))];

    for &col in &numeric {
        let coefficients: Vec<f64> = numeric
            .iter()
            .map(|&row| {
                let pairs: Vec<(f64, f64)> = dataset
                    .records
                    .iter()
                    .filter_map(|r| Some((r.values[row].as_f64()?, r.values[col].as_f64()?)))
                    .collect();
                pearson(&pairs)
            })
            .collect();
        fields.push(Field::new(dataset.columns[col].name.as_str(), DataType::Float64, false));
        arrays.push(Arc::new(Float64Array::from(coefficients)));
    }

    batch(fields, arrays)
}

fn batch(fields: Vec<Field>, arrays: Vec<ArrayRef>) -> Result<RecordBatch> {
    RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays).context("assembling summary table")
}

// ---------------------------------------------------------------------------
// Printing
// ---------------------------------------------------------------------------

/// Print describe, head and correlation tables for the numeric columns.
pub fn print_numeric_overview<W: Write>(dataset: &Dataset, head_rows: usize, out: &mut W) -> Result<()> {
    if dataset.numeric_columns().is_empty() {
        info!("no numeric columns to summarise");
        return Ok(());
    }

    for table in [describe(dataset)?, head(dataset, head_rows)?, correlation(dataset)?] {
        let rendered = pretty_format_batches(&[table]).context("formatting summary table")?;
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}
