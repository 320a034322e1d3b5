use std::collections::BTreeMap;

use crate::data::model::{ColumnError, Dataset, Value};

/// Mean of `value_col` for every distinct value of `group_col`, sorted
/// ascending by mean.
///
/// Groups are formed from observed values only: rows with a missing key are
/// skipped and a group without any numeric observation is left out. Equal
/// means keep the groups in key order.
pub fn group_means(
    dataset: &Dataset,
    group_col: &str,
    value_col: &str,
) -> Result<Vec<(String, f64)>, ColumnError> {
    let key_idx = dataset
        .column_index(group_col)
        .ok_or_else(|| ColumnError::Missing(group_col.to_string()))?;
    let val_idx = dataset.numeric_index(value_col)?;

    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for rec in &dataset.records {
        let key = &rec.values[key_idx];
        if matches!(key, Value::Null) {
            continue;
        }
        let Some(v) = rec.values[val_idx].as_f64() else {
            continue;
        };
        let entry = sums.entry(key.to_string()).or_insert((0.0, 0));
        entry.0 += v;
        entry.1 += 1;
    }

    let mut means: Vec<(String, f64)> = sums
        .into_iter()
        .map(|(key, (sum, n))| (key, sum / n as f64))
        .collect();
    means.sort_by(|a, b| a.1.total_cmp(&b.1));
    Ok(means)
}
