use super::model::Dataset;

// ---------------------------------------------------------------------------
// Missing-value removal
// ---------------------------------------------------------------------------

/// Return indices of records that have a value in every column.
pub fn complete_indices(dataset: &Dataset) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| !rec.has_missing())
        .map(|(i, _)| i)
        .collect()
}

/// Drop every row with a missing value in any column.
///
/// Columns and their inferred kinds are kept as they are, even when a
/// column ends up with no rows at all.
pub fn drop_missing(dataset: &Dataset) -> Dataset {
    let records = complete_indices(dataset)
        .into_iter()
        .map(|i| dataset.records[i].clone())
        .collect();

    Dataset {
        columns: dataset.columns.clone(),
        records,
    }
}
