use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{debug, info};
use thiserror::Error;

use super::model::Dataset;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file '{}' was not found", .0.display())]
    FileNotFound(PathBuf),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a comma-separated file with a header row.
///
/// Every field is type-guessed independently and each column's kind is
/// inferred from the whole column afterwards. A missing file is reported as
/// [`LoadError::FileNotFound`] so the caller can tell it apart from a
/// malformed file.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(LoadError::FileNotFound(path.to_path_buf()).into());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("opening {}", path.display()));
        }
    };

    let dataset = read_csv(file).with_context(|| format!("reading {}", path.display()))?;
    info!(
        "loaded {} rows x {} columns from {}",
        dataset.len(),
        dataset.columns.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse CSV content from any reader.
pub fn read_csv<R: Read>(source: R) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    debug!("CSV headers: {headers:?}");

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        if record.len() > headers.len() {
            bail!(
                "CSV row {row_no}: expected {} fields, saw {}",
                headers.len(),
                record.len()
            );
        }
        rows.push(record.iter().map(str::to_string).collect::<Vec<_>>());
    }

    Ok(Dataset::from_text_rows(&headers, rows))
}
