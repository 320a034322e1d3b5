//! Chart rendering with [`plotters`].
//!
//! Each chart is split into a data step, which checks its required columns
//! and returns a [`ColumnError`] before touching the filesystem, and a
//! drawing step that writes a PNG through the bitmap backend.

pub mod categorical;
pub mod relational;
pub mod statistical;

use std::ops::Range;

use thiserror::Error;

use crate::data::model::ColumnError;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error(transparent)]
    Column(#[from] ColumnError),

    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),
}

impl PlotError {
    /// The column this step needed but did not find, if that is the failure.
    pub fn missing_column(&self) -> Option<&str> {
        match self {
            PlotError::Column(ColumnError::Missing(name)) => Some(name),
            _ => None,
        }
    }
}

type Result<T> = core::result::Result<T, PlotError>;

/// Axis range over the finite values, padded by 5% on each side.
///
/// Falls back to `0..1` for empty input and widens a single-valued range.
pub fn padded_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min > max {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}
