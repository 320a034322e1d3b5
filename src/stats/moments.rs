use log::warn;

use super::{central_moment, mean, sample_std};
use crate::data::model::{ColumnError, Dataset};

/// Below this relative variance the skew and kurtosis are reported as `NaN`.
const ZERO_VARIANCE_RESOLUTION: f64 = f64::EPSILON;

/// The four statistical moments of one column.
///
/// Every field is `None` when the column does not exist; a present column
/// always fills all four, using `NaN` for undefined results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub skewness: Option<f64>,
    pub excess_kurtosis: Option<f64>,
}

impl Moments {
    pub fn absent() -> Self {
        Moments {
            mean: None,
            std_dev: None,
            skewness: None,
            excess_kurtosis: None,
        }
    }

    /// Moments of already-cleaned observations.
    pub fn of(values: &[f64]) -> Self {
        Moments {
            mean: Some(mean(values)),
            std_dev: Some(sample_std(values)),
            skewness: Some(skewness(values)),
            excess_kurtosis: Some(excess_kurtosis(values)),
        }
    }

    /// Moments of a dataset column, skipping missing cells.
    ///
    /// A missing column yields [`Moments::absent`]; a non-numeric column is
    /// an error.
    pub fn of_column(dataset: &Dataset, column: &str) -> Result<Self, ColumnError> {
        match dataset.numeric_values(column) {
            Ok(values) => Ok(Moments::of(&values)),
            Err(ColumnError::Missing(name)) => {
                warn!("column '{name}' not found; skipping statistical moments");
                Ok(Moments::absent())
            }
            Err(err) => Err(err),
        }
    }

    /// All four values, or `None` if any is absent.
    pub fn values(&self) -> Option<(f64, f64, f64, f64)> {
        Some((
            self.mean?,
            self.std_dev?,
            self.skewness?,
            self.excess_kurtosis?,
        ))
    }
}

fn has_variance(values: &[f64], m2: f64) -> bool {
    let scale = ZERO_VARIANCE_RESOLUTION * mean(values);
    m2 > scale * scale
}

/// Third standardized moment (biased, Fisher-Pearson).
pub fn skewness(values: &[f64]) -> f64 {
    let m2 = central_moment(values, 2);
    if values.is_empty() || !has_variance(values, m2) {
        return f64::NAN;
    }
    central_moment(values, 3) / m2.powf(1.5)
}

/// Fourth standardized moment minus 3 (biased).
pub fn excess_kurtosis(values: &[f64]) -> f64 {
    let m2 = central_moment(values, 2);
    if values.is_empty() || !has_variance(values, m2) {
        return f64::NAN;
    }
    central_moment(values, 4) / (m2 * m2) - 3.0
}
