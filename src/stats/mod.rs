//! Descriptive statistics over plain `f64` slices.
//!
//! Callers strip missing values before handing data in; every function here
//! returns `NaN` instead of failing when the input is too small.

pub mod grouping;
pub mod moments;

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let mu = mean(values);
    let ss: f64 = values.iter().map(|v| (v - mu).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Population central moment of the given order.
pub fn central_moment(values: &[f64], order: i32) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mu = mean(values);
    values.iter().map(|v| (v - mu).powi(order)).sum::<f64>() / values.len() as f64
}

/// Quantile of ascending-sorted data with linear interpolation between
/// closest ranks.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = pos.floor() as usize;
            let hi = pos.ceil() as usize;
            let frac = pos - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

/// Copy and sort ascending.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Pearson correlation of paired observations.
///
/// `NaN` with fewer than two pairs or when either side has no variance.
pub fn pearson(pairs: &[(f64, f64)]) -> f64 {
    if pairs.len() < 2 {
        return f64::NAN;
    }
    let n = pairs.len() as f64;
    let mx = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let my = pairs.iter().map(|p| p.1).sum::<f64>() / n;
    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for &(x, y) in pairs {
        let (dx, dy) = (x - mx, y - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    let denom = (sxx * syy).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    (sxy / denom).clamp(-1.0, 1.0)
}

// ---------------------------------------------------------------------------
// Summary – the eight rows of a `describe` table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Summary {
    pub fn of(values: &[f64]) -> Self {
        let s = sorted(values);
        Summary {
            count: s.len(),
            mean: mean(&s),
            std: sample_std(&s),
            min: s.first().copied().unwrap_or(f64::NAN),
            q25: quantile_sorted(&s, 0.25),
            median: quantile_sorted(&s, 0.5),
            q75: quantile_sorted(&s, 0.75),
            max: s.last().copied().unwrap_or(f64::NAN),
        }
    }
}

// ---------------------------------------------------------------------------
// BoxStats – Tukey box plot geometry
// ---------------------------------------------------------------------------

/// Whisker reach as a multiple of the interquartile range.
pub const WHISKER_IQR: f64 = 1.5;

#[derive(Debug, Clone, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Smallest observation within `WHISKER_IQR` of `q1`.
    pub lower_whisker: f64,
    /// Largest observation within `WHISKER_IQR` of `q3`.
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

impl BoxStats {
    /// `None` for empty input.
    pub fn of(values: &[f64]) -> Option<Self> {
        let s = sorted(values);
        if s.is_empty() {
            return None;
        }
        let q1 = quantile_sorted(&s, 0.25);
        let median = quantile_sorted(&s, 0.5);
        let q3 = quantile_sorted(&s, 0.75);
        let reach = WHISKER_IQR * (q3 - q1);
        let (lo_fence, hi_fence) = (q1 - reach, q3 + reach);

        let lower_whisker = s.iter().copied().find(|v| *v >= lo_fence).unwrap_or(q1);
        let upper_whisker = s.iter().rev().copied().find(|v| *v <= hi_fence).unwrap_or(q3);
        let outliers = s
            .iter()
            .copied()
            .filter(|v| *v < lo_fence || *v > hi_fence)
            .collect();

        Some(BoxStats {
            q1,
            median,
            q3,
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn mean_and_sample_std() {
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((mean(&v) - 3.0).abs() < EPS);
        assert!((sample_std(&v) - 2.5f64.sqrt()).abs() < EPS);
        assert!(mean(&[]).is_nan());
        assert!(sample_std(&[1.0]).is_nan());
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let s = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile_sorted(&s, 0.25) - 1.75).abs() < EPS);
        assert!((quantile_sorted(&s, 0.5) - 2.5).abs() < EPS);
        assert!((quantile_sorted(&s, 1.0) - 4.0).abs() < EPS);
        assert!(quantile_sorted(&[], 0.5).is_nan());
    }

    #[test]
    fn summary_matches_describe() {
        let sum = Summary::of(&[5.0, 1.0, 4.0, 2.0, 3.0]);
        assert_eq!(sum.count, 5);
        assert_eq!(sum.min, 1.0);
        assert_eq!(sum.q25, 2.0);
        assert_eq!(sum.median, 3.0);
        assert_eq!(sum.q75, 4.0);
        assert_eq!(sum.max, 5.0);

        let empty = Summary::of(&[]);
        assert_eq!(empty.count, 0);
        assert!(empty.mean.is_nan() && empty.max.is_nan());
    }

    #[test]
    fn pearson_edge_cases() {
        let perfect = [(1.0, 2.0), (2.0, 4.0), (3.0, 6.0)];
        assert!((pearson(&perfect) - 1.0).abs() < EPS);
        let inverse = [(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)];
        assert!((pearson(&inverse) + 1.0).abs() < EPS);
        assert!(pearson(&[(1.0, 1.0)]).is_nan());
        assert!(pearson(&[(1.0, 5.0), (2.0, 5.0)]).is_nan());
    }

    #[test]
    fn box_stats_split_outliers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let b = BoxStats::of(&values).unwrap();
        assert!((b.q1 - 2.25).abs() < EPS);
        assert!((b.median - 3.5).abs() < EPS);
        assert!((b.q3 - 4.75).abs() < EPS);
        assert_eq!(b.lower_whisker, 1.0);
        assert_eq!(b.upper_whisker, 5.0);
        assert_eq!(b.outliers, vec![100.0]);
        assert!(BoxStats::of(&[]).is_none());
    }
}
