use std::path::Path;

use plotters::prelude::*;

use super::{padded_range, PlotError, Result};
use crate::color::ACCENT;
use crate::data::model::{ColumnError, Dataset};
use crate::settings::columns::{VOTE_AVERAGE, VOTE_COUNT};

/// Marker opacity, so dense regions read darker.
const POINT_ALPHA: f64 = 0.5;

/// `(vote_count, vote_average)` for every row where both are present.
pub fn scatter_points(dataset: &Dataset) -> core::result::Result<Vec<(f64, f64)>, ColumnError> {
    dataset.require_columns(&[VOTE_COUNT, VOTE_AVERAGE])?;
    let x_idx = dataset.numeric_index(VOTE_COUNT)?;
    let y_idx = dataset.numeric_index(VOTE_AVERAGE)?;

    Ok(dataset
        .records
        .iter()
        .filter_map(|r| Some((r.values[x_idx].as_f64()?, r.values[y_idx].as_f64()?)))
        .collect())
}

/// Scatter plot of vote count against vote average.
///
/// Returns before creating `output_path` when either column is missing.
pub fn plot_relational(dataset: &Dataset, output_path: &Path, size: (u32, u32)) -> Result<()> {
    let points = scatter_points(dataset)?;
    draw_scatter(&points, output_path, size)
}

fn draw_scatter(points: &[(f64, f64)], output_path: &Path, size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let x_range = padded_range(points.iter().map(|p| p.0));
    let y_range = padded_range(points.iter().map(|p| p.1));

    let mut chart = ChartBuilder::on(&root)
        .caption("Scatter Plot: Vote Count vs. Vote Average", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Vote Count")
        .y_desc("Vote Average")
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let style = ACCENT.mix(POINT_ALPHA).filled();
    chart
        .draw_series(points.iter().map(|&(x, y)| Circle::new((x, y), 4, style)))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}
