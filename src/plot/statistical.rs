use std::path::Path;

use plotters::prelude::*;

use super::{padded_range, PlotError, Result};
use crate::color::ACCENT;
use crate::data::model::Dataset;
use crate::settings::columns::VOTE_AVERAGE;
use crate::stats::BoxStats;

// Vertical extents in a unit-height chart.
const BOX_BOTTOM: f64 = 0.3;
const BOX_TOP: f64 = 0.7;
const CAP_BOTTOM: f64 = 0.4;
const CAP_TOP: f64 = 0.6;
const MIDLINE: f64 = 0.5;

/// Horizontal box plot of the vote average distribution.
pub fn plot_statistical(dataset: &Dataset, output_path: &Path, size: (u32, u32)) -> Result<()> {
    let values = dataset.numeric_values(VOTE_AVERAGE)?;
    draw_box(BoxStats::of(&values).as_ref(), &values, output_path, size)
}

fn draw_box(stats: Option<&BoxStats>, values: &[f64], output_path: &Path, size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Box Plot: Vote Average Distribution", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(20)
        .build_cartesian_2d(padded_range(values.iter().copied()), 0.0..1.0)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .x_desc("Vote Average")
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    if let Some(b) = stats {
        let line = BLACK.stroke_width(2);

        chart
            .draw_series([
                Rectangle::new([(b.q1, BOX_BOTTOM), (b.q3, BOX_TOP)], ACCENT.mix(0.6).filled()),
                Rectangle::new([(b.q1, BOX_BOTTOM), (b.q3, BOX_TOP)], line),
            ])
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart
            .draw_series([
                PathElement::new(vec![(b.median, BOX_BOTTOM), (b.median, BOX_TOP)], line),
                PathElement::new(vec![(b.lower_whisker, MIDLINE), (b.q1, MIDLINE)], line),
                PathElement::new(vec![(b.q3, MIDLINE), (b.upper_whisker, MIDLINE)], line),
                PathElement::new(vec![(b.lower_whisker, CAP_BOTTOM), (b.lower_whisker, CAP_TOP)], line),
                PathElement::new(vec![(b.upper_whisker, CAP_BOTTOM), (b.upper_whisker, CAP_TOP)], line),
            ])
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart
            .draw_series(
                b.outliers
                    .iter()
                    .map(|&v| Circle::new((v, MIDLINE), 4, BLACK.stroke_width(1))),
            )
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}
