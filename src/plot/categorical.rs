use std::path::Path;

use plotters::prelude::*;
use plotters::style::FontTransform;

use super::{PlotError, Result};
use crate::color::bar_palette;
use crate::data::model::Dataset;
use crate::settings::columns::{ORIGINAL_LANGUAGE, VOTE_AVERAGE};
use crate::stats::grouping::group_means;

/// Average vote per original language, lowest average first.
pub fn plot_categorical(dataset: &Dataset, output_path: &Path, size: (u32, u32)) -> Result<()> {
    dataset.require_columns(&[ORIGINAL_LANGUAGE, VOTE_AVERAGE])?;
    let bars = group_means(dataset, ORIGINAL_LANGUAGE, VOTE_AVERAGE)?;
    draw_bars(&bars, output_path, size)
}

fn draw_bars(bars: &[(String, f64)], output_path: &Path, size: (u32, u32)) -> Result<()> {
    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let n = bars.len().max(1) as u32;
    let finite = bars.iter().map(|(_, m)| *m).filter(|m| m.is_finite());
    let low = finite.clone().fold(0.0, f64::min);
    let high = finite.fold(0.0, f64::max);
    let y_range = if high > low { low * 1.1..high * 1.1 } else { 0.0..1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Vote by Original Language", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(60)
        .build_cartesian_2d((0u32..n).into_segmented(), y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let label_for = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) => bars
            .get(*i as usize)
            .map(|(label, _)| label.clone())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n as usize)
        .x_label_formatter(&label_for)
        .x_label_style(("sans-serif", 14).into_font().transform(FontTransform::Rotate90))
        .x_desc("Original Language")
        .y_desc("Average Vote")
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let palette = bar_palette(bars.len());
    chart
        .draw_series(bars.iter().zip(palette).enumerate().map(|(i, ((_, mean), color))| {
            let i = i as u32;
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), *mean)],
                color.filled(),
            );
            bar.set_margin(0, 0, 4, 4);
            bar
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    Ok(())
}
