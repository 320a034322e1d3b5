use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

/// Single-series accent (matplotlib's first cycle color).
pub const ACCENT: RGBColor = RGBColor(31, 119, 180);

/// Hue of the first bar, so a short palette starts on blue rather than red.
const START_HUE: f32 = 210.0;
const SATURATION: f32 = 0.65;
/// Neighbouring bars alternate between these so similar hues stay apart.
const LIGHTNESS: [f32; 2] = [0.50, 0.65];

fn to_rgb(hsl: Hsl) -> RGBColor {
    let srgb: Srgb = hsl.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    RGBColor(r, g, b)
}

/// One colour per bar: hues evenly spaced around the wheel from
/// [`START_HUE`], lightness alternating between neighbours.
pub fn bar_palette(n: usize) -> Vec<RGBColor> {
    let step = 360.0 / n.max(1) as f32;
    (0..n)
        .map(|i| {
            let hue = (START_HUE + i as f32 * step) % 360.0;
            to_rgb(Hsl::new(hue, SATURATION, LIGHTNESS[i % 2]))
        })
        .collect()
}
