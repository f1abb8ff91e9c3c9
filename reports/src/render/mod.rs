use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use tlecore::math::histogram;

pub mod altitude;

pub use altitude::render_altitude_histograms;

pub type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
pub const PURPLE: RGBColor = RGBColor(128, 0, 128);
pub const BROWN: RGBColor = RGBColor(165, 42, 42);

/// One histogram layer of a panel.
#[derive(Clone)]
pub struct Series<'a> {
    pub label: String,
    pub values: &'a [f64],
    pub color: RGBColor,
}

/// Builds a white drawing area backed by a PNG file.
pub fn build_plot(path: &Path, dims: (u32, u32)) -> anyhow::Result<Panel<'_>> {
    let area = BitMapBackend::new(path, dims).into_drawing_area();
    area.fill(&WHITE)?;
    Ok(area)
}

/// Value range spanning `values`, widened when degenerate.
pub fn auto_range(values: &[f64], fallback: (f64, f64)) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        fallback
    } else if max - min < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        (min, max)
    }
}

/// Draws overlaid equal-width histograms of every series on `area`.
pub fn draw_histogram(
    area: &Panel<'_>,
    title: &str,
    series: &[Series<'_>],
    bins: usize,
    range: (f64, f64),
) -> anyhow::Result<()> {
    let counts: Vec<Vec<usize>> = series
        .iter()
        .map(|s| histogram(s.values, bins, range))
        .collect();
    let peak = counts.iter().flatten().copied().max().unwrap_or(0).max(1);
    let y_top = peak as f64 * 1.1;

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 22).into_font())
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(range.0..range.1, 0f64..y_top)?;
    chart
        .configure_mesh()
        .x_desc("Altitude (km)")
        .y_desc("Number of Satellites")
        .bold_line_style(BLACK.mix(0.3))
        .draw()?;

    let width = (range.1 - range.0) / bins.max(1) as f64;
    for (layer, layer_counts) in series.iter().zip(&counts) {
        let color = layer.color;
        chart
            .draw_series(
                layer_counts
                    .iter()
                    .enumerate()
                    .filter(|&(_, &count)| count > 0)
                    .map(|(index, &count)| {
                        let x0 = range.0 + index as f64 * width;
                        Rectangle::new([(x0, 0.0), (x0 + width, count as f64)], color.mix(0.6).filled())
                    }),
            )?
            .label(layer.label.clone())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    if series.len() > 1 {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }
    Ok(())
}
