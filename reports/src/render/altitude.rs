use super::{auto_range, build_plot, draw_histogram, Series, BROWN, ORANGE, PURPLE};
use crate::workflow::runner::AltitudeRun;
use plotters::prelude::*;
use std::path::Path;

/// Fixed x range of the altitude panels, km.
pub const ALTITUDE_AXIS_KM: (f64, f64) = (200.0, 600.0);
pub const DEFAULT_OUTPUT: &str = "starlink_altitude_histogram.png";

const SHELL_COLORS: [RGBColor; 4] = [RED, PURPLE, CYAN, BROWN];

/// Renders the 3x3 altitude histogram grid to `path`.
///
/// Panels: all, main, DTC (auto range), one per inclination bucket (up to
/// four), inclination overlay, main versus DTC.
pub fn render_altitude_histograms(path: &Path, run: &AltitudeRun) -> anyhow::Result<()> {
    let root = build_plot(path, (1800, 1200))?;
    let panels = root.split_evenly((3, 3));

    let all = run.all_altitudes();
    let main = &run.altitudes.main;
    let dtc = &run.altitudes.dtc;

    draw_histogram(
        &panels[0],
        &format!("All Satellites (n={})", all.len()),
        &[Series {
            label: "All".into(),
            values: &all,
            color: BLUE,
        }],
        50,
        ALTITUDE_AXIS_KM,
    )?;
    draw_histogram(
        &panels[1],
        &format!("Main Satellites - All (n={})", main.len()),
        &[Series {
            label: "Main".into(),
            values: main,
            color: GREEN,
        }],
        50,
        ALTITUDE_AXIS_KM,
    )?;
    draw_histogram(
        &panels[2],
        &format!("DTC Satellites (n={})", dtc.len()),
        &[Series {
            label: "DTC".into(),
            values: dtc,
            color: ORANGE,
        }],
        30,
        auto_range(dtc, ALTITUDE_AXIS_KM),
    )?;

    let shells: Vec<Series<'_>> = run
        .by_inclination
        .iter()
        .take(SHELL_COLORS.len())
        .zip(SHELL_COLORS)
        .map(|((bucket, altitudes), color)| Series {
            label: bucket.to_string(),
            values: altitudes,
            color,
        })
        .collect();
    for (panel, shell) in panels[3..7].iter().zip(&shells) {
        draw_histogram(
            panel,
            &format!("Main Satellites - {} (n={})", shell.label, shell.values.len()),
            &[shell.clone()],
            40,
            ALTITUDE_AXIS_KM,
        )?;
    }

    let populated: Vec<Series<'_>> = shells
        .iter()
        .filter(|s| !s.values.is_empty())
        .cloned()
        .collect();
    draw_histogram(
        &panels[7],
        "Main Satellites - By Inclination",
        &populated,
        40,
        ALTITUDE_AXIS_KM,
    )?;
    draw_histogram(
        &panels[8],
        "Main vs DTC Comparison",
        &[
            Series {
                label: "Main".into(),
                values: main,
                color: GREEN,
            },
            Series {
                label: "DTC".into(),
                values: dtc,
                color: ORANGE,
            },
        ],
        50,
        ALTITUDE_AXIS_KM,
    )?;

    root.present()?;
    Ok(())
}
