use super::write_altitude_summary;
use crate::workflow::runner::{AltitudeRun, ALTITUDE_RANGES};
use std::fmt::{self, Write};
use tlecore::math::{count_in_ranges, Summary};

pub fn write_summary<W: Write>(out: &mut W, group: &str, run: &AltitudeRun) -> fmt::Result {
    writeln!(out, "=== {} altitude distribution ===", group)?;
    writeln!(out)?;
    writeln!(out, "Retrieved {} {} satellites.", run.total, group)?;
    if run.metrics.excluded > 0 {
        writeln!(
            out,
            "Skipped {} satellites with unreadable orbital elements.",
            run.metrics.excluded
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Main satellites: {}", run.altitudes.main.len())?;
    writeln!(out, "DTC satellites:  {}", run.altitudes.dtc.len())?;
    writeln!(out)?;

    writeln!(out, "=== Main satellites by inclination ===")?;
    for (bucket, altitudes) in &run.by_inclination {
        let Some(summary) = Summary::of(altitudes) else {
            continue;
        };
        writeln!(out)?;
        writeln!(out, "{} orbital plane ({} satellites):", bucket, summary.count)?;
        write_altitude_summary(out, &summary, "  ")?;
    }
    writeln!(out)?;

    writeln!(out, "=== Overall ===")?;
    if let Some(summary) = Summary::of(&run.altitudes.main) {
        writeln!(out, "Main satellites (all):")?;
        write_altitude_summary(out, &summary, "  ")?;
        writeln!(out)?;
    }
    if let Some(summary) = Summary::of(&run.altitudes.dtc) {
        writeln!(out, "DTC satellites:")?;
        write_altitude_summary(out, &summary, "  ")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Satellites per altitude band, bands without satellites omitted.
pub fn write_ranges<W: Write>(out: &mut W, run: &AltitudeRun) -> fmt::Result {
    writeln!(out, "=== Altitude bands ===")?;
    let rows = count_in_ranges(&ALTITUDE_RANGES, &[run.altitudes.main.as_slice(), run.altitudes.dtc.as_slice()]);
    for row in rows {
        writeln!(out)?;
        writeln!(out, "{}-{} km:", row.interval.low, row.interval.high)?;
        writeln!(out, "  Main satellites: {}", row.counts[0])?;
        writeln!(out, "  DTC satellites:  {}", row.counts[1])?;
        writeln!(out, "  Total:           {}", row.total())?;
    }
    Ok(())
}
