use crate::workflow::runner::{InclinationRun, SubsetInclinations};
use std::fmt::{self, Write};
use tlecore::classify::Variant;
use tlecore::math::StatsHelper;
use tlecore::orbit::orbital_period_minutes;

fn write_buckets<W: Write>(out: &mut W, subset: &SubsetInclinations) -> fmt::Result {
    for (bucket, count, percent) in subset.buckets.rows(subset.size) {
        writeln!(out, "{}: {} satellites ({:.1}%)", bucket, count, percent)?;
    }
    Ok(())
}

fn write_range_and_mean<W: Write>(out: &mut W, label: &str, values: &[f64], precision: usize, unit: &str) -> fmt::Result {
    if let (Some(min), Some(max), Some(mean)) = (
        StatsHelper::min(values),
        StatsHelper::max(values),
        StatsHelper::mean(values),
    ) {
        writeln!(out, "{} range: {:.*}{} - {:.*}{}", label, precision, min, unit, precision, max, unit)?;
        writeln!(out, "{} mean: {:.*}{}", label, precision, mean, unit)?;
    }
    Ok(())
}

pub fn write_report<W: Write>(out: &mut W, group: &str, run: &InclinationRun) -> fmt::Result {
    writeln!(out, "=== {} inclination distribution ===", group)?;
    writeln!(out)?;
    writeln!(out, "Retrieved {} {} satellites.", run.total, group)?;
    writeln!(out)?;
    writeln!(out, "Main satellites: {}", run.main.size)?;
    writeln!(out, "DTC satellites:  {}", run.dtc.size)?;
    writeln!(out)?;

    writeln!(out, "=== Main satellite inclinations ===")?;
    write_buckets(out, &run.main)?;
    writeln!(out)?;

    if run.dtc.size > 0 {
        writeln!(out, "=== DTC satellite inclinations ===")?;
        write_buckets(out, &run.dtc)?;
        writeln!(out)?;
    }

    writeln!(out, "=== Statistics ===")?;
    for variant in [Variant::Main, Variant::Dtc] {
        let subset = run.subset(variant);
        if subset.inclinations.is_empty() {
            continue;
        }
        writeln!(out, "{} satellites: {}", variant, subset.size)?;
        write_range_and_mean(out, "Inclination", &subset.inclinations, 2, "°")?;
        if variant == Variant::Main {
            writeln!(out, "Distinct inclinations: {}", subset.buckets.kinds())?;
        }
        writeln!(out)?;
    }

    writeln!(out, "=== Additional orbital parameters ===")?;
    write_range_and_mean(out, "Eccentricity", &run.eccentricities, 6, "")?;
    write_range_and_mean(out, "Mean motion", &run.mean_motions, 4, " revs/day")?;
    if let Some(period) = StatsHelper::mean(&run.mean_motions).and_then(orbital_period_minutes) {
        writeln!(out, "Mean orbital period: {:.2} min", period)?;
    }
    if run.metrics.excluded > 0 {
        writeln!(out)?;
        writeln!(out, "Unreadable fields skipped: {}", run.metrics.excluded)?;
    }
    Ok(())
}
