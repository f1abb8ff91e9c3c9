//! Console formatting of report runs.
//!
//! Writers target any `fmt::Write` so the text can be checked in tests and
//! printed by the binaries unchanged.

pub mod altitude;
pub mod inclination;

use std::fmt::{self, Write};
use tlecore::math::Summary;

/// Writes min / max / mean / median / std lines for a summary, km.
pub(crate) fn write_altitude_summary<W: Write>(out: &mut W, summary: &Summary, indent: &str) -> fmt::Result {
    writeln!(out, "{}Lowest altitude:  {:.2} km", indent, summary.min)?;
    writeln!(out, "{}Highest altitude: {:.2} km", indent, summary.max)?;
    writeln!(out, "{}Mean altitude:    {:.2} km", indent, summary.mean)?;
    writeln!(out, "{}Median:           {:.2} km", indent, summary.median)?;
    writeln!(out, "{}Std deviation:    {:.2} km", indent, summary.std_dev)
}
