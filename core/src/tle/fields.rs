use log::debug;
use std::ops::Range;

/// Inclination, degrees (columns 9-16).
const INCLINATION: Range<usize> = 8..16;
/// Eccentricity with an implied leading decimal point (columns 27-33).
const ECCENTRICITY: Range<usize> = 26..33;
/// Mean motion, revolutions per day (columns 53-63).
const MEAN_MOTION: Range<usize> = 52..63;

/// Returns the part of `range` that exists in `line`.
///
/// Short lines yield the partial field, like a clamped slice would.
fn column(line: &str, range: Range<usize>) -> Option<&str> {
    let len = line.len();
    line.get(range.start.min(len)..range.end.min(len))
}

fn parse_field(line: &str, range: Range<usize>, field: &str) -> Option<f64> {
    let raw = column(line, range)?.trim();
    match raw.parse::<f64>() {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("unable to read {} from {:?}: {}", field, raw, err);
            None
        }
    }
}

pub fn inclination(line2: &str) -> Option<f64> {
    parse_field(line2, INCLINATION, "inclination")
}

/// Eccentricity, reinserting the `0.` the format omits.
pub fn eccentricity(line2: &str) -> Option<f64> {
    let raw = column(line2, ECCENTRICITY)?.trim();
    let text = format!("0.{}", raw);
    match text.parse::<f64>() {
        Ok(value) => Some(value),
        Err(err) => {
            debug!("unable to read eccentricity from {:?}: {}", raw, err);
            None
        }
    }
}

pub fn mean_motion(line2: &str) -> Option<f64> {
    parse_field(line2, MEAN_MOTION, "mean motion")
}

/// Borrowed view over a TLE line 2.
#[derive(Debug, Clone, Copy)]
pub struct LineTwo<'a>(pub &'a str);

impl<'a> LineTwo<'a> {
    pub fn inclination(&self) -> Option<f64> {
        inclination(self.0)
    }

    pub fn eccentricity(&self) -> Option<f64> {
        eccentricity(self.0)
    }

    pub fn mean_motion(&self) -> Option<f64> {
        mean_motion(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISS: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

    #[test]
    fn reads_fixed_columns() {
        let line = LineTwo(ISS);
        assert!((line.inclination().unwrap() - 51.6416).abs() < 1e-4);
        assert!((line.eccentricity().unwrap() - 0.0006703).abs() < 1e-10);
        assert!((line.mean_motion().unwrap() - 15.72125391).abs() < 1e-4);
    }

    #[test]
    fn inclination_field_with_leading_space() {
        let line = format!("2 44713 {} 123.4567 0001234  90.1234 270.0000 15.06391234 12345", " 53.0000");
        assert_eq!(&line[8..16], " 53.0000");
        assert!((inclination(&line).unwrap() - 53.0).abs() < 1e-4);
    }

    #[test]
    fn eccentricity_reinserts_leading_zero() {
        let line = "2 44713  53.0546 123.4567 0001234  90.1234 270.0000 15.06391234 12345";
        assert_eq!(&line[26..33], "0001234");
        assert_eq!(eccentricity(line), Some(0.0001234));
    }

    #[test]
    fn malformed_fields_are_absent() {
        let line = "2 44713  5x.0546 123.4567 00a1234  90.1234 270.0000 15.0639zz34 12345";
        assert_eq!(inclination(line), None);
        assert_eq!(eccentricity(line), None);
        assert_eq!(mean_motion(line), None);
    }

    #[test]
    fn short_lines_do_not_panic() {
        assert_eq!(inclination(""), None);
        assert_eq!(mean_motion("2 25544  51.6416"), None);
        assert!((inclination("2 25544  51.64").unwrap() - 51.64).abs() < 1e-9);
    }

    #[test]
    fn non_ascii_boundaries_are_absent() {
        assert_eq!(inclination("2 25544 é51.6416 ..."), None);
    }
}
