use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Orbital planes the Starlink shells are launched into, degrees.
pub const STARLINK_SHELLS_DEG: [f64; 4] = [43.0, 53.0, 70.0, 97.0];

/// Inclination bucket produced by a [`RoundingPolicy`].
///
/// `snapped` marks a whole-degree bucket; unmatched values keep one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InclinationBucket {
    pub value: OrderedFloat<f64>,
    pub snapped: bool,
}

impl InclinationBucket {
    pub fn snapped(value: f64) -> Self {
        Self {
            value: OrderedFloat(value),
            snapped: true,
        }
    }

    pub fn unmatched(value: f64) -> Self {
        Self {
            value: OrderedFloat(round_to_tenth(value)),
            snapped: false,
        }
    }

    pub fn degrees(&self) -> f64 {
        self.value.into_inner()
    }
}

impl fmt::Display for InclinationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.snapped {
            write!(f, "{:.0}°", self.degrees())
        } else {
            write!(f, "{:.1}°", self.degrees())
        }
    }
}

/// Rounds the exact stored value to one decimal.
fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// How raw inclinations are grouped for a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Whole degree when the value sits within `tolerance` of it.
    NearestInteger { tolerance: f64 },
    /// Nearest member of `known` within `tolerance`, not merely the first
    /// one in list order; ties go to the earlier member.
    KnownInclinations { known: Vec<f64>, tolerance: f64 },
}

impl RoundingPolicy {
    pub fn nearest_integer() -> Self {
        RoundingPolicy::NearestInteger { tolerance: 0.5 }
    }

    pub fn starlink_shells() -> Self {
        RoundingPolicy::KnownInclinations {
            known: STARLINK_SHELLS_DEG.to_vec(),
            tolerance: 1.0,
        }
    }

    pub fn bucket(&self, inclination: f64) -> InclinationBucket {
        match self {
            RoundingPolicy::NearestInteger { tolerance } => {
                let whole = inclination.round_ties_even();
                if (inclination - whole).abs() <= *tolerance {
                    InclinationBucket::snapped(whole)
                } else {
                    InclinationBucket::unmatched(inclination)
                }
            }
            RoundingPolicy::KnownInclinations { known, tolerance } => {
                let nearest = known
                    .iter()
                    .copied()
                    .map(|candidate| (candidate, (inclination - candidate).abs()))
                    .filter(|(_, distance)| distance <= tolerance)
                    .fold(None, |best: Option<(f64, f64)>, current| match best {
                        Some(best) if best.1 <= current.1 => Some(best),
                        _ => Some(current),
                    });
                match nearest {
                    Some((candidate, _)) => InclinationBucket::snapped(candidate),
                    None => InclinationBucket::unmatched(inclination),
                }
            }
        }
    }
}
