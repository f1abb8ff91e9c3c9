//! Orbit geometry derived from TLE mean motion via Kepler's third law.

use crate::tle::LineTwo;
use serde::Serialize;
use std::f64::consts::PI;

/// Earth's standard gravitational parameter, km^3/s^2.
pub const MU_EARTH_KM3_S2: f64 = 398_600.4418;
/// Equatorial Earth radius, km.
pub const EARTH_RADIUS_KM: f64 = 6378.137;
pub const MINUTES_PER_DAY: f64 = 1440.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitalElements {
    pub inclination_deg: f64,
    pub eccentricity: Option<f64>,
    pub mean_motion_rev_per_day: f64,
    pub orbital_period_minutes: f64,
    pub semi_major_axis_km: f64,
    pub altitude_km: f64,
}

/// Period in minutes for a mean motion in revolutions per day.
pub fn orbital_period_minutes(mean_motion_rev_per_day: f64) -> Option<f64> {
    if mean_motion_rev_per_day == 0.0 {
        return None;
    }
    let period = MINUTES_PER_DAY / mean_motion_rev_per_day;
    period.is_finite().then_some(period)
}

/// Semi-major axis in km for an orbital period in seconds.
pub fn semi_major_axis_km(period_seconds: f64) -> f64 {
    (period_seconds.powi(2) * MU_EARTH_KM3_S2 / (4.0 * PI.powi(2))).cbrt()
}

/// Derives orbit geometry from a TLE pair.
///
/// Only line 2 carries the fields used; `None` when mean motion or
/// inclination are unreadable or the mean motion is zero.
pub fn derive(_line1: &str, line2: &str) -> Option<OrbitalElements> {
    let fields = LineTwo(line2);
    let mean_motion = fields.mean_motion()?;
    let inclination = fields.inclination()?;
    let period_minutes = orbital_period_minutes(mean_motion)?;
    let semi_major_axis = semi_major_axis_km(period_minutes * 60.0);
    if !semi_major_axis.is_finite() {
        return None;
    }

    Some(OrbitalElements {
        inclination_deg: inclination,
        eccentricity: fields.eccentricity(),
        mean_motion_rev_per_day: mean_motion,
        orbital_period_minutes: period_minutes,
        semi_major_axis_km: semi_major_axis,
        altitude_km: semi_major_axis - EARTH_RADIUS_KM,
    })
}
