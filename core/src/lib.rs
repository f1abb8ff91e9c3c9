//! Core of the TLE catalog reports.
//!
//! Fetches element sets for a catalog group (with a local cache), reads the
//! fixed-column fields of line 2, derives orbit geometry and aggregates the
//! results for reporting.

pub mod catalog;
pub mod classify;
pub mod math;
pub mod orbit;
pub mod prelude;
pub mod record;
pub mod telemetry;
pub mod tle;

pub use prelude::{CacheError, CatalogError, SatelliteRecord};
