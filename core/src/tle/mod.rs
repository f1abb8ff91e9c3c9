//! Two-line element text handling.
//!
//! The catalog publishes each satellite as a name line followed by the two
//! fixed-column element lines. Only line 2 fields are read here.

pub mod fields;
pub mod parser;

pub use fields::{eccentricity, inclination, mean_motion, LineTwo};
pub use parser::parse_catalog;
