pub mod config;
pub mod runner;

pub use config::ReportConfig;
pub use runner::{AltitudeRun, AltitudeRunner, InclinationRun, InclinationRunner};
