//! Report drivers over the TLE catalog core: console statistics, altitude
//! histograms and the article-series README index.

pub mod render;
pub mod report;
pub mod repo;
pub mod toc;
pub mod workflow;

use env_logger::{Builder, Env};

/// Logs to stderr at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
