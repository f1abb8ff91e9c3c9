pub mod metrics;

pub use metrics::{Counts, RecordMetrics};
