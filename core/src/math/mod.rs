pub mod histogram;
pub mod stats;

pub use histogram::{count_in_ranges, histogram, Interval, RangeCount};
pub use stats::{StatsHelper, Summary};
