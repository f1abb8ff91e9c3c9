use serde::{Deserialize, Serialize};

/// Half-open interval `[low, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub low: f64,
    pub high: f64,
}

impl Interval {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value < self.high
    }
}

/// Per-subset counts for one interval.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeCount {
    pub interval: Interval,
    pub counts: Vec<usize>,
}

impl RangeCount {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Counts each subset's values per interval, keeping intervals with any hit.
pub fn count_in_ranges(intervals: &[Interval], subsets: &[&[f64]]) -> Vec<RangeCount> {
    intervals
        .iter()
        .map(|interval| RangeCount {
            interval: *interval,
            counts: subsets
                .iter()
                .map(|values| values.iter().filter(|&&v| interval.contains(v)).count())
                .collect(),
        })
        .filter(|row| row.total() > 0)
        .collect()
}

/// Equal-width bin counts over `range`.
///
/// The last bin is closed on the right; values outside `range` are dropped.
pub fn histogram(values: &[f64], bins: usize, range: (f64, f64)) -> Vec<usize> {
    let mut counts = vec![0; bins];
    let (low, high) = range;
    if bins == 0 || high <= low {
        return counts;
    }
    let width = (high - low) / bins as f64;
    for &value in values {
        if !(low..=high).contains(&value) {
            continue;
        }
        let index = (((value - low) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }
    counts
}
