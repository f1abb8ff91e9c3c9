pub mod rounding;
pub mod variant;

pub use rounding::{InclinationBucket, RoundingPolicy};
pub use variant::{partition, Partition, Variant};

use std::collections::BTreeMap;

/// Occurrence counts per bucket, iterated in bucket order.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketCounts<K: Ord> {
    counts: BTreeMap<K, usize>,
}

impl<K: Ord> Default for BucketCounts<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> BucketCounts<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct buckets seen.
    pub fn kinds(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(bucket, count, percent of population)` rows in bucket order.
    pub fn rows(&self, population: usize) -> Vec<(K, usize, f64)> {
        self.counts
            .iter()
            .map(|(key, &count)| {
                let percent = if population == 0 {
                    0.0
                } else {
                    count as f64 / population as f64 * 100.0
                };
                (*key, count, percent)
            })
            .collect()
    }
}

impl<K: Ord + Copy> FromIterator<K> for BucketCounts<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counts = Self::new();
        for key in iter {
            counts.record(key);
        }
        counts
    }
}
