use serde::Serialize;

pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(samples: &[f64]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }
        Some(samples.iter().sum::<f64>() / samples.len() as f64)
    }

    /// Middle value, or the mean of the two middle values for even counts.
    pub fn median(samples: &[f64]) -> Option<f64> {
        if samples.is_empty() {
            return None;
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            Some((sorted[mid - 1] + sorted[mid]) / 2.0)
        } else {
            Some(sorted[mid])
        }
    }

    /// Population standard deviation (divides by N).
    pub fn std_dev(samples: &[f64]) -> Option<f64> {
        let mean = Self::mean(samples)?;
        let variance =
            samples.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / samples.len() as f64;
        Some(variance.sqrt())
    }

    pub fn min(samples: &[f64]) -> Option<f64> {
        samples.iter().copied().min_by(f64::total_cmp)
    }

    pub fn max(samples: &[f64]) -> Option<f64> {
        samples.iter().copied().max_by(f64::total_cmp)
    }
}

/// Descriptive statistics of one subset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

impl Summary {
    pub fn of(samples: &[f64]) -> Option<Self> {
        Some(Self {
            count: samples.len(),
            min: StatsHelper::min(samples)?,
            max: StatsHelper::max(samples)?,
            mean: StatsHelper::mean(samples)?,
            median: StatsHelper::median(samples)?,
            std_dev: StatsHelper::std_dev(samples)?,
        })
    }
}
