use std::sync::Mutex;

/// Counts records that made it into an aggregate versus those left out.
pub struct RecordMetrics {
    inner: Mutex<Counts>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub processed: usize,
    pub excluded: usize,
}

impl RecordMetrics {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Counts::default()),
        }
    }

    pub fn record_processed(&self) {
        if let Ok(mut counts) = self.inner.lock() {
            counts.processed += 1;
        }
    }

    pub fn record_excluded(&self) {
        if let Ok(mut counts) = self.inner.lock() {
            counts.excluded += 1;
        }
    }

    /// Tallies an optional value, passing it through.
    pub fn track<T>(&self, value: Option<T>) -> Option<T> {
        match value {
            Some(_) => self.record_processed(),
            None => self.record_excluded(),
        }
        value
    }

    pub fn snapshot(&self) -> Counts {
        self.inner.lock().map(|counts| *counts).unwrap_or_default()
    }
}

impl Default for RecordMetrics {
    fn default() -> Self {
        Self::new()
    }
}
