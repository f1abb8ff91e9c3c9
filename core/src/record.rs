use serde::{Deserialize, Serialize};

/// Raw three-line TLE entry as published by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatelliteRecord {
    pub name: String,
    pub line1: String,
    pub line2: String,
}

impl SatelliteRecord {
    pub fn new(name: impl Into<String>, line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line1: line1.into(),
            line2: line2.into(),
        }
    }
}

/// Cached catalog group, persisted as one JSON document per group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub timestamp: String,
    pub satellites: Vec<SatelliteRecord>,
}

impl CacheEntry {
    /// Stamps `satellites` with the current local time in ISO-8601 form.
    pub fn now(satellites: Vec<SatelliteRecord>) -> Self {
        let timestamp = chrono::Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string();
        Self {
            timestamp,
            satellites,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_entry_matches_document_shape() {
        let entry = CacheEntry {
            timestamp: "2025-01-01T00:00:00".into(),
            satellites: vec![SatelliteRecord::new("SAT", "1 A", "2 B")],
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["timestamp"], "2025-01-01T00:00:00");
        assert_eq!(json["satellites"][0]["name"], "SAT");
        assert_eq!(json["satellites"][0]["line1"], "1 A");
        assert_eq!(json["satellites"][0]["line2"], "2 B");
    }

    #[test]
    fn cache_entry_now_is_iso_like() {
        let entry = CacheEntry::now(Vec::new());
        assert!(chrono::NaiveDateTime::parse_from_str(&entry.timestamp, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }
}
