use crate::record::SatelliteRecord;

/// Groups catalog text into name / line 1 / line 2 records.
///
/// An incomplete trailing group is dropped.
pub fn parse_catalog(raw: &str) -> Vec<SatelliteRecord> {
    let lines: Vec<&str> = raw.trim().lines().collect();
    lines
        .chunks_exact(3)
        .map(|group| SatelliteRecord::new(group[0].trim(), group[1].trim(), group[2].trim()))
        .collect()
}
