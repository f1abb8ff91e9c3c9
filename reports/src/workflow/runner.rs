use std::collections::BTreeMap;
use tlecore::classify::{partition, BucketCounts, InclinationBucket, Partition, RoundingPolicy, Variant};
use tlecore::math::Interval;
use tlecore::orbit::derive;
use tlecore::telemetry::{Counts, RecordMetrics};
use tlecore::tle::LineTwo;
use tlecore::SatelliteRecord;

/// Altitude bands used for the range breakdown, km.
pub const ALTITUDE_RANGES: [Interval; 7] = [
    Interval::new(0.0, 400.0),
    Interval::new(400.0, 450.0),
    Interval::new(450.0, 500.0),
    Interval::new(500.0, 550.0),
    Interval::new(550.0, 600.0),
    Interval::new(600.0, 1000.0),
    Interval::new(1000.0, 2000.0),
];

pub struct AltitudeRun {
    pub total: usize,
    /// Altitudes of records whose orbit could be derived.
    pub altitudes: Partition<f64>,
    /// Main-constellation altitudes per whole-degree inclination bucket.
    pub by_inclination: BTreeMap<InclinationBucket, Vec<f64>>,
    pub metrics: Counts,
}

impl AltitudeRun {
    pub fn all_altitudes(&self) -> Vec<f64> {
        self.altitudes
            .main
            .iter()
            .chain(self.altitudes.dtc.iter())
            .copied()
            .collect()
    }
}

#[derive(Clone)]
pub struct AltitudeRunner {
    policy: RoundingPolicy,
}

impl AltitudeRunner {
    pub fn new(policy: RoundingPolicy) -> Self {
        Self { policy }
    }

    pub fn execute(&self, records: &[SatelliteRecord]) -> AltitudeRun {
        let metrics = RecordMetrics::new();
        let mut altitudes = Partition::default();
        let mut by_inclination: BTreeMap<InclinationBucket, Vec<f64>> = BTreeMap::new();
        if let RoundingPolicy::KnownInclinations { known, .. } = &self.policy {
            for &shell in known {
                by_inclination.entry(InclinationBucket::snapped(shell)).or_default();
            }
        }

        for record in records {
            let Some(elements) = metrics.track(derive(&record.line1, &record.line2)) else {
                continue;
            };
            let variant = Variant::of(&record.name);
            altitudes.push(variant, elements.altitude_km);
            if variant == Variant::Main {
                let bucket = self.policy.bucket(elements.inclination_deg);
                if bucket.snapped {
                    by_inclination.entry(bucket).or_default().push(elements.altitude_km);
                }
            }
        }

        AltitudeRun {
            total: records.len(),
            altitudes,
            by_inclination,
            metrics: metrics.snapshot(),
        }
    }
}

/// Inclinations of one name-marker subset.
#[derive(Debug, Default)]
pub struct SubsetInclinations {
    /// Records in the subset, including those whose inclination is unreadable.
    pub size: usize,
    pub inclinations: Vec<f64>,
    pub buckets: BucketCounts<InclinationBucket>,
}

pub struct InclinationRun {
    pub total: usize,
    pub main: SubsetInclinations,
    pub dtc: SubsetInclinations,
    /// Main-constellation eccentricities.
    pub eccentricities: Vec<f64>,
    /// Main-constellation mean motions, revolutions per day.
    pub mean_motions: Vec<f64>,
    pub metrics: Counts,
}

impl InclinationRun {
    pub fn subset(&self, variant: Variant) -> &SubsetInclinations {
        match variant {
            Variant::Main => &self.main,
            Variant::Dtc => &self.dtc,
        }
    }
}

#[derive(Clone)]
pub struct InclinationRunner {
    policy: RoundingPolicy,
}

impl InclinationRunner {
    pub fn new(policy: RoundingPolicy) -> Self {
        Self { policy }
    }

    pub fn execute(&self, records: &[SatelliteRecord]) -> InclinationRun {
        let metrics = RecordMetrics::new();
        let split = partition(records);
        let subset = |members: &[&SatelliteRecord]| {
            let inclinations: Vec<f64> = members
                .iter()
                .filter_map(|record| metrics.track(LineTwo(&record.line2).inclination()))
                .collect();
            let buckets = inclinations.iter().map(|&inc| self.policy.bucket(inc)).collect();
            SubsetInclinations {
                size: members.len(),
                inclinations,
                buckets,
            }
        };
        let main = subset(split.get(Variant::Main));
        let dtc = subset(split.get(Variant::Dtc));

        let mut eccentricities = Vec::new();
        let mut mean_motions = Vec::new();
        for record in split.get(Variant::Main) {
            let line = LineTwo(&record.line2);
            eccentricities.extend(metrics.track(line.eccentricity()));
            mean_motions.extend(metrics.track(line.mean_motion()));
        }

        InclinationRun {
            total: records.len(),
            main,
            dtc,
            eccentricities,
            mean_motions,
            metrics: metrics.snapshot(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn line2(inclination: &str, mean_motion: &str) -> String {
        format!(
            "2 44713 {:>8} 123.4567 0001234  90.1234 270.0000 {:>11} 12345",
            inclination, mean_motion
        )
    }

    pub(crate) fn record(name: &str, inclination: &str, mean_motion: &str) -> SatelliteRecord {
        SatelliteRecord::new(name, "1 44713U", line2(inclination, mean_motion))
    }

    pub(crate) fn starlink_fixture() -> Vec<SatelliteRecord> {
        vec![
            record("STARLINK-1", "53.0546", "15.06391234"),
            record("STARLINK-2", "53.2000", "15.10000000"),
            record("STARLINK-3", "43.0020", "15.40000000"),
            record("STARLINK-4", "97.6000", "15.20000000"),
            record("STARLINK-5", "60.0000", "15.00000000"),
            record("STARLINK-6 [DTC]", "53.1500", "15.70000000"),
            record("STARLINK-7", "53.0000", "garbage"),
        ]
    }

    #[test]
    fn altitude_runner_partitions_and_buckets() {
        let run = AltitudeRunner::new(RoundingPolicy::starlink_shells()).execute(&starlink_fixture());
        assert_eq!(run.total, 7);
        assert_eq!(run.altitudes.main.len(), 5);
        assert_eq!(run.altitudes.dtc.len(), 1);
        assert_eq!(run.metrics.excluded, 1);
        assert_eq!(run.all_altitudes().len(), 6);

        let shells: Vec<(String, usize)> = run
            .by_inclination
            .iter()
            .map(|(bucket, alts)| (bucket.to_string(), alts.len()))
            .collect();
        assert_eq!(
            shells,
            vec![
                ("43°".to_string(), 1),
                ("53°".to_string(), 2),
                ("70°".to_string(), 0),
                ("97°".to_string(), 1)
            ]
        );
    }

    #[test]
    fn inclination_runner_reports_per_subset() {
        let records = vec![
            record("IRIDIUM 106", "86.3940", "14.34218000"),
            record("IRIDIUM 107", "86.4500", "14.34217000"),
            record("IRIDIUM 180", "8?.3000", "x"),
            record("IRIDIUM 999 [DTC]", "??", "14.30000000"),
        ];
        let run = InclinationRunner::new(RoundingPolicy::nearest_integer()).execute(&records);
        assert_eq!(run.total, 4);
        assert_eq!(run.main.size, 3);
        assert_eq!(run.dtc.size, 1);
        assert!(run.subset(Variant::Dtc).inclinations.is_empty());
        let rows = run.main.buckets.rows(run.main.size);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0.to_string(), "86°");
        assert_eq!(rows[0].1, 2);
        assert_eq!(rows[0].2, 2.0 / 3.0 * 100.0);
        assert_eq!(run.eccentricities.len(), 3);
        assert_eq!(run.mean_motions.len(), 2);
    }
}
