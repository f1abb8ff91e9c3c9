use std::cell::Cell;
use std::fs::File;
use std::time::{Duration, SystemTime};
use tempfile::tempdir;
use tlecore::catalog::{CacheStore, CatalogClient, CatalogFetcher, FileCache, DEFAULT_MAX_CACHE_AGE};
use tlecore::classify::{partition, RoundingPolicy, Variant};
use tlecore::math::Summary;
use tlecore::orbit::derive;
use tlecore::prelude::{CacheEntry, CatalogError, CatalogResult};
use tlecore::SatelliteRecord;

const CATALOG: &str = "\
STARLINK-1007
1 44713U 19074A   25001.50000000  .00001234  00000-0  10000-3 0  9990
2 44713  53.0546 123.4567 0001234  90.1234 270.0000 15.06391234 12345
STARLINK-3001
1 48000U 21001A   25001.50000000  .00001234  00000-0  10000-3 0  9992
2 48000  97.6000  10.0000 0002000  80.0000 280.0000 15.20000000 23456
STARLINK-5001 [DTC]
1 58000U 24001A   25001.50000000  .00001234  00000-0  10000-3 0  9993
2 58000  53.1500  10.0000 0002000  80.0000 280.0000 15.70000000 34567
BROKEN-1
1 59000U 24002A   25001.50000000  .00001234  00000-0  10000-3 0  9994
2 59000  53.1500  10.0000 0002000  80.0000 280.0000 garbage.xxx 45678
";

struct ScriptedClient {
    body: Option<&'static str>,
    calls: Cell<usize>,
}

impl ScriptedClient {
    fn serving(body: &'static str) -> Self {
        Self {
            body: Some(body),
            calls: Cell::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            body: None,
            calls: Cell::new(0),
        }
    }
}

impl CatalogClient for &ScriptedClient {
    fn get_group(&self, _group: &str) -> CatalogResult<String> {
        self.calls.set(self.calls.get() + 1);
        self.body
            .map(str::to_string)
            .ok_or(CatalogError::Status(500))
    }
}

fn backdate(path: &std::path::Path, by: Duration) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(SystemTime::now() - by)
        .unwrap();
}

#[test]
fn download_populates_cache_and_feeds_aggregates() {
    let dir = tempdir().unwrap();
    let client = ScriptedClient::serving(CATALOG);
    let fetcher = CatalogFetcher::new(&client, FileCache::new(dir.path().join("data")), DEFAULT_MAX_CACHE_AGE);

    let records = fetcher.fetch_group("starlink");
    assert_eq!(records.len(), 4);
    assert!(dir.path().join("data/starlink.json").is_file());

    let split = partition(&records);
    assert_eq!(split.get(Variant::Main).len(), 3);
    assert_eq!(split.get(Variant::Dtc).len(), 1);

    let policy = RoundingPolicy::starlink_shells();
    let main_altitudes: Vec<f64> = split
        .get(Variant::Main)
        .iter()
        .filter_map(|r| derive(&r.line1, &r.line2))
        .map(|e| {
            assert!(policy.bucket(e.inclination_deg).snapped);
            e.altitude_km
        })
        .collect();
    assert_eq!(main_altitudes.len(), 2);
    let summary = Summary::of(&main_altitudes).unwrap();
    assert!(summary.min > 400.0 && summary.max < 650.0);
}

#[test]
fn cache_freshness_boundary_controls_refetch() {
    let dir = tempdir().unwrap();
    let store = FileCache::new(dir.path());
    let cached = vec![SatelliteRecord::new("CACHED", "1 C", "2 C")];
    store
        .save("starlink", &CacheEntry::now(cached.clone()))
        .unwrap();

    let client = ScriptedClient::serving(CATALOG);
    let fetcher = CatalogFetcher::new(&client, store.clone(), DEFAULT_MAX_CACHE_AGE);
    assert_eq!(fetcher.fetch_group("starlink"), cached);
    assert_eq!(client.calls.get(), 0);

    let path = store.entry_path("starlink").unwrap();
    backdate(&path, DEFAULT_MAX_CACHE_AGE + Duration::from_secs(1));
    assert_eq!(fetcher.fetch_group("starlink").len(), 4);
    assert_eq!(client.calls.get(), 1);
}

#[test]
fn failed_fetch_returns_stale_cache_unchanged() {
    let dir = tempdir().unwrap();
    let store = FileCache::new(dir.path());
    let cached = vec![
        SatelliteRecord::new("IRIDIUM 106", "1 A", "2 A"),
        SatelliteRecord::new("IRIDIUM 180", "1 B", "2 B"),
    ];
    store
        .save("iridium-next", &CacheEntry::now(cached.clone()))
        .unwrap();
    backdate(
        &store.entry_path("iridium-next").unwrap(),
        Duration::from_secs(3 * 24 * 3600),
    );

    let client = ScriptedClient::failing();
    let fetcher = CatalogFetcher::new(&client, store, DEFAULT_MAX_CACHE_AGE);
    assert_eq!(fetcher.fetch_group("iridium-next"), cached);
    assert_eq!(client.calls.get(), 1);
}

#[test]
fn failed_fetch_without_cache_is_empty() {
    let dir = tempdir().unwrap();
    let client = ScriptedClient::failing();
    let fetcher = CatalogFetcher::new(&client, FileCache::new(dir.path()), DEFAULT_MAX_CACHE_AGE);
    assert!(fetcher.fetch_group("starlink").is_empty());
}
