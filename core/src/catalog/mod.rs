//! Catalog retrieval with a local, time-limited cache.
//!
//! [`CatalogFetcher`] is generic over the HTTP side ([`CatalogClient`]) and
//! the storage side ([`CacheStore`]) so both can be replaced in tests.

pub mod cache;
pub mod http;

pub use cache::FileCache;
pub use http::HttpCatalogClient;

use crate::prelude::{CacheResult, CatalogResult};
use crate::record::{CacheEntry, SatelliteRecord};
use crate::tle::parse_catalog;
use log::{info, warn};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_CATALOG_URL: &str = "https://celestrak.org/NORAD/elements/gp.php";
pub const DEFAULT_MAX_CACHE_AGE: Duration = Duration::from_secs(24 * 3600);
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of raw TLE text for a catalog group.
pub trait CatalogClient {
    /// Anything other than HTTP 200 is an error.
    fn get_group(&self, group: &str) -> CatalogResult<String>;
}

/// Per-group storage of previously fetched records.
pub trait CacheStore {
    /// Time since the entry for `group` was last written, `None` if absent.
    fn age(&self, group: &str) -> CacheResult<Option<Duration>>;
    fn load(&self, group: &str) -> CacheResult<Option<CacheEntry>>;
    fn save(&self, group: &str, entry: &CacheEntry) -> CacheResult<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub catalog_url: String,
    pub cache_dir: PathBuf,
    pub max_cache_age: Duration,
    pub http_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.into(),
            cache_dir: PathBuf::from("data"),
            max_cache_age: DEFAULT_MAX_CACHE_AGE,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

pub struct CatalogFetcher<C, S> {
    client: C,
    store: S,
    max_age: Duration,
}

impl CatalogFetcher<HttpCatalogClient, FileCache> {
    pub fn from_config(config: &CatalogConfig) -> CatalogResult<Self> {
        let client = HttpCatalogClient::new(&config.catalog_url, config.http_timeout)?;
        let store = FileCache::new(&config.cache_dir);
        Ok(Self::new(client, store, config.max_cache_age))
    }
}

impl<C: CatalogClient, S: CacheStore> CatalogFetcher<C, S> {
    pub fn new(client: C, store: S, max_age: Duration) -> Self {
        Self {
            client,
            store,
            max_age,
        }
    }

    /// Records for `group`, preferring a fresh cache entry over the network.
    ///
    /// A failed download falls back to a cache entry of any age; with no
    /// cache the result is empty.
    pub fn fetch_group(&self, group: &str) -> Vec<SatelliteRecord> {
        if self.is_fresh(group) {
            info!(
                "using cached {} data (valid for {}h)",
                group,
                self.max_age.as_secs() / 3600
            );
            if let Some(records) = self.cached(group) {
                return records;
            }
        }

        info!("downloading latest {} data", group);
        match self.client.get_group(group) {
            Ok(body) => {
                let records = parse_catalog(&body);
                let entry = CacheEntry::now(records);
                match self.store.save(group, &entry) {
                    Ok(()) => info!("cached {} {} records", entry.satellites.len(), group),
                    Err(err) => warn!("unable to cache {} data: {}", group, err),
                }
                entry.satellites
            }
            Err(err) => {
                warn!("downloading {} failed: {}", group, err);
                match self.cached(group) {
                    Some(records) => {
                        warn!("falling back to stale cached {} data", group);
                        records
                    }
                    None => Vec::new(),
                }
            }
        }
    }

    fn is_fresh(&self, group: &str) -> bool {
        match self.store.age(group) {
            Ok(Some(age)) => age < self.max_age,
            Ok(None) => false,
            Err(err) => {
                warn!("unable to inspect {} cache: {}", group, err);
                false
            }
        }
    }

    fn cached(&self, group: &str) -> Option<Vec<SatelliteRecord>> {
        match self.store.load(group) {
            Ok(Some(entry)) if !entry.satellites.is_empty() => Some(entry.satellites),
            Ok(_) => None,
            Err(err) => {
                warn!("unable to read {} cache: {}", group, err);
                None
            }
        }
    }
}
