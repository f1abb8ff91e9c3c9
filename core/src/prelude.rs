pub use crate::catalog::{CacheStore, CatalogClient, CatalogConfig, CatalogFetcher};
pub use crate::classify::{InclinationBucket, Partition, RoundingPolicy, Variant};
pub use crate::orbit::OrbitalElements;
pub use crate::record::{CacheEntry, SatelliteRecord};

/// Errors raised while talking to the catalog service.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("catalog responded with status {0}")]
    Status(u16),
    #[error("catalog body unreadable: {0}")]
    Body(String),
}

/// Errors raised by a cache store.
#[derive(thiserror::Error, Debug)]
pub enum CacheError {
    #[error("cache io: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache document malformed: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
pub type CacheResult<T> = Result<T, CacheError>;
