use super::CacheStore;
use crate::prelude::CacheResult;
use crate::record::CacheEntry;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// One pretty-printed JSON document per group under `dir`.
///
/// Entry age is measured from the file modification time, not from the
/// timestamp stored inside the document.
#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the document for `group`, creating the cache directory if needed.
    pub fn entry_path(&self, group: &str) -> CacheResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        Ok(self.dir.join(format!("{}.json", group)))
    }
}

fn elapsed_since(modified: SystemTime, now: SystemTime) -> Duration {
    // mtime in the future counts as just written
    now.duration_since(modified).unwrap_or(Duration::ZERO)
}

impl CacheStore for FileCache {
    fn age(&self, group: &str) -> CacheResult<Option<Duration>> {
        let path = self.entry_path(group)?;
        match fs::metadata(&path) {
            Ok(meta) => Ok(Some(elapsed_since(meta.modified()?, SystemTime::now()))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn load(&self, group: &str) -> CacheResult<Option<CacheEntry>> {
        let path = self.entry_path(group)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, group: &str, entry: &CacheEntry) -> CacheResult<()> {
        let path = self.entry_path(group)?;
        let document = serde_json::to_string_pretty(entry)?;
        fs::write(&path, document)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DEFAULT_MAX_CACHE_AGE;
    use crate::record::SatelliteRecord;
    use std::fs::File;
    use tempfile::tempdir;

    fn entry() -> CacheEntry {
        CacheEntry::now(vec![SatelliteRecord::new("SAT", "1 X", "2 X")])
    }

    #[test]
    fn save_then_load_returns_entry() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path().join("data"));
        assert_eq!(cache.load("starlink").unwrap(), None);
        let written = entry();
        cache.save("starlink", &written).unwrap();
        assert_eq!(cache.load("starlink").unwrap(), Some(written));
        assert!(dir.path().join("data/starlink.json").exists());
    }

    #[test]
    fn entry_path_creates_directory_idempotently() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path().join("nested/data"));
        let first = cache.entry_path("iridium-next").unwrap();
        let second = cache.entry_path("iridium-next").unwrap();
        assert_eq!(first, second);
        assert!(cache.dir.is_dir());
    }

    #[test]
    fn fresh_write_is_within_max_age() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path());
        assert_eq!(cache.age("starlink").unwrap(), None);
        cache.save("starlink", &entry()).unwrap();
        let age = cache.age("starlink").unwrap().unwrap();
        assert!(age < DEFAULT_MAX_CACHE_AGE);
    }

    #[test]
    fn backdated_file_is_stale() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path());
        cache.save("starlink", &entry()).unwrap();
        let path = cache.entry_path("starlink").unwrap();
        let backdated = SystemTime::now() - DEFAULT_MAX_CACHE_AGE - Duration::from_secs(1);
        File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(backdated)
            .unwrap();
        let age = cache.age("starlink").unwrap().unwrap();
        assert!(age >= DEFAULT_MAX_CACHE_AGE);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path());
        fs::write(cache.entry_path("starlink").unwrap(), "{not json").unwrap();
        assert!(cache.load("starlink").is_err());
    }

    #[test]
    fn future_mtime_counts_as_new() {
        let now = SystemTime::now();
        assert_eq!(elapsed_since(now + Duration::from_secs(5), now), Duration::ZERO);
    }
}
