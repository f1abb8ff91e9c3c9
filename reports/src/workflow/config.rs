use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tlecore::catalog::{CatalogConfig, DEFAULT_CATALOG_URL};
use tlecore::classify::RoundingPolicy;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub catalog_url: String,
    pub cache_dir: PathBuf,
    pub max_cache_age_hours: u64,
    pub http_timeout_secs: u64,
    /// Catalog group; each report falls back to its own group.
    pub group: Option<String>,
    /// Inclination bucketing; each report falls back to its own policy.
    pub rounding: Option<RoundingPolicy>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.into(),
            cache_dir: PathBuf::from("data"),
            max_cache_age_hours: 24,
            http_timeout_secs: 30,
            group: None,
            rounding: None,
        }
    }
}

impl ReportConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading report config {}", path_ref.display()))?;
        let config: ReportConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing report config {}", path_ref.display()))?;
        Ok(config)
    }

    /// Config file when given, defaults otherwise; `group` overrides either.
    pub fn from_args(path: Option<&Path>, group: Option<String>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if group.is_some() {
            config.group = group;
        }
        Ok(config)
    }

    pub fn group_or(&self, default: &str) -> String {
        self.group.clone().unwrap_or_else(|| default.to_string())
    }

    pub fn rounding_or(&self, default: RoundingPolicy) -> RoundingPolicy {
        self.rounding.clone().unwrap_or(default)
    }

    pub fn to_catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            catalog_url: self.catalog_url.clone(),
            cache_dir: self.cache_dir.clone(),
            max_cache_age: Duration::from_secs(self.max_cache_age_hours * 3600),
            http_timeout: Duration::from_secs(self.http_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_catalog_defaults() {
        let cfg = ReportConfig::default();
        assert_eq!(cfg.to_catalog_config(), CatalogConfig::default());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"cache_dir: /tmp/tle\nmax_cache_age_hours: 6\nrounding:\n  policy: nearest_integer\n  tolerance: 0.25\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = ReportConfig::load(&path).unwrap();
        assert_eq!(cfg.cache_dir, PathBuf::from("/tmp/tle"));
        assert_eq!(cfg.http_timeout_secs, 30);
        assert_eq!(
            cfg.to_catalog_config().max_cache_age,
            Duration::from_secs(6 * 3600)
        );
        assert_eq!(
            cfg.rounding_or(RoundingPolicy::starlink_shells()),
            RoundingPolicy::NearestInteger { tolerance: 0.25 }
        );
    }

    #[test]
    fn group_flag_overrides_config() {
        let cfg = ReportConfig::from_args(None, Some("oneweb".into())).unwrap();
        assert_eq!(cfg.group_or("starlink"), "oneweb");
        let cfg = ReportConfig::from_args(None, None).unwrap();
        assert_eq!(cfg.group_or("starlink"), "starlink");
    }

    #[test]
    fn missing_config_file_is_an_error() {
        assert!(ReportConfig::load("/nonexistent/report.yaml").is_err());
    }
}
