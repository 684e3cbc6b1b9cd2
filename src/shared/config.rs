//! Application configuration. Listen address, storage backend, fan-out.

use serde::Deserialize;

/// Default number of sections loaded concurrently per request.
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 8;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Interface to listen on. Read from COURSE_REVIEWS_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,

    /// HTTP port. Read from COURSE_REVIEWS_PORT (or PORT).
    #[serde(default)]
    pub port: Option<u16>,

    /// SQLite database file. When unset the catalog lives in memory.
    /// Read from COURSE_REVIEWS_DATABASE_PATH.
    #[serde(default)]
    pub database_path: Option<String>,

    /// JSON seed document loaded at startup. Read from COURSE_REVIEWS_SEED_PATH.
    #[serde(default)]
    pub seed_path: Option<String>,

    /// Sections loaded concurrently per request. Read from COURSE_REVIEWS_MAX_CONCURRENT_LOOKUPS.
    #[serde(default)]
    pub max_concurrent_lookups: Option<usize>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("COURSE_REVIEWS_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("COURSE_REVIEWS"));
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // PORT is read directly (no prefix) for hosting platforms that inject it
        if cfg.port.is_none() {
            if let Ok(s) = std::env::var("PORT") {
                if let Ok(port) = s.parse::<u16>() {
                    cfg.port = Some(port);
                }
            }
        }
        Ok(cfg)
    }

    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
    }

    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Returns the fan-out limit. Defaults to DEFAULT_MAX_CONCURRENT_LOOKUPS; never below 1.
    pub fn max_concurrent_lookups_or_default(&self) -> usize {
        self.max_concurrent_lookups
            .unwrap_or(DEFAULT_MAX_CONCURRENT_LOOKUPS)
            .max(1)
    }

    /// Returns true if the SQLite backend is configured.
    pub fn uses_sqlite(&self) -> bool {
        self.database_path.as_deref().is_some_and(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.bind_addr_or_default(), "127.0.0.1");
        assert_eq!(cfg.port_or_default(), 8080);
        assert_eq!(cfg.max_concurrent_lookups_or_default(), 8);
        assert!(!cfg.uses_sqlite());
    }

    #[test]
    fn zero_concurrency_is_clamped() {
        let cfg = AppConfig {
            max_concurrent_lookups: Some(0),
            ..Default::default()
        };
        assert_eq!(cfg.max_concurrent_lookups_or_default(), 1);
    }

    #[test]
    fn empty_database_path_means_memory() {
        let cfg = AppConfig {
            database_path: Some(String::new()),
            ..Default::default()
        };
        assert!(!cfg.uses_sqlite());
    }

    #[test]
    fn deserializes_from_config_source() {
        let cfg: AppConfig = config::Config::builder()
            .set_override("port", 9090)
            .unwrap()
            .set_override("database_path", "data/catalog.db")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.port_or_default(), 9090);
        assert!(cfg.uses_sqlite());
    }

    #[test]
    fn unparsable_value_is_an_error() {
        let result = config::Config::builder()
            .set_override("port", "abc")
            .unwrap()
            .set_override("database_path", "data/catalog.db")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>();
        assert!(result.is_err());
    }
}
