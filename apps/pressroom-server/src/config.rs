//! Application configuration loaded from environment variables.

use std::env;

use pressroom_infra::{ReadErrorPolicy, StoreConfig};

use crate::telemetry::TelemetryConfig;

/// `DATA_FILE` value that selects the in-memory store.
pub const MEMORY_STORE: &str = ":memory:";

const DEFAULT_DATA_FILE: &str = "data/posts.json";

/// Where posts are kept.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    File(StoreConfig),
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Unparseable values fall back
    /// to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_file = lookup("DATA_FILE").unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

        let storage = if data_file == MEMORY_STORE {
            StorageConfig::Memory
        } else {
            let on_read_error = lookup("ON_READ_ERROR")
                .and_then(|raw| raw.parse::<ReadErrorPolicy>().ok())
                .unwrap_or_default();
            StorageConfig::File(StoreConfig::new(data_file).with_read_error_policy(on_read_error))
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT").and_then(|p| p.parse().ok()).unwrap_or(3000),
            storage,
            telemetry: TelemetryConfig::from_lookup(&lookup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        match config.storage {
            StorageConfig::File(store) => {
                assert_eq!(store.path, Path::new("data/posts.json"));
                assert_eq!(store.on_read_error, ReadErrorPolicy::EmptyCollection);
            }
            StorageConfig::Memory => panic!("expected file storage"),
        }
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8081"),
            ("DATA_FILE", "/var/lib/pressroom/posts.json"),
            ("ON_READ_ERROR", "fail"),
        ]);

        assert_eq!(config.port, 8081);
        match config.storage {
            StorageConfig::File(store) => {
                assert_eq!(store.path, Path::new("/var/lib/pressroom/posts.json"));
                assert_eq!(store.on_read_error, ReadErrorPolicy::Fail);
            }
            StorageConfig::Memory => panic!("expected file storage"),
        }
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[("PORT", "not-a-port"), ("ON_READ_ERROR", "explode")]);

        assert_eq!(config.port, 3000);
        match config.storage {
            StorageConfig::File(store) => {
                assert_eq!(store.on_read_error, ReadErrorPolicy::EmptyCollection)
            }
            StorageConfig::Memory => panic!("expected file storage"),
        }
    }

    #[test]
    fn test_memory_storage() {
        let config = config_from(&[("DATA_FILE", ":memory:")]);
        assert!(matches!(config.storage, StorageConfig::Memory));
    }
}
