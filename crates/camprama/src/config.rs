//! Configuration management for camprama.
//!
//! Configuration is layered with figment: built-in defaults, then a TOML
//! file, then `CAMPRAMA_`-prefixed environment variables.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "camprama";

/// Default database file name.
const DATABASE_FILE_NAME: &str = "camprama.db";

/// Key the packlist collection has always been stored under.
pub const DEFAULT_STORAGE_KEY: &str = "MY_PACKLISTS_V1";

/// Application configuration.
///
/// Precedence, highest first:
/// 1. Environment variables (`CAMPRAMA_PACKLISTS__DEBOUNCE_MS=500`)
/// 2. TOML config file at `~/.config/camprama/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Packlist configuration.
    pub packlists: PacklistConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the database file.
    /// Defaults to `~/.local/share/camprama/camprama.db`
    pub database_path: Option<PathBuf>,
    /// Keep everything in memory; nothing survives the process.
    pub in_memory: bool,
}

/// Packlist store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacklistConfig {
    /// Key-value entry holding the serialized list collection.
    pub storage_key: String,
    /// Quiet period before a template selection is written back.
    pub debounce_ms: u64,
    /// Buffered events per subscriber before it starts lagging.
    pub event_capacity: usize,
}

impl Default for PacklistConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            debounce_ms: 250,
            event_capacity: 64,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("CAMPRAMA_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.packlists.storage_key.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "storage_key must not be empty".to_string(),
            });
        }

        if self.packlists.debounce_ms == 0 {
            return Err(Error::ConfigValidation {
                message: "debounce_ms must be greater than 0".to_string(),
            });
        }

        // broadcast channels panic on zero capacity
        if self.packlists.event_capacity == 0 {
            return Err(Error::ConfigValidation {
                message: "event_capacity must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Get the database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// Get the debounce window as a Duration.
    #[must_use]
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.packlists.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.storage.database_path.is_none());
        assert!(!config.storage.in_memory);
        assert_eq!(config.packlists.storage_key, "MY_PACKLISTS_V1");
        assert_eq!(config.packlists.debounce_ms, 250);
        assert_eq!(config.packlists.event_capacity, 64);
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_storage_key() {
        let mut config = Config::default();
        config.packlists.storage_key = "   ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("storage_key"));
    }

    #[test]
    fn test_validate_zero_debounce() {
        let mut config = Config::default();
        config.packlists.debounce_ms = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("debounce_ms"));
    }

    #[test]
    fn test_validate_zero_event_capacity() {
        let mut config = Config::default();
        config.packlists.event_capacity = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("event_capacity"));
    }

    #[test]
    fn test_database_path_default() {
        let path = Config::default().database_path();
        assert!(path.to_string_lossy().contains("camprama.db"));
    }

    #[test]
    fn test_database_path_custom() {
        let mut config = Config::default();
        config.storage.database_path = Some(PathBuf::from("/custom/path/lists.db"));

        assert_eq!(config.database_path(), PathBuf::from("/custom/path/lists.db"));
    }

    #[test]
    fn test_debounce_window() {
        assert_eq!(
            Config::default().debounce_window(),
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("camprama"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    // Loading reads CAMPRAMA_* variables, so these run inside a jail that
    // serializes environment changes.

    #[test]
    fn test_load_nonexistent_config() {
        Jail::expect_with(|_jail| {
            let config = Config::load_from(Some(PathBuf::from("missing.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                "[packlists]\ndebounce_ms = 500\n\n[storage]\nin_memory = true\n",
            )?;

            let config = Config::load_from(Some(PathBuf::from("config.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.packlists.debounce_ms, 500);
            assert!(config.storage.in_memory);
            assert_eq!(config.packlists.storage_key, DEFAULT_STORAGE_KEY);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[packlists]\nevent_capacity = 0\n")?;

            let err = Config::load_from(Some(PathBuf::from("config.toml"))).unwrap_err();
            assert!(matches!(err, Error::ConfigValidation { .. }));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                "[packlists]\ndebounce_ms = 500\nstorage_key = \"FROM_FILE\"\n",
            )?;
            jail.set_env("CAMPRAMA_PACKLISTS__DEBOUNCE_MS", "750");
            jail.set_env("CAMPRAMA_STORAGE__IN_MEMORY", "true");

            let config = Config::load_from(Some(PathBuf::from("config.toml")))
                .map_err(|e| e.to_string())?;
            assert_eq!(config.packlists.debounce_ms, 750);
            assert_eq!(config.packlists.storage_key, "FROM_FILE");
            assert!(config.storage.in_memory);
            Ok(())
        });
    }

    #[test]
    fn test_env_value_is_validated() {
        Jail::expect_with(|jail| {
            jail.set_env("CAMPRAMA_PACKLISTS__DEBOUNCE_MS", "0");

            let err = Config::load_from(Some(PathBuf::from("missing.toml"))).unwrap_err();
            assert!(matches!(err, Error::ConfigValidation { .. }));
            Ok(())
        });
    }

    #[test]
    fn test_packlist_config_deserialize_partial() {
        let json = r#"{"storage_key": "LISTS"}"#;
        let packlists: PacklistConfig = serde_json::from_str(json).unwrap();
        assert_eq!(packlists.storage_key, "LISTS");
        assert_eq!(packlists.debounce_ms, 250);
    }
}
