//! Configuration for the `dashtheme` tool.
//!
//! Sources, highest priority first:
//! 1. Command-line arguments and their environment variables
//! 2. The configuration file (`--config`, or `<config dir>/dashtheme/config.json`)
//! 3. Built-in defaults

use anyhow::{Context, Result};
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::{load_persisted_theme, FileStorage, ThemeStorage};
use crate::types::ThemeMode;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemeConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Mode used when nothing is persisted and none is given explicitly.
    pub default_mode: ThemeMode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage file; the per-user config directory is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LoggingConfig {
    /// The configured level, `warn` when it doesn't parse.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Warn)
    }
}

impl AppConfig {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// An explicit path must exist; a missing default file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("no config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// The mode to use: `explicit` if given, else the persisted theme, else
    /// the configured default.
    pub fn resolve_mode(
        &self,
        explicit: Option<ThemeMode>,
        storage: &dyn ThemeStorage,
    ) -> ThemeMode {
        explicit
            .or_else(|| load_persisted_theme(storage))
            .unwrap_or(self.theme.default_mode)
    }

    /// The theme storage described by this config.
    pub fn open_storage(&self) -> Result<FileStorage> {
        match &self.storage.path {
            Some(path) => Ok(FileStorage::new(path)),
            None => FileStorage::default_location().context("failed to locate theme storage"),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dashtheme").join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{persist_theme, MemoryStorage};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"theme": {"default_mode": "light"}}"#).unwrap();

        let config = AppConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.theme.default_mode, ThemeMode::Light);
        assert_eq!(config.storage.path, None);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(temp_dir.path().join("nope.json").as_path())).is_err());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"theme": {"default_mode": "sepia"}}"#).unwrap();
        assert!(AppConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_level_filter() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.level_filter(), LevelFilter::Warn);
        logging.level = "debug".to_string();
        assert_eq!(logging.level_filter(), LevelFilter::Debug);
        logging.level = "loud".to_string();
        assert_eq!(logging.level_filter(), LevelFilter::Warn);
    }

    fn light_default() -> AppConfig {
        AppConfig {
            theme: ThemeConfig {
                default_mode: ThemeMode::Light,
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_resolve_mode_precedence() {
        let config = light_default();
        let mut storage = MemoryStorage::new();

        assert_eq!(config.resolve_mode(None, &storage), ThemeMode::Light);
        assert_eq!(config.resolve_mode(Some(ThemeMode::Dark), &storage), ThemeMode::Dark);

        persist_theme(&mut storage, ThemeMode::Dark).unwrap();
        assert_eq!(config.resolve_mode(None, &storage), ThemeMode::Dark);
        assert_eq!(config.resolve_mode(Some(ThemeMode::Light), &storage), ThemeMode::Light);
    }

    #[test]
    fn test_resolve_mode_ignores_unusable_entry() {
        let config = light_default();
        let storage: MemoryStorage =
            [("theme-store", r#"{"data": "sepia"}"#)].into_iter().collect();
        assert_eq!(config.resolve_mode(None, &storage), ThemeMode::Light);
    }

    #[test]
    fn test_open_storage_uses_configured_path() {
        let config = AppConfig {
            storage: StorageConfig {
                path: Some(PathBuf::from("/tmp/dashtheme-test/storage.json")),
            },
            ..AppConfig::default()
        };
        let storage = config.open_storage().unwrap();
        assert_eq!(storage.path(), Path::new("/tmp/dashtheme-test/storage.json"));
    }
}
