//! Tablebook configuration
//!
//! Read from `tablebook.toml` in the platform config directory, or from the
//! file named by `TABLEBOOK_CONFIG`. Every field has a default, so a missing
//! file is not an error.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "TABLEBOOK_CONFIG";

const CONFIG_FILE: &str = "tablebook.toml";
const DB_FILE: &str = "tablebook.db";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Which backend holds the booking list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    /// Nothing persists past the process
    Memory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Database file; defaults to `tablebook.db` in the platform data directory
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Total bytes the store may hold
    #[serde(default)]
    pub quota_bytes: Option<usize>,
}

impl Config {
    /// Load from `TABLEBOOK_CONFIG` or the platform config directory
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(path);
        }

        match project_dirs() {
            Some(dirs) => {
                let path = dirs.config_dir().join(CONFIG_FILE);
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
            None => {
                warn!("Could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from an explicit file, which must exist
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Database path, explicit or under the platform data directory
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.storage.path {
            return Ok(path.clone());
        }

        let dirs = project_dirs()
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))?;
        Ok(dirs.data_dir().join(DB_FILE))
    }

    /// Build the configured store
    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>> {
        let quota = self.storage.quota_bytes;

        match self.storage.backend {
            StorageBackend::Memory => Ok(Box::new(match quota {
                Some(q) => MemoryStore::with_quota(q),
                None => MemoryStore::new(),
            })),
            StorageBackend::Sqlite => {
                let path = self.database_path()?;
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }

                let store = SqliteStore::open(&path)?;
                Ok(Box::new(match quota {
                    Some(q) => store.with_quota(q),
                    None => store,
                }))
            }
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "onyx", "tablebook")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage.quota_bytes, None);
    }

    #[test]
    fn test_parse_storage_section() {
        let config = Config::parse(
            r#"
            [storage]
            backend = "memory"
            quota_bytes = 5242880
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.quota_bytes, Some(5 * 1024 * 1024));
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("[storage]\nbackend = \"cloud\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load_from(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_open_sqlite_store_at_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("bookings.db");
        let config_path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &config_path,
            format!("[storage]\npath = {:?}\n", path.display().to_string()),
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.database_path().unwrap(), path);

        let store = config.open_store().unwrap();
        store.set("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_memory_store_with_quota() {
        let config = Config {
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                path: None,
                quota_bytes: Some(4),
            },
        };

        let store = config.open_store().unwrap();
        assert!(store.set("k", "too long").is_err());
    }
}
