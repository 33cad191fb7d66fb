//! Tracker configuration
//!
//! Loaded from a TOML file. Every field is optional; a missing file means
//! all defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::DEFAULT_COLOR;
use crate::roster::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Key the character collection is stored under
    pub storage_key: String,
    /// Database file; defaults to `initrack.db` in the data directory
    pub database_file: Option<PathBuf>,
    /// Color given to new characters created without one
    pub default_color: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            database_file: None,
            default_color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl TrackerConfig {
    /// File name looked up in the config directory
    pub const FILE_NAME: &'static str = "config.toml";

    /// Database file name used when none is configured
    pub const DATABASE_FILE_NAME: &'static str = "initrack.db";

    /// Parse config from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                debug!(path = %path.display(), "Loading config");
                Self::from_toml_str(&contents)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve the database path against a data directory
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        match &self.database_file {
            Some(file) if file.is_absolute() => file.clone(),
            Some(file) => data_dir.join(file),
            None => data_dir.join(Self::DATABASE_FILE_NAME),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(Error::Validation("storage_key must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = TrackerConfig::from_toml_str("").unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_partial_config() {
        let config = TrackerConfig::from_toml_str(
            r##"
                default_color = "#223344"
                database_file = "campaign.db"
            "##,
        )
        .unwrap();
        assert_eq!(config.default_color, "#223344");
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(
            config.database_path(Path::new("/data")),
            PathBuf::from("/data/campaign.db")
        );
    }

    #[test]
    fn test_default_database_path() {
        let config = TrackerConfig::default();
        assert_eq!(
            config.database_path(Path::new("/data")),
            PathBuf::from("/data/initrack.db")
        );
    }

    #[test]
    fn test_malformed_config_is_error() {
        let err = TrackerConfig::from_toml_str("storage_key = [").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_blank_storage_key_rejected() {
        let err = TrackerConfig::from_toml_str(r#"storage_key = "  ""#).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TrackerConfig::FILE_NAME);
        std::fs::write(&path, "storage_key = \"table-two\"\n").unwrap();

        let config = TrackerConfig::load(&path).unwrap();
        assert_eq!(config.storage_key, "table-two");
    }
}
