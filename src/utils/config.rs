use super::changelog::ChangelogConfig;
use super::history::HistoryConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "changesync.toml";

/// main configuration for changesync
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangesyncConfig {
    /// changelog document configuration
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// commit history configuration
    #[serde(default)]
    pub history: HistoryConfig,
}

impl ChangesyncConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ChangesyncConfig =
            toml::from_str(&contents).map_err(|e| Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(config)
    }

    /// find and load configuration file in repository
    ///
    /// looks for `changesync.toml` in the repository root
    /// returns default config if file is not found or cannot be parsed
    pub fn load_or_default<P: AsRef<Path>>(repo_path: P) -> Self {
        match Self::find_config_file(&repo_path) {
            Some(config_path) => Self::load_from_file(&config_path).unwrap_or_else(|e| {
                tracing::warn!("{}, using default configuration", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// find configuration file in repository
    pub fn find_config_file<P: AsRef<Path>>(repo_path: P) -> Option<PathBuf> {
        let config_path = repo_path.as_ref().join(CONFIG_FILE_NAME);

        if config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}
