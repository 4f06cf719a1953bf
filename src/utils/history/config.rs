// history configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// configuration for reading commit history
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// file holding the marker commit, relative to the repository root
    pub marker_file: PathBuf,

    /// lines containing any of these tokens are dropped from commit messages
    pub trailers: Vec<String>,
}

impl HistoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.marker_file = file.into();
        self
    }

    pub fn trailers(mut self, trailers: Vec<String>) -> Self {
        self.trailers = trailers;
        self
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            marker_file: PathBuf::from("initial-public-commit.txt"),
            trailers: vec!["Change-Id".to_string()],
        }
    }
}
