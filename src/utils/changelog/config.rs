// changelog configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// how much of the latest commit a shallow check compares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShallowComparison {
    /// subject and body against the whole first entry
    #[default]
    FullEntry,
    /// subject line only against the whole first entry
    SubjectOnly,
}

/// configuration for the changelog document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// changelog path relative to the repository root (default: "CHANGES.md")
    pub file: PathBuf,

    /// comparison used by shallow checks
    pub shallow_comparison: ShallowComparison,
}

impl ChangelogConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = file.into();
        self
    }

    pub fn shallow_comparison(mut self, comparison: ShallowComparison) -> Self {
        self.shallow_comparison = comparison;
        self
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("CHANGES.md"),
            shallow_comparison: ShallowComparison::default(),
        }
    }
}
