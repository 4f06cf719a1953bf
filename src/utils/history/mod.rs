// commit history access

pub mod config;
pub mod reader;

pub use config::HistoryConfig;
pub use reader::{
    collapse_blank_lines, load_marker, normalize_message, read_all_commits, read_last_commit,
    strip_trailers,
};

use crate::error::Result;
use crate::utils::git_ops::GitRef;
use std::path::Path;

/// version-control queries needed to build and check the changelog
///
/// messages are returned as "- subject" followed by the raw body lines
pub trait HistorySource {
    /// message of the most recent commit
    fn last_commit_message(&self) -> Result<String>;

    /// messages of every commit after `marker` up to HEAD, newest first
    fn commit_messages_since(&self, marker: &GitRef) -> Result<Vec<String>>;

    /// whether `path` differs from the index in the working tree
    fn has_uncommitted_changes(&self, path: &Path) -> Result<bool>;
}
