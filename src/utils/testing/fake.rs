// in-memory history backend

use crate::error::{Error, Result};
use crate::utils::git_ops::GitRef;
use crate::utils::history::HistorySource;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// `HistorySource` backed by canned messages
///
/// a file counts as modified when its content under `root` differs from the
/// snapshot registered with `committed`; files without a snapshot are
/// untracked and never reported, as with `git diff`
#[derive(Debug, Clone, Default)]
pub struct FakeHistory {
    last: String,
    commits: Vec<String>,
    failure: Option<String>,
    root: PathBuf,
    committed: HashMap<PathBuf, String>,
}

impl FakeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_commit(mut self, message: impl Into<String>) -> Self {
        self.last = message.into();
        self
    }

    /// commit messages, newest first
    pub fn commits<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commits = messages.into_iter().map(Into::into).collect();
        self
    }

    /// make every query fail with the given diagnostic
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// record the committed content of a file relative to `root`
    pub fn committed(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.committed.insert(path.into(), content.into());
        self
    }

    fn check(&self) -> Result<()> {
        match &self.failure {
            Some(reason) => Err(Error::history(reason.clone())),
            None => Ok(()),
        }
    }
}

impl HistorySource for FakeHistory {
    fn last_commit_message(&self) -> Result<String> {
        self.check()?;
        Ok(self.last.clone())
    }

    fn commit_messages_since(&self, _marker: &GitRef) -> Result<Vec<String>> {
        self.check()?;
        Ok(self.commits.clone())
    }

    fn has_uncommitted_changes(&self, path: &Path) -> Result<bool> {
        self.check()?;
        let Some(snapshot) = self.committed.get(path) else {
            return Ok(false);
        };

        match fs::read_to_string(self.root.join(path)) {
            Ok(current) => Ok(&current != snapshot),
            Err(_) => Ok(true),
        }
    }
}
