// changelog data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// marker that starts every entry line
pub const ENTRY_PREFIX: &str = "- ";

/// first line of the document
pub const TITLE_LINE: &str = "# Changelog";

/// line after which entries are listed
pub const SECTION_LINE: &str = "## Changes";

/// one commit rendered as a changelog entry
///
/// trailing blank lines are dropped on construction, so two entries compare
/// equal exactly when their trimmed line sequences match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitEntry {
    lines: Vec<String>,
}

impl CommitEntry {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        Self { lines }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// the "- subject" line
    pub fn subject(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// entry reduced to its subject line
    pub fn subject_only(&self) -> Self {
        Self::new(self.subject())
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for CommitEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}
