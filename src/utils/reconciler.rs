// changelog / history reconciliation

use crate::error::{Error, Result};
use crate::utils::changelog::{CommitEntry, load_first_entry, render};
use crate::utils::config::ChangesyncConfig;
use crate::utils::history::{HistorySource, load_marker, read_all_commits, read_last_commit};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// what a run does, derived from the `--shallow` and `--check` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckMode {
    /// compare the latest commit with the first entry, never fail
    ShallowReport,
    /// compare the latest commit with the first entry, fail on mismatch
    ShallowCheck,
    /// rewrite the changelog from history
    Regenerate,
    /// rewrite the changelog, fail if that changed it or if it had local edits
    RegenerateCheck,
}

impl CheckMode {
    pub fn from_flags(shallow: bool, check: bool) -> Self {
        match (shallow, check) {
            (true, false) => CheckMode::ShallowReport,
            (true, true) => CheckMode::ShallowCheck,
            (false, false) => CheckMode::Regenerate,
            (false, true) => CheckMode::RegenerateCheck,
        }
    }

    /// whether a stale changelog should fail the run
    pub fn is_check(&self) -> bool {
        matches!(self, CheckMode::ShallowCheck | CheckMode::RegenerateCheck)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Outcome {
    /// latest commit matches the first entry
    InSync { entry: CommitEntry },
    /// latest commit differs from the first entry
    Mismatch {
        expected: CommitEntry,
        found: CommitEntry,
    },
    /// changelog rewritten without checking
    Regenerated { entries: usize },
    /// regeneration left the file unchanged
    UpToDate { entries: usize },
    /// regeneration changed the file
    NeedsUpdate { entries: usize },
}

/// result of a single run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub mode: CheckMode,
    pub changelog: PathBuf,
    pub outcome: Outcome,
}

impl Report {
    /// whether the run should end with a failing exit status
    pub fn is_failure(&self) -> bool {
        match self.outcome {
            Outcome::Mismatch { .. } => self.mode.is_check(),
            Outcome::NeedsUpdate { .. } => true,
            _ => false,
        }
    }

    /// print the report in human readable form
    pub fn display(&self) {
        let name = self.changelog.display();

        match &self.outcome {
            Outcome::InSync { .. } => {
                println!("last commit is already in {}", name);
            }
            Outcome::Mismatch { expected, found } => {
                println!("last commit is NOT in {}", name);
                println!();
                println!("expected commit:");
                println!("{}", expected);
                println!();
                println!("first entry in {}:", name);
                if found.is_empty() {
                    println!("(no entries)");
                } else {
                    println!("{}", found);
                }
            }
            Outcome::Regenerated { entries } => {
                println!("regenerated {} ({} entries)", name, entries);
            }
            Outcome::UpToDate { .. } => {
                println!("{} is up to date", name);
            }
            Outcome::NeedsUpdate { .. } => {
                println!(
                    "{} has been updated, please review the changes and commit them",
                    name
                );
            }
        }
    }
}

/// keeps a changelog in sync with the history it is generated from
pub struct Reconciler<S: HistorySource> {
    source: S,
    root: PathBuf,
    config: ChangesyncConfig,
}

impl<S: HistorySource> Reconciler<S> {
    /// `root` is the repository working tree that configured paths are relative to
    pub fn new(source: S, root: impl Into<PathBuf>, config: ChangesyncConfig) -> Self {
        Self {
            source,
            root: root.into(),
            config,
        }
    }

    pub fn changelog_path(&self) -> PathBuf {
        self.root.join(&self.config.changelog.file)
    }

    fn relative_changelog(&self) -> &Path {
        &self.config.changelog.file
    }

    pub fn run(&self, mode: CheckMode) -> Result<Report> {
        tracing::info!(?mode, changelog = %self.changelog_path().display(), "reconciling changelog");

        let outcome = match mode {
            CheckMode::ShallowReport => self.shallow_report()?,
            CheckMode::ShallowCheck => self.shallow_check()?,
            CheckMode::Regenerate => self.regenerate()?,
            CheckMode::RegenerateCheck => self.regenerate_check()?,
        };

        Ok(Report {
            mode,
            changelog: self.relative_changelog().to_path_buf(),
            outcome,
        })
    }

    fn compare_last_commit(&self) -> Result<Outcome> {
        let expected = read_last_commit(
            &self.source,
            &self.config.history.trailers,
            self.config.changelog.shallow_comparison,
        )?;
        let found = load_first_entry(self.changelog_path())?;

        if expected == found {
            Ok(Outcome::InSync { entry: expected })
        } else {
            tracing::debug!(expected = %expected, found = %found, "first entry differs");
            Ok(Outcome::Mismatch { expected, found })
        }
    }

    fn shallow_report(&self) -> Result<Outcome> {
        self.compare_last_commit()
    }

    fn shallow_check(&self) -> Result<Outcome> {
        self.compare_last_commit()
    }

    /// write a freshly rendered changelog, returning the number of entries
    fn write_changelog(&self) -> Result<usize> {
        let marker = load_marker(self.root.join(&self.config.history.marker_file))?;
        let entries = read_all_commits(&self.source, &marker, &self.config.history.trailers)?;

        let path = self.changelog_path();
        fs::write(&path, render(&entries)).map_err(|e| Error::FileWriteError {
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), entries = entries.len(), "wrote changelog");
        Ok(entries.len())
    }

    fn regenerate(&self) -> Result<Outcome> {
        let entries = self.write_changelog()?;
        Ok(Outcome::Regenerated { entries })
    }

    fn regenerate_check(&self) -> Result<Outcome> {
        // never overwrite hand edits
        if self
            .source
            .has_uncommitted_changes(self.relative_changelog())?
        {
            return Err(Error::UncommittedChanges {
                path: self.relative_changelog().to_path_buf(),
            });
        }

        let entries = self.write_changelog()?;

        if self
            .source
            .has_uncommitted_changes(self.relative_changelog())?
        {
            Ok(Outcome::NeedsUpdate { entries })
        } else {
            Ok(Outcome::UpToDate { entries })
        }
    }
}
