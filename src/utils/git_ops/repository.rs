use super::types::{GitRef, GitRepository};
use crate::error::{Error, Result};
use crate::utils::history::HistorySource;
use std::path::{Path, PathBuf};
use std::process::Command;

/// pretty format of a single changelog entry: "- subject" followed by the body
const ENTRY_FORMAT: &str = "--pretty=format:- %s%n%b";

/// same as ENTRY_FORMAT, prefixed with an ASCII record separator per commit
const RECORD_FORMAT: &str = "--pretty=format:%x1e- %s%n%b";

const RECORD_SEPARATOR: char = '\u{1e}';

/// git access rooted at a working tree
///
/// discovery and ref resolution go through gix; log and diff queries shell
/// out to the git binary so their output matches what users see
#[derive(Debug, Clone)]
pub struct GitOps {
    root: PathBuf,
}

impl GitOps {
    /// open the repository containing `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = Self::detect_repository_root(path)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// detect root of the repository (path as a result)
    pub fn detect_repository_root<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
        Ok(Self::get_repository_info(path)?.root_path)
    }

    /// get detailed repository information
    pub fn get_repository_info<P: AsRef<Path>>(path: P) -> Result<GitRepository> {
        let path = path.as_ref();

        // if it's a file, use its parent directory for discovery
        let check_path = if path.is_file() {
            match path.parent() {
                Some(parent) => parent,
                None => {
                    return Err(Error::RepositoryNotFound {
                        path: path.to_path_buf(),
                    });
                }
            }
        } else {
            path
        };

        let repo = gix::discover(check_path)?;

        let is_bare = repo.is_bare();
        let git_dir = repo.git_dir().to_path_buf();

        let root_path = if let Some(work_dir) = repo.work_dir() {
            work_dir.to_path_buf()
        } else {
            git_dir.clone()
        };

        Ok(GitRepository::new(root_path, is_bare, git_dir))
    }

    /// resolve git reference to commit hash
    pub fn resolve_ref(&self, git_ref: &GitRef) -> Result<String> {
        let repo = gix::discover(&self.root)?;

        let commit_id = match git_ref {
            GitRef::Hash(hash) => {
                let object_id =
                    gix::ObjectId::from_hex(hash.as_bytes()).map_err(|_| Error::InvalidRef {
                        ref_name: hash.clone(),
                    })?;

                // verify object exists in repo
                if repo.find_object(object_id).is_ok() {
                    hash.clone()
                } else {
                    return Err(Error::RefNotFound {
                        ref_name: hash.clone(),
                    });
                }
            }
            GitRef::Head => {
                let head_commit = repo.head_commit().map_err(Error::from_git_error)?;
                head_commit.id().to_string()
            }
            GitRef::Branch(name) => {
                match repo
                    .find_reference(&format!("refs/heads/{}", name))
                    .or_else(|_| repo.find_reference(&format!("refs/remotes/origin/{}", name)))
                {
                    Ok(reference) => reference
                        .into_fully_peeled_id()
                        .map_err(Error::from_git_error)?
                        .to_string(),
                    // abbreviated hashes and revision expressions
                    Err(_) => repo
                        .rev_parse_single(name.as_str())
                        .map_err(|_| Error::RefNotFound {
                            ref_name: name.clone(),
                        })?
                        .to_string(),
                }
            }
            GitRef::Tag(tag_name) => {
                let reference = repo
                    .find_reference(&format!("refs/tags/{}", tag_name))
                    .map_err(|_| Error::RefNotFound {
                        ref_name: tag_name.clone(),
                    })?;

                reference
                    .into_fully_peeled_id()
                    .map_err(Error::from_git_error)?
                    .to_string()
            }
        };

        Ok(commit_id)
    }

    fn run_git(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(root = %self.root.display(), ?args, "running git");

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()
            .map_err(|e| Error::history(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::history(format!(
                "git {} failed ({}): {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl HistorySource for GitOps {
    fn last_commit_message(&self) -> Result<String> {
        let output = self.run_git(&["log", "-1", ENTRY_FORMAT])?;
        Ok(output.trim().to_string())
    }

    fn commit_messages_since(&self, marker: &GitRef) -> Result<Vec<String>> {
        let marker_id = self.resolve_ref(marker).map_err(|e| {
            Error::history(format!("cannot resolve marker commit '{}': {}", marker, e))
        })?;
        let range = format!("{}..HEAD", marker_id);

        let output = self.run_git(&["log", RECORD_FORMAT, range.as_str()])?;
        let messages: Vec<String> = output
            .split(RECORD_SEPARATOR)
            .skip(1)
            .map(str::to_string)
            .collect();

        tracing::debug!(range = %range, commits = messages.len(), "read commit range");
        Ok(messages)
    }

    fn has_uncommitted_changes(&self, path: &Path) -> Result<bool> {
        let path = path.to_string_lossy().into_owned();
        let output = self.run_git(&["diff", "--name-only", "--", path.as_str()])?;
        Ok(!output.trim().is_empty())
    }
}
