use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test git repository utilities for controlled testing
pub struct TestGitRepo {
    repo_path: PathBuf,
    // keeps the repository alive for the lifetime of the handle
    _temp_dir: TempDir,
}

impl TestGitRepo {
    /// Initialize a new git repository in a fresh temporary directory
    pub fn temporary() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let repo = Self {
            repo_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        };
        repo.configure()?;
        Ok(repo)
    }

    fn configure(&self) -> Result<()> {
        self.git(&["init"])?;

        // Configure user for commits
        self.git(&["config", "user.name", "Test User"])?;
        self.git(&["config", "user.email", "test@example.com"])?;

        // Disable GPG signing for tests
        self.git(&["config", "commit.gpgsign", "false"])?;
        Ok(())
    }

    /// Run git in the repository and return stdout
    pub fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(Error::IoError)?;

        if !output.status.success() {
            return Err(Error::GitError(Box::new(std::io::Error::other(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            )))));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Write a file without committing it
    pub fn write_file(&self, file_path: &str, content: &str) -> Result<()> {
        let full_path = self.repo_path.join(file_path);

        // Ensure parent directory exists
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(full_path, content)?;
        Ok(())
    }

    /// Read a file from the working tree
    pub fn read_file(&self, file_path: &str) -> Result<String> {
        Ok(std::fs::read_to_string(self.repo_path.join(file_path))?)
    }

    /// Add all files and create a commit
    pub fn add_all_and_commit(&self, message: &str) -> Result<()> {
        self.git(&["add", "."])?;
        self.git(&["commit", "--allow-empty", "-m", message])?;
        Ok(())
    }

    /// Modify a file and commit the change
    pub fn modify_file_and_commit(
        &self,
        file_path: &str,
        content: &str,
        commit_message: &str,
    ) -> Result<()> {
        self.write_file(file_path, content)?;
        self.add_all_and_commit(commit_message)
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.repo_path
    }

    /// Get current HEAD commit ID
    pub fn head_commit_id(&self) -> Result<String> {
        Ok(self.git(&["rev-parse", "HEAD"])?.trim().to_string())
    }
}
