use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GitRepository {
    pub root_path: PathBuf,
    pub is_bare: bool,
    pub git_dir: PathBuf,
}

impl GitRepository {
    pub fn new(root_path: PathBuf, is_bare: bool, git_dir: PathBuf) -> Self {
        Self {
            root_path,
            is_bare,
            git_dir,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GitRef {
    Hash(String),
    Branch(String),
    Tag(String),
    Head,
}

impl GitRef {
    pub fn from_string(s: &str) -> Self {
        if s.len() == 40 && s.chars().all(|c| c.is_ascii_hexdigit()) {
            GitRef::Hash(s.to_string())
        } else if s == "HEAD" {
            GitRef::Head
        } else if let Some(tag) = s.strip_prefix("refs/tags/") {
            GitRef::Tag(tag.to_string())
        } else {
            GitRef::Branch(s.to_string())
        }
    }

    /// textual form as given on the git command line
    pub fn as_rev(&self) -> String {
        match self {
            GitRef::Hash(hash) => hash.clone(),
            GitRef::Branch(name) => name.clone(),
            GitRef::Tag(name) => format!("refs/tags/{}", name),
            GitRef::Head => "HEAD".to_string(),
        }
    }
}

impl std::fmt::Display for GitRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_rev())
    }
}
