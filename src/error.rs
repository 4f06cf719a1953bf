use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    RepositoryNotFound {
        path: PathBuf,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// git query failed or the marker commit could not be read
    HistoryQuery {
        reason: String,
    },
    /// changelog file exists but lacks the expected structure
    DocumentFormat {
        path: PathBuf,
        reason: String,
    },
    DocumentMissing {
        path: PathBuf,
    },
    /// changelog has local edits that regeneration would overwrite
    UncommittedChanges {
        path: PathBuf,
    },
    GitError(Box<dyn std::error::Error + Send + Sync>),
    GitDiscoverError(Box<gix::discover::Error>),
    IoError(std::io::Error),
    RefNotFound {
        ref_name: String,
    },
    InvalidRef {
        ref_name: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RepositoryNotFound { path } => {
                write!(f, "git repository not found in path: {}", path.display())
            }
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::FileWriteError { path, source } => {
                write!(f, "failed to write file: {} ({})", path.display(), source)
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::HistoryQuery { reason } => {
                write!(f, "history query failed: {}", reason)
            }
            Error::DocumentFormat { path, reason } => {
                write!(f, "malformed changelog {}: {}", path.display(), reason)
            }
            Error::DocumentMissing { path } => {
                write!(f, "{} not found", path.display())
            }
            Error::UncommittedChanges { path } => {
                write!(
                    f,
                    "{} has uncommitted manual changes, commit or revert them first",
                    path.display()
                )
            }
            Error::GitError(err) => {
                write!(f, "git error: {}", err)
            }
            Error::GitDiscoverError(err) => {
                write!(f, "git discover error: {}", err)
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
            Error::RefNotFound { ref_name } => {
                write!(f, "git reference not found: {}", ref_name)
            }
            Error::InvalidRef { ref_name } => {
                write!(f, "invalid git reference: {}", ref_name)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::FileWriteError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            Error::GitError(err) => Some(err.as_ref()),
            Error::GitDiscoverError(err) => Some(err.as_ref()),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<gix::discover::Error> for Error {
    fn from(err: gix::discover::Error) -> Self {
        Error::GitDiscoverError(Box::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

// Helper function to convert various git errors
impl Error {
    pub fn from_git_error<T: std::error::Error + Send + Sync + 'static>(err: T) -> Self {
        Error::GitError(Box::new(err))
    }

    pub fn history<S: Into<String>>(reason: S) -> Self {
        Error::HistoryQuery {
            reason: reason.into(),
        }
    }

    /// whether this error stems from the history backend rather than the document
    pub fn is_history_error(&self) -> bool {
        matches!(
            self,
            Error::HistoryQuery { .. }
                | Error::GitError(_)
                | Error::GitDiscoverError(_)
                | Error::RefNotFound { .. }
                | Error::InvalidRef { .. }
        )
    }
}
