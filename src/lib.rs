pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangelogConfig, CommitEntry, ShallowComparison, load_first_entry, parse_first_entry, render,
};
pub use utils::config::ChangesyncConfig;
pub use utils::git_ops::{GitOps, GitRef, GitRepository};
pub use utils::history::{
    HistoryConfig, HistorySource, collapse_blank_lines, load_marker, read_all_commits,
    read_last_commit, strip_trailers,
};
pub use utils::reconciler::{CheckMode, Outcome, Reconciler, Report};
