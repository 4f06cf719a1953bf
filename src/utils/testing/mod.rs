// testing utilities: real git repositories and an in-memory history

pub mod fake;
pub mod git_utils;

pub use fake::FakeHistory;
pub use git_utils::TestGitRepo;
