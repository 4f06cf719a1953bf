pub mod repository;
pub mod types;

pub use repository::GitOps;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::history::HistorySource;
    use crate::utils::testing::TestGitRepo;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_open_from_subdirectory() {
        let repo = TestGitRepo::temporary().unwrap();

        let sub_dir = repo.path().join("subdir");
        fs::create_dir(&sub_dir).unwrap();

        let from_root = GitOps::open(repo.path()).unwrap();
        let from_sub = GitOps::open(&sub_dir).unwrap();

        // both should return the same root
        assert_eq!(from_root.root(), from_sub.root());
    }

    #[test]
    fn test_open_error_non_repo() {
        let temp_dir = TempDir::new().unwrap();

        let result = GitOps::open(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_get_repository_info() {
        let repo = TestGitRepo::temporary().unwrap();

        let info = GitOps::get_repository_info(repo.path()).unwrap();
        assert!(!info.is_bare);
        assert!(info.root_path.exists());
        assert!(info.git_dir.exists());
    }

    #[test]
    fn test_resolve_ref_head_and_hash() {
        let repo = TestGitRepo::temporary().unwrap();
        repo.modify_file_and_commit("README.md", "# readme\n", "Initial commit")
            .unwrap();
        let ops = GitOps::open(repo.path()).unwrap();

        let head = ops.resolve_ref(&GitRef::Head).unwrap();
        assert_eq!(head.len(), 40); // SHA-1 hash length
        assert_eq!(head, repo.head_commit_id().unwrap());

        let by_hash = ops.resolve_ref(&GitRef::Hash(head.clone())).unwrap();
        assert_eq!(by_hash, head);

        let short = GitRef::from_string(&head[..10]);
        assert_eq!(ops.resolve_ref(&short).unwrap(), head);
    }

    #[test]
    fn test_resolve_ref_unknown() {
        let repo = TestGitRepo::temporary().unwrap();
        repo.modify_file_and_commit("README.md", "# readme\n", "Initial commit")
            .unwrap();
        let ops = GitOps::open(repo.path()).unwrap();

        let result = ops.resolve_ref(&GitRef::Branch("no-such-branch".to_string()));
        assert!(matches!(
            result,
            Err(crate::error::Error::RefNotFound { .. })
        ));
    }

    #[test]
    fn test_last_commit_message() {
        let repo = TestGitRepo::temporary().unwrap();
        repo.modify_file_and_commit("a.txt", "a", "First").unwrap();
        repo.modify_file_and_commit("b.txt", "b", "Second\n\nwith body")
            .unwrap();
        let ops = GitOps::open(repo.path()).unwrap();

        let message = ops.last_commit_message().unwrap();
        assert_eq!(message, "- Second\nwith body");
    }

    #[test]
    fn test_commit_messages_since_excludes_marker() {
        let repo = TestGitRepo::temporary().unwrap();
        repo.modify_file_and_commit("a.txt", "a", "Marker").unwrap();
        let marker = repo.head_commit_id().unwrap();
        repo.modify_file_and_commit("b.txt", "b", "Second\n\n- bullet in body")
            .unwrap();
        repo.modify_file_and_commit("c.txt", "c", "Third").unwrap();
        let ops = GitOps::open(repo.path()).unwrap();

        let messages = ops.commit_messages_since(&GitRef::Hash(marker)).unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("- Third"));
        assert!(messages[1].starts_with("- Second\n- bullet in body"));
    }

    #[test]
    fn test_commit_messages_since_unknown_marker() {
        let repo = TestGitRepo::temporary().unwrap();
        repo.modify_file_and_commit("a.txt", "a", "First").unwrap();
        let ops = GitOps::open(repo.path()).unwrap();

        let result = ops.commit_messages_since(&GitRef::Branch("missing".to_string()));
        assert!(matches!(
            result,
            Err(crate::error::Error::HistoryQuery { .. })
        ));
    }

    #[test]
    fn test_has_uncommitted_changes() {
        let repo = TestGitRepo::temporary().unwrap();
        repo.modify_file_and_commit("CHANGES.md", "# Changelog\n", "Add changelog")
            .unwrap();
        let ops = GitOps::open(repo.path()).unwrap();
        let file = Path::new("CHANGES.md");

        assert!(!ops.has_uncommitted_changes(file).unwrap());

        fs::write(repo.path().join("CHANGES.md"), "# Changelog\nedited\n").unwrap();
        assert!(ops.has_uncommitted_changes(file).unwrap());

        // other files do not count
        fs::write(repo.path().join("CHANGES.md"), "# Changelog\n").unwrap();
        fs::write(repo.path().join("other.txt"), "x").unwrap();
        assert!(!ops.has_uncommitted_changes(file).unwrap());
    }

    #[test]
    fn test_git_ref_from_string() {
        assert_eq!(GitRef::from_string("HEAD"), GitRef::Head);
        assert_eq!(
            GitRef::from_string("main"),
            GitRef::Branch("main".to_string())
        );

        // 40-character hex string should be detected as hash
        let hash = "a1b2c3d4e5f6789012345678901234567890abcd";
        assert_eq!(GitRef::from_string(hash), GitRef::Hash(hash.to_string()));

        // tag format
        assert_eq!(
            GitRef::from_string("refs/tags/v1.0"),
            GitRef::Tag("v1.0".to_string())
        );
        assert_eq!(GitRef::Tag("v1.0".to_string()).as_rev(), "refs/tags/v1.0");
    }
}
