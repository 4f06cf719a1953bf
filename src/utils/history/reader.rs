// commit history reader

use super::HistorySource;
use crate::error::{Error, Result};
use crate::utils::changelog::{CommitEntry, ENTRY_PREFIX, ShallowComparison};
use crate::utils::git_ops::GitRef;
use std::fs;
use std::path::Path;

/// lines of `text` that contain none of the trailer tokens
pub fn strip_trailers<'a>(text: &'a str, trailers: &[String]) -> Vec<&'a str> {
    text.split('\n')
        .filter(|line| !trailers.iter().any(|t| line.contains(t.as_str())))
        .collect()
}

/// collapse every run of blank lines into a single blank line
pub fn collapse_blank_lines(text: &str) -> String {
    let mut result = Vec::new();
    let mut prev_blank = false;

    for line in text.split('\n') {
        let blank = line.trim().is_empty();
        if !(blank && prev_blank) {
            result.push(line);
        }
        prev_blank = blank;
    }

    result.join("\n")
}

fn trim_blank_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let start = lines.iter().position(|l| !l.trim().is_empty());
    let end = lines.iter().rposition(|l| !l.trim().is_empty());

    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].to_vec(),
        _ => Vec::new(),
    }
}

/// normalize one raw "- subject\nbody" message into an entry
pub fn normalize_message(message: &str, trailers: &[String]) -> CommitEntry {
    let filtered = strip_trailers(message, trailers).join("\n");
    let collapsed = collapse_blank_lines(&filtered);
    let lines: Vec<&str> = collapsed.split('\n').collect();
    CommitEntry::new(trim_blank_lines(&lines))
}

/// the part of an entry a document parser sees as the first entry: up to the
/// first blank line or the next "- " line
fn leading_block(entry: &CommitEntry) -> CommitEntry {
    let mut lines = entry.lines().iter();
    let mut block: Vec<&str> = lines.next().map(String::as_str).into_iter().collect();

    block.extend(
        lines
            .take_while(|l| !l.trim().is_empty() && !l.starts_with(ENTRY_PREFIX))
            .map(String::as_str),
    );

    CommitEntry::new(block)
}

/// read the most recent commit as a changelog entry
pub fn read_last_commit<S: HistorySource + ?Sized>(
    source: &S,
    trailers: &[String],
    comparison: ShallowComparison,
) -> Result<CommitEntry> {
    let message = source.last_commit_message()?;
    let entry = normalize_message(&message, trailers);

    tracing::debug!(lines = entry.lines().len(), ?comparison, "read last commit");

    Ok(match comparison {
        ShallowComparison::FullEntry => leading_block(&entry),
        ShallowComparison::SubjectOnly => entry.subject_only(),
    })
}

/// read every commit after `marker` up to HEAD, newest first
pub fn read_all_commits<S: HistorySource + ?Sized>(
    source: &S,
    marker: &GitRef,
    trailers: &[String],
) -> Result<Vec<CommitEntry>> {
    let entries: Vec<CommitEntry> = source
        .commit_messages_since(marker)?
        .iter()
        .map(|message| normalize_message(message, trailers))
        .filter(|entry| !entry.is_empty())
        .collect();

    tracing::debug!(marker = %marker, entries = entries.len(), "read commit history");
    Ok(entries)
}

/// read the marker commit reference from its file
pub fn load_marker<P: AsRef<Path>>(path: P) -> Result<GitRef> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::history(format!(
            "cannot read marker file {}: {}",
            path.display(),
            e
        ))
    })?;

    let marker = content.trim();
    if marker.is_empty() {
        return Err(Error::history(format!(
            "marker file {} is empty",
            path.display()
        )));
    }

    Ok(GitRef::from_string(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::changelog::render;
    use crate::utils::testing::FakeHistory;
    use tempfile::TempDir;

    fn change_id() -> Vec<String> {
        vec!["Change-Id".to_string()]
    }

    #[test]
    fn test_strip_trailers() {
        let lines = strip_trailers("- Subject\nbody\nChange-Id: I42", &change_id());
        assert_eq!(lines, vec!["- Subject", "body"]);
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb\n\nc"), "a\n\nb\n\nc");
        assert_eq!(collapse_blank_lines("a\n  \n\t\nb"), "a\n  \nb");
    }

    #[test]
    fn test_last_commit_only_trailer_in_body() {
        let source = FakeHistory::new().last_commit("- Fix bug\n\nChange-Id: I123abc");

        let entry = read_last_commit(&source, &change_id(), ShallowComparison::FullEntry).unwrap();
        assert_eq!(entry.lines(), &["- Fix bug"]);
    }

    #[test]
    fn test_last_commit_full_entry_keeps_body() {
        let source = FakeHistory::new().last_commit("- Add feature\n  details\nChange-Id: I1");

        let entry = read_last_commit(&source, &change_id(), ShallowComparison::FullEntry).unwrap();
        assert_eq!(entry.lines(), &["- Add feature", "  details"]);
    }

    #[test]
    fn test_last_commit_full_entry_stops_at_paragraph() {
        let source = FakeHistory::new().last_commit("- Subject\nfirst\n\nsecond paragraph");

        let entry = read_last_commit(&source, &change_id(), ShallowComparison::FullEntry).unwrap();
        assert_eq!(entry.lines(), &["- Subject", "first"]);
    }

    #[test]
    fn test_last_commit_subject_only() {
        let source = FakeHistory::new().last_commit("- Add feature\n  details");

        let entry =
            read_last_commit(&source, &change_id(), ShallowComparison::SubjectOnly).unwrap();
        assert_eq!(entry.lines(), &["- Add feature"]);
    }

    #[test]
    fn test_read_all_commits_normalizes() {
        let source = FakeHistory::new().commits([
            "- Third\n\n",
            "- Second\nbody\n\n\n\nmore\nChange-Id: I2\n\n",
            "- First\nChange-Id: I1\n",
        ]);
        let marker = GitRef::from_string("v0.1.0");

        let entries = read_all_commits(&source, &marker, &change_id()).unwrap();
        assert_eq!(
            entries,
            vec![
                CommitEntry::new(["- Third"]),
                CommitEntry::new(["- Second", "body", "", "more"]),
                CommitEntry::new(["- First"]),
            ]
        );
    }

    #[test]
    fn test_whitespace_only_body_end_becomes_empty_separator() {
        let source = FakeHistory::new().commits(["- Second\nbody\n   \n", "- First\n\t\n"]);
        let marker = GitRef::Head;

        let entries = read_all_commits(&source, &marker, &change_id()).unwrap();
        assert_eq!(
            render(&entries),
            "# Changelog\n\n## Changes\n\n- Second\nbody\n\n- First\n"
        );
    }

    #[test]
    fn test_read_all_commits_propagates_failure() {
        let source = FakeHistory::new().failing("fatal: bad revision");
        let marker = GitRef::Head;

        let result = read_all_commits(&source, &marker, &change_id());
        assert!(matches!(result, Err(Error::HistoryQuery { .. })));
    }

    #[test]
    fn test_load_marker() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("initial-public-commit.txt");
        let hash = "a1b2c3d4e5f6789012345678901234567890abcd";
        fs::write(&path, format!("{}\n", hash)).unwrap();

        assert_eq!(load_marker(&path).unwrap(), GitRef::Hash(hash.to_string()));
    }

    #[test]
    fn test_load_marker_missing_or_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("initial-public-commit.txt");

        assert!(matches!(
            load_marker(&path),
            Err(Error::HistoryQuery { .. })
        ));

        fs::write(&path, "  \n").unwrap();
        assert!(matches!(
            load_marker(&path),
            Err(Error::HistoryQuery { .. })
        ));
    }
}
