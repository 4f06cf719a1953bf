// changelog parser

use super::types::{CommitEntry, ENTRY_PREFIX, SECTION_LINE};
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// lines following the "## Changes" marker
fn section_lines(text: &str) -> std::result::Result<std::str::Lines<'_>, String> {
    let mut lines = text.lines();
    let found = lines.any(|line| line.trim() == SECTION_LINE);

    if found {
        Ok(lines)
    } else {
        Err(format!("missing '{}' section", SECTION_LINE))
    }
}

/// extract the first entry below "## Changes"
///
/// the entry starts at the first "- " line and runs until the next blank line
/// or the next "- " line. a section without entries yields an empty entry
pub fn parse_first_entry(text: &str) -> std::result::Result<CommitEntry, String> {
    let mut entry_lines: Vec<&str> = Vec::new();

    for line in section_lines(text)? {
        let blank = line.trim().is_empty();

        if entry_lines.is_empty() {
            // anything before the first entry is skipped
            if !blank && line.starts_with(ENTRY_PREFIX) {
                entry_lines.push(line);
            }
            continue;
        }

        if blank || line.starts_with(ENTRY_PREFIX) {
            break;
        }
        entry_lines.push(line);
    }

    Ok(CommitEntry::new(entry_lines))
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::DocumentMissing {
            path: path.to_path_buf(),
        },
        _ => Error::FileReadError {
            path: path.to_path_buf(),
            source: e,
        },
    })
}

/// read a changelog file and return its first entry
pub fn load_first_entry<P: AsRef<Path>>(path: P) -> Result<CommitEntry> {
    let path = path.as_ref();
    let content = read_document(path)?;

    parse_first_entry(&content).map_err(|reason| Error::DocumentFormat {
        path: path.to_path_buf(),
        reason,
    })
}
