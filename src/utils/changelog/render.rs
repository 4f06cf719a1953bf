// changelog rendering

use super::types::{CommitEntry, SECTION_LINE, TITLE_LINE};

/// render a full document: fixed header, entries separated by one blank line,
/// single trailing newline
pub fn render(entries: &[CommitEntry]) -> String {
    let body = entries
        .iter()
        .map(CommitEntry::text)
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{}\n\n{}\n\n{}\n", TITLE_LINE, SECTION_LINE, body)
}
