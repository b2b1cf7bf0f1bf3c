//! Text rendering of a comparison report

use crate::diff::DiffEntry;

/// Message shown when the report has no entries
pub const NO_CHANGES: &str = "No changes detected!";

/// Render one entry as a two-line block
pub fn format_entry(entry: &DiffEntry) -> String {
    format!(
        "Page {} | Heading: {}\n  {} {}: {}\n",
        entry.page,
        entry.heading,
        entry.kind.sign(),
        entry.kind.label(),
        entry.text
    )
}

/// Render all entries, blocks separated by a blank line
pub fn format_report(entries: &[DiffEntry]) -> String {
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n")
}
