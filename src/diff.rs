//! Paragraph-level added/removed classification

use std::collections::HashSet;
use crate::docx::Paragraph;
use crate::locate::{locate, PageNumber};

/// Whether a paragraph was added to or removed from the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    Added,
    Removed,
}

impl DiffKind {
    /// Marker used in the text report
    pub fn sign(&self) -> char {
        match self {
            DiffKind::Added => '+',
            DiffKind::Removed => '-',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiffKind::Added => "Added",
            DiffKind::Removed => "Removed",
        }
    }
}

/// One reported addition or removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub kind: DiffKind,
    pub page: PageNumber,
    pub heading: String,
    pub text: String,
}

/// Entry counts of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
}

/// Compare two paragraph streams, locating all changes in `pages`
///
/// `pages` is the page text of the modified document; removed paragraphs
/// are looked up there as well. Use [`diff_with_pages`] to locate them in
/// the original's pages instead.
pub fn diff<S: AsRef<str>>(
    original: &[Paragraph],
    modified: &[Paragraph],
    pages: &[S],
) -> Vec<DiffEntry> {
    diff_with_pages(original, modified, pages, pages)
}

/// Compare two paragraph streams with separate page sources
///
/// Paragraphs are the same iff their texts are equal; repeated paragraphs
/// count once. The report lists added entries in modified order, then
/// removed entries in original order. An empty report means no changes.
pub fn diff_with_pages<A: AsRef<str>, R: AsRef<str>>(
    original: &[Paragraph],
    modified: &[Paragraph],
    added_pages: &[A],
    removed_pages: &[R],
) -> Vec<DiffEntry> {
    let original_texts: HashSet<&str> = original.iter().map(|p| p.text.as_str()).collect();
    let modified_texts: HashSet<&str> = modified.iter().map(|p| p.text.as_str()).collect();

    let added = modified
        .iter()
        .filter(|p| !original_texts.contains(p.text.as_str()))
        .map(|p| entry(DiffKind::Added, p, locate(&p.text, added_pages)));

    let removed = original
        .iter()
        .filter(|p| !modified_texts.contains(p.text.as_str()))
        .map(|p| entry(DiffKind::Removed, p, locate(&p.text, removed_pages)));

    let entries: Vec<DiffEntry> = added.chain(removed).collect();
    log::debug!("{}", summarize(&entries));

    entries
}

fn entry(kind: DiffKind, paragraph: &Paragraph, page: PageNumber) -> DiffEntry {
    DiffEntry {
        kind,
        page,
        heading: paragraph.heading.clone(),
        text: paragraph.text.clone(),
    }
}

/// Count added and removed entries
pub fn summarize(entries: &[DiffEntry]) -> DiffSummary {
    entries.iter().fold(DiffSummary::default(), |mut summary, e| {
        match e.kind {
            DiffKind::Added => summary.added += 1,
            DiffKind::Removed => summary.removed += 1,
        }
        summary
    })
}

impl std::fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} added, {} removed", self.added, self.removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::NO_HEADING;

    fn paras(items: &[(&str, &str)]) -> Vec<Paragraph> {
        items.iter().map(|(t, h)| Paragraph::new(*t, *h)).collect()
    }

    const NO_PAGES: [&str; 0] = [];

    #[test]
    fn test_identical_documents_no_changes() {
        let doc = paras(&[("Intro", NO_HEADING), ("Body", "Intro"), ("Body", "Intro")]);
        assert!(diff(&doc, &doc, &["Intro Body"]).is_empty());
        assert!(diff(&doc, &doc, &NO_PAGES).is_empty());
    }

    #[test]
    fn test_changed_paragraph_is_removal_plus_addition() {
        let original = paras(&[("Intro", NO_HEADING), ("Scope", NO_HEADING)]);
        let modified = paras(&[("Intro", NO_HEADING), ("Scope v2", NO_HEADING)]);

        let entries = diff(&original, &modified, &NO_PAGES);

        assert_eq!(
            entries,
            vec![
                DiffEntry {
                    kind: DiffKind::Added,
                    page: PageNumber::Unknown,
                    heading: NO_HEADING.to_string(),
                    text: "Scope v2".to_string(),
                },
                DiffEntry {
                    kind: DiffKind::Removed,
                    page: PageNumber::Unknown,
                    heading: NO_HEADING.to_string(),
                    text: "Scope".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_order_preserved_added_before_removed() {
        let original = paras(&[("a", "H"), ("x", "H"), ("b", "H"), ("y", "H")]);
        let modified = paras(&[("p", "H"), ("a", "H"), ("q", "H"), ("b", "H"), ("r", "H")]);

        let entries = diff(&original, &modified, &NO_PAGES);
        let got: Vec<(DiffKind, &str)> = entries.iter().map(|e| (e.kind, e.text.as_str())).collect();

        assert_eq!(
            got,
            vec![
                (DiffKind::Added, "p"),
                (DiffKind::Added, "q"),
                (DiffKind::Added, "r"),
                (DiffKind::Removed, "x"),
                (DiffKind::Removed, "y"),
            ]
        );
    }

    #[test]
    fn test_duplicates_by_presence() {
        let original = paras(&[("dup", "H"), ("dup", "H"), ("dup", "H")]);
        let modified = paras(&[("dup", "H")]);
        assert!(diff(&original, &modified, &NO_PAGES).is_empty());

        // Every copy of a paragraph absent from the other side is reported
        let modified = paras(&[("new", "H"), ("new", "H")]);
        let entries = diff(&[], &modified, &NO_PAGES);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_heading_ignored_for_identity() {
        let original = paras(&[("same text", "Old heading")]);
        let modified = paras(&[("same text", "New heading")]);
        assert!(diff(&original, &modified, &NO_PAGES).is_empty());
    }

    #[test]
    fn test_no_paragraph_both_added_and_removed() {
        let original = paras(&[("one", "H"), ("two", "H"), ("three", "H")]);
        let modified = paras(&[("two", "H"), ("four", "H"), ("one", "H")]);

        let entries = diff(&original, &modified, &NO_PAGES);
        let added: HashSet<&str> = entries
            .iter()
            .filter(|e| e.kind == DiffKind::Added)
            .map(|e| e.text.as_str())
            .collect();
        let removed: HashSet<&str> = entries
            .iter()
            .filter(|e| e.kind == DiffKind::Removed)
            .map(|e| e.text.as_str())
            .collect();

        assert_eq!(added, HashSet::from(["four"]));
        assert_eq!(removed, HashSet::from(["three"]));
        assert!(added.is_disjoint(&removed));
    }

    #[test]
    fn test_removed_located_in_modified_pages() {
        let original = paras(&[("Old clause", "Terms")]);
        let modified = paras(&[("New clause", "Terms")]);
        let modified_pages = ["Terms", "New clause", "Old clause kept in appendix"];

        let entries = diff(&original, &modified, &modified_pages);

        assert_eq!(entries[0].page, PageNumber::Page(2));
        assert_eq!(entries[1].kind, DiffKind::Removed);
        assert_eq!(entries[1].page, PageNumber::Page(3));
    }

    #[test]
    fn test_removed_located_in_original_pages() {
        let original = paras(&[("Old clause", "Terms")]);
        let modified = paras(&[("New clause", "Terms")]);
        let modified_pages = ["New clause"];
        let original_pages = vec!["Cover".to_string(), "Old clause".to_string()];

        let entries = diff_with_pages(&original, &modified, &modified_pages, &original_pages);

        assert_eq!(entries[0].page, PageNumber::Page(1));
        assert_eq!(entries[1].page, PageNumber::Page(2));
    }

    #[test]
    fn test_summarize() {
        let original = paras(&[("gone", "H"), ("also gone", "H")]);
        let modified = paras(&[("fresh", "H")]);

        let summary = summarize(&diff(&original, &modified, &NO_PAGES));
        assert_eq!(summary, DiffSummary { added: 1, removed: 2 });
        assert_eq!(summary.to_string(), "1 added, 2 removed");
    }
}
