//! Per-page plain text of a rendered PDF

use std::path::Path;
use lopdf::Document;
use crate::error::{Error, Result};

/// Extract the trimmed text of every page of a PDF file, in page order
///
/// Pages without a text layer (image-only pages) yield empty strings, and
/// so does any page lopdf fails to extract text from; one bad page never
/// fails the whole document.
pub fn extract_pages(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path).map_err(|e| Error::RenderUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let pages = page_texts(&doc);
    log::debug!("{}: {} pages", path.display(), pages.len());

    Ok(pages)
}

/// Extract the trimmed text of every page of a loaded PDF
pub fn page_texts(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .keys()
        .map(|&page_number| page_text(doc, page_number))
        .collect()
}

/// Trimmed text of one page, empty if lopdf cannot extract it
fn page_text(doc: &Document, page_number: u32) -> String {
    match doc.extract_text(&[page_number]) {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            log::warn!("No text extracted from page {}: {}", page_number, e);
            String::new()
        }
    }
}
