//! Word document paragraph extraction

pub mod extract;
pub mod reader;

use std::path::Path;
use crate::error::{Error, Result};

// Re-export commonly used items
pub use extract::{extract, Block, Paragraph, NO_HEADING};
pub use reader::{read_blocks, DocxError};

/// Extract all non-empty paragraphs of a DOCX file with their nearest heading
///
/// Extraction is all-or-nothing: any problem reading the package yields
/// [`Error::DocumentUnreadable`] and no paragraphs.
pub fn extract_paragraphs(path: &Path) -> Result<Vec<Paragraph>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path).map_err(|e| unreadable(path, e))?;
    let blocks = read_blocks(file).map_err(|e| unreadable(path, e))?;

    let paragraphs = extract(blocks);
    log::debug!("{}: {} paragraphs", path.display(), paragraphs.len());

    Ok(paragraphs)
}

fn unreadable(path: &Path, reason: impl std::fmt::Display) -> Error {
    Error::DocumentUnreadable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
