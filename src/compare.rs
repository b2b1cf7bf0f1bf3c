//! End-to-end comparison of two Word documents

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use crate::diff::{diff_with_pages, DiffEntry};
use crate::docx::extract_paragraphs;
use crate::error::{Error, Result};
use crate::pdf::{extract_pages, PdfConverter};

/// Which rendering removed paragraphs are located in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemovedPageSource {
    /// Pages of the modified document (removed text usually resolves to Unknown)
    #[default]
    Modified,
    /// Pages of the original document
    Original,
}

/// Options for comparing two documents
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// The earlier version of the document
    pub original: Option<PathBuf>,
    /// The later version of the document
    pub modified: Option<PathBuf>,
    /// Page source for removed paragraphs
    pub removed_pages: RemovedPageSource,
}

/// Compare two DOCX files and report added and removed paragraphs
///
/// Both documents are converted to PDF inside a temporary directory that is
/// removed when this function returns, whether or not it succeeds. Any
/// conversion or extraction failure aborts the run without a report.
///
/// # Example
///
/// ```no_run
/// use docx_compare::compare::{compare_documents, CompareOptions};
/// use docx_compare::pdf::LibreOfficeConverter;
/// use docx_compare::report::format_report;
/// use std::path::PathBuf;
///
/// let options = CompareOptions {
///     original: Some(PathBuf::from("contract-v1.docx")),
///     modified: Some(PathBuf::from("contract-v2.docx")),
///     ..Default::default()
/// };
///
/// let entries = compare_documents(&options, &LibreOfficeConverter::default())
///     .expect("Failed to compare");
/// println!("{}", format_report(&entries));
/// ```
pub fn compare_documents(
    options: &CompareOptions,
    converter: &dyn PdfConverter,
) -> Result<Vec<DiffEntry>> {
    let original = options.original.as_deref().ok_or(Error::MissingInput("original"))?;
    let modified = options.modified.as_deref().ok_or(Error::MissingInput("modified"))?;

    for path in [original, modified] {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
    }

    let work_dir = TempDir::new()?;
    log::debug!("Working directory: {}", work_dir.path().display());

    // Separate directories so inputs with the same file name don't collide
    let original_pdf = convert_into(converter, original, work_dir.path(), "original")?;
    let modified_pdf = convert_into(converter, modified, work_dir.path(), "modified")?;

    let modified_pages = extract_pages(&modified_pdf)?;
    let removed_pages = match options.removed_pages {
        RemovedPageSource::Modified => None,
        RemovedPageSource::Original => Some(extract_pages(&original_pdf)?),
    };

    let original_paragraphs = extract_paragraphs(original)?;
    let modified_paragraphs = extract_paragraphs(modified)?;

    let entries = diff_with_pages(
        &original_paragraphs,
        &modified_paragraphs,
        &modified_pages,
        removed_pages.as_deref().unwrap_or(&modified_pages),
    );

    Ok(entries)
}

fn convert_into(
    converter: &dyn PdfConverter,
    input: &Path,
    work_dir: &Path,
    name: &str,
) -> Result<PathBuf> {
    let output_dir = work_dir.join(name);
    std::fs::create_dir_all(&output_dir)?;
    converter.convert(input, &output_dir)
}
