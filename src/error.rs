//! Error types for the document comparison library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the document comparison library
#[derive(Error, Debug)]
pub enum Error {
    /// The Word document could not be opened or parsed
    #[error("Cannot read document {}: {reason}", path.display())]
    DocumentUnreadable { path: PathBuf, reason: String },

    /// The PDF rendering could not be opened
    #[error("Cannot read rendered PDF {}: {reason}", path.display())]
    RenderUnreadable { path: PathBuf, reason: String },

    /// The DOCX to PDF conversion failed
    #[error("Conversion to PDF failed for {}: {reason}", path.display())]
    ConversionFailed { path: PathBuf, reason: String },

    /// One of the two documents was not supplied
    #[error("No {0} document supplied")]
    MissingInput(&'static str),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
