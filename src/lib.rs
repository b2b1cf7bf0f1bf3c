//! Word Document Comparison Library
//!
//! Compares two versions of a Word document and reports the paragraphs
//! that were added or removed, each with its nearest heading and the page
//! it appears on. This library provides functionality to:
//! - Extract paragraphs with heading context from DOCX files
//! - Convert DOCX files to PDF and extract per-page text
//! - Locate paragraph text on a page
//! - Classify paragraphs as added/removed and render a text report
//!
//! # Example
//!
//! ```
//! use docx_compare::diff::diff;
//! use docx_compare::docx::{Paragraph, NO_HEADING};
//! use docx_compare::report::format_report;
//!
//! let original = vec![Paragraph::new("Intro", NO_HEADING), Paragraph::new("Scope", NO_HEADING)];
//! let modified = vec![Paragraph::new("Intro", NO_HEADING), Paragraph::new("Scope v2", NO_HEADING)];
//! let pages = ["Intro\nScope v2"];
//!
//! let entries = diff(&original, &modified, &pages);
//! assert_eq!(
//!     format_report(&entries),
//!     "Page 1 | Heading: No Heading\n  + Added: Scope v2\n\n\
//!      Page 1 | Heading: No Heading\n  - Removed: Scope\n"
//! );
//! ```

pub mod compare;
pub mod diff;
pub mod docx;
pub mod error;
pub mod locate;
pub mod pdf;
pub mod report;

// Re-export commonly used items
pub use error::{Error, Result};
