//! Word document comparison CLI tool
//!
//! A command-line tool for reporting paragraphs added to or removed from a
//! Word document.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;

use docx_compare::compare::{compare_documents, CompareOptions, RemovedPageSource};
use docx_compare::diff::summarize;
use docx_compare::docx::extract_paragraphs;
use docx_compare::pdf::{extract_pages, LibreOfficeConverter, SOFFICE_ENV};
use docx_compare::report::{format_report, NO_CHANGES};

/// docx-compare - Report added and removed paragraphs between two Word documents
#[derive(Parser)]
#[command(name = "docx-compare")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Compare two versions and print the report
    docx-compare compare contract-v1.docx contract-v2.docx

    # Locate removed paragraphs in the original's pages and save the report
    docx-compare compare old.docx new.docx --removed-pages original -o changes.txt

    # Show the paragraphs and headings found in a document
    docx-compare paragraphs report.docx")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare an original and a modified Word document
    Compare {
        /// Original .docx file
        original: PathBuf,

        /// Modified .docx file
        modified: PathBuf,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which document's pages removed paragraphs are located in
        #[arg(long, value_enum, default_value_t = PageSource::Modified)]
        removed_pages: PageSource,

        /// LibreOffice executable used for PDF conversion
        #[arg(long, env = SOFFICE_ENV)]
        soffice: Option<PathBuf>,
    },

    /// List the paragraphs of a Word document with their headings
    Paragraphs {
        /// .docx file to inspect
        input: PathBuf,
    },

    /// Show the text of each page of a PDF
    Pages {
        /// PDF file to inspect
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSource {
    /// Pages of the modified document
    Modified,
    /// Pages of the original document
    Original,
}

impl From<PageSource> for RemovedPageSource {
    fn from(source: PageSource) -> Self {
        match source {
            PageSource::Modified => RemovedPageSource::Modified,
            PageSource::Original => RemovedPageSource::Original,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Compare {
            original, modified, output, removed_pages, soffice,
        } => cmd_compare(original, modified, output, removed_pages, soffice),
        Commands::Paragraphs { input } => cmd_paragraphs(input),
        Commands::Pages { input } => cmd_pages(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Compare two documents and print or save the report
fn cmd_compare(
    original: PathBuf,
    modified: PathBuf,
    output: Option<PathBuf>,
    removed_pages: PageSource,
    soffice: Option<PathBuf>,
) -> Result<()> {
    let converter = soffice
        .map(LibreOfficeConverter::new)
        .unwrap_or_default();

    let options = CompareOptions {
        original: Some(original),
        modified: Some(modified),
        removed_pages: removed_pages.into(),
    };

    eprintln!("Comparing documents...");
    let entries = compare_documents(&options, &converter)?;

    if entries.is_empty() {
        println!("{}", NO_CHANGES);
        return Ok(());
    }

    let report = format_report(&entries);
    match output {
        Some(path) => {
            std::fs::write(&path, &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!("Report: {}", path.display());
        }
        None => println!("{}", report),
    }

    eprintln!("{}", summarize(&entries));

    Ok(())
}

/// Show the paragraphs of a document
fn cmd_paragraphs(input: PathBuf) -> Result<()> {
    let paragraphs = extract_paragraphs(&input)?;

    println!("File: {}", input.display());
    println!("Paragraphs: {}", paragraphs.len());

    for paragraph in &paragraphs {
        println!("[{}] {}", paragraph.heading, paragraph.text);
    }

    Ok(())
}

/// Show the text of each page of a PDF
fn cmd_pages(input: PathBuf) -> Result<()> {
    let pages = extract_pages(&input)?;

    println!("File: {}", input.display());
    println!("Pages: {}", pages.len());

    for (index, text) in pages.iter().enumerate() {
        println!("--- Page {} ---", index + 1);
        println!("{}", text);
    }

    Ok(())
}
