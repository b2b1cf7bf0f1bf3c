//! DOCX to PDF conversion through an external office suite

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use crate::error::{Error, Result};

/// Environment variable overriding the LibreOffice executable
pub const SOFFICE_ENV: &str = "DOCX_COMPARE_SOFFICE";

/// Converts a Word document into a paginated PDF rendering
pub trait PdfConverter {
    /// Convert `input` into a PDF placed inside `output_dir`, returning its path
    fn convert(&self, input: &Path, output_dir: &Path) -> Result<PathBuf>;
}

/// Converter that runs LibreOffice in headless mode
#[derive(Debug, Clone)]
pub struct LibreOfficeConverter {
    /// Path or name of the `soffice` executable
    pub program: PathBuf,
}

impl Default for LibreOfficeConverter {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

impl LibreOfficeConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn args(input: &Path, output_dir: &Path) -> Vec<OsString> {
        vec![
            "--headless".into(),
            "--convert-to".into(),
            "pdf".into(),
            "--outdir".into(),
            output_dir.as_os_str().to_owned(),
            input.as_os_str().to_owned(),
        ]
    }
}

/// Platform default location of the LibreOffice executable
fn default_program() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        PathBuf::from("/Applications/LibreOffice.app/Contents/MacOS/soffice")
    }
    #[cfg(target_os = "windows")]
    {
        PathBuf::from("soffice.exe")
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from("soffice")
    }
}

/// Path of the PDF LibreOffice writes for `input` into `output_dir`
pub fn expected_output(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input.file_stem().unwrap_or(input.as_os_str()).to_owned();
    name.push(".pdf");
    output_dir.join(name)
}

impl PdfConverter for LibreOfficeConverter {
    fn convert(&self, input: &Path, output_dir: &Path) -> Result<PathBuf> {
        let failed = |reason: String| Error::ConversionFailed {
            path: input.to_path_buf(),
            reason,
        };

        log::info!(
            "Converting {} with {}",
            input.display(),
            self.program.display()
        );

        let output = Command::new(&self.program)
            .args(Self::args(input, output_dir))
            .output()
            .map_err(|e| failed(format!("could not run {}: {}", self.program.display(), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failed(format!("{} ({})", output.status, stderr.trim())));
        }

        let pdf_path = expected_output(input, output_dir);
        if !pdf_path.exists() {
            return Err(failed(format!("no PDF produced at {}", pdf_path.display())));
        }

        Ok(pdf_path)
    }
}
