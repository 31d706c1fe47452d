//! Text acquisition.
//!
//! Turns a resume file into one plain-text string for the extractors.
//! Dispatch is on the file extension:
//!
//! - `.txt`: decoded with BOM sniffing, invalid bytes dropped
//! - `.docx`: paragraphs of `word/document.xml`, one per line (`docx` feature)
//! - `.pdf`: text layer page by page, with OCR for pages that have none
//!   (`pdf` feature)

use std::ffi::OsStr;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

pub mod plain;

#[cfg(feature = "docx")]
pub mod docx;

#[cfg(feature = "pdf")]
pub mod ocr;

#[cfg(feature = "pdf")]
pub mod pdf;

/// Supported resume file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    /// Determines the format from the file extension, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "txt" => Ok(Self::Text),
            "" => Err(Error::UnsupportedFormat("(none)".to_string())),
            _ => Err(Error::UnsupportedFormat(format!(".{ext}"))),
        }
    }
}

/// Settings for text acquisition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquireOptions {
    /// OCR PDF pages that have no text layer.
    ///
    /// Default: `true`
    pub ocr_fallback: bool,

    /// Rasterization resolution for OCR.
    ///
    /// Default: `300`
    pub ocr_dpi: u32,

    /// Tesseract language code(s), e.g. `"eng"` or `"eng+deu"`.
    ///
    /// Default: `"eng"`
    pub ocr_language: String,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self {
            ocr_fallback: true,
            ocr_dpi: 300,
            ocr_language: "eng".to_string(),
        }
    }
}

/// Reads the resume at `path` as plain text.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for unknown extensions,
/// [`Error::FeatureDisabled`] when the format's reader is compiled out, and
/// I/O or format errors from the reader.
pub fn acquire_text(path: &Path, options: &AcquireOptions) -> Result<String> {
    let format = DocumentFormat::from_path(path)?;
    debug!(path = %path.display(), ?format, "acquiring resume text");

    let text = match format {
        DocumentFormat::Text => plain::read_text(path)?,
        DocumentFormat::Docx => read_docx(path)?,
        DocumentFormat::Pdf => read_pdf(path, options)?,
    };

    debug!(chars = text.len(), "acquired resume text");
    Ok(text)
}

#[cfg(feature = "docx")]
fn read_docx(path: &Path) -> Result<String> {
    docx::read_docx(path)
}

#[cfg(not(feature = "docx"))]
fn read_docx(_path: &Path) -> Result<String> {
    Err(Error::FeatureDisabled("DOCX"))
}

#[cfg(feature = "pdf")]
fn read_pdf(path: &Path, options: &AcquireOptions) -> Result<String> {
    pdf::read_pdf(path, options)
}

#[cfg(not(feature = "pdf"))]
fn read_pdf(_path: &Path, _options: &AcquireOptions) -> Result<String> {
    Err(Error::FeatureDisabled("PDF"))
}
