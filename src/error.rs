//! Error types for rs-resume-parser.
//!
//! Only text acquisition and persistence can fail. The extraction core
//! always produces a (possibly empty) record.

/// Error type for acquisition and persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file extension is not one of `.pdf`, `.docx`, `.txt`.
    #[error("Unsupported file extension: {0}")]
    UnsupportedFormat(String),

    /// The format is known but its reader was compiled out.
    #[error("Support for {0} files is not enabled in this build")]
    FeatureDisabled(&'static str),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The PDF text layer could not be extracted.
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    /// The DOCX container or its document XML could not be read.
    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    /// Page rasterization or OCR failed.
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// The record could not be encoded as JSON.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for acquisition and persistence operations.
pub type Result<T> = std::result::Result<T, Error>;
