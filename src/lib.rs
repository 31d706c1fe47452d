//! # rs-resume-parser
//!
//! Heuristic resume parser: turns loosely formatted resume text into a
//! structured record of contact details, skills, work history, education
//! and more.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_resume_parser::parse;
//!
//! let text = "Jane Doe\njane@example.com\n\nSkills:\nRust, SQL\n\nEducation:\nBS Computer Science, MIT, 2018-2022";
//!
//! let record = parse(text);
//! assert_eq!(record.name.as_deref(), Some("Jane Doe"));
//! assert_eq!(record.skills, Some(vec!["Rust".to_string(), "SQL".to_string()]));
//! assert!(record.phone.is_none());
//! ```
//!
//! ## Features
//!
//! - **Section Locating**: isolates sections bounded by a closed set of known headers
//! - **Field Extraction**: name, email, phone, LinkedIn, address, summary
//! - **Lists**: skills, certifications, languages, projects, internships
//! - **Structured Blocks**: education and work experience entries
//! - **Text Acquisition**: `.txt`, `.docx` and `.pdf` with OCR fallback for
//!   pages without a text layer
//!
//! This is a layout-and-pattern heuristic, not an NLP system: unusual
//! formatting yields a partial record, never an error.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Section locator bounded by known headers.
pub mod section;

/// Field, list and structured-block extractors.
pub mod extractor;

/// Text acquisition from PDF, DOCX and plain-text files.
pub mod source;

/// JSON persistence of parsed records.
pub mod output;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{
    Options, DEFAULT_ADDRESS_KEYWORDS, DEFAULT_NAME_SKIP_KEYWORDS, DEFAULT_SKILLS_BLACKLIST,
    DEFAULT_STOP_HEADERS,
};
pub use result::{EducationEntry, ResumeRecord, WorkExperienceEntry};
pub use source::{acquire_text, AcquireOptions, DocumentFormat};

use std::path::Path;

/// Parses resume text using default options.
///
/// Never fails: text without recognizable fields yields an empty record.
#[must_use]
pub fn parse(text: &str) -> ResumeRecord {
    parse_with_options(text, &Options::default())
}

/// Parses resume text with custom header and keyword tables.
///
/// # Example
///
/// ```rust
/// use rs_resume_parser::{parse_with_options, Options};
///
/// let options = Options {
///     skills_blacklist: Vec::new(),
///     ..Options::default()
/// };
/// let record = parse_with_options("Skills: Rust, Salt Lake City", &options);
/// assert_eq!(record.skills.map(|s| s.len()), Some(2));
/// ```
#[must_use]
pub fn parse_with_options(text: &str, options: &Options) -> ResumeRecord {
    extract::extract_record(text, options)
}

/// Reads a `.pdf`, `.docx` or `.txt` resume and parses it with default
/// options.
///
/// # Errors
///
/// Returns an error when the extension is unsupported or the file cannot be
/// read. Parsing itself never fails.
pub fn parse_file(path: impl AsRef<Path>) -> Result<ResumeRecord> {
    parse_file_with_options(path, &AcquireOptions::default(), &Options::default())
}

/// Reads a resume file with custom acquisition settings and parses it.
///
/// # Errors
///
/// Returns an error when the extension is unsupported or the file cannot be
/// read.
pub fn parse_file_with_options(
    path: impl AsRef<Path>,
    acquire: &AcquireOptions,
    options: &Options,
) -> Result<ResumeRecord> {
    let text = acquire_text(path.as_ref(), acquire)?;
    Ok(parse_with_options(&text, options))
}
