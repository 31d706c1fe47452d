//! DOCX resumes.
//!
//! Reads `word/document.xml` from the zip container and emits one line per
//! `w:p` paragraph. Runs are concatenated; `w:tab` becomes a tab and
//! `w:br`/`w:cr` a line break.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::error::{Error, Result};

const DOCUMENT_PART: &str = "word/document.xml";

/// Reads the paragraphs of a DOCX file as newline-separated text.
///
/// # Errors
///
/// Returns [`Error::Docx`] when the file is not a zip container or lacks
/// `word/document.xml`.
pub fn read_docx(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|err| Error::Docx(err.to_string()))?;

    let mut xml = String::new();
    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|err| Error::Docx(format!("{DOCUMENT_PART}: {err}")))?;
    part.read_to_string(&mut xml)?;

    paragraphs_from_xml(&xml)
}

/// Extracts paragraph text from WordprocessingML document XML.
///
/// # Errors
///
/// Returns [`Error::Docx`] on malformed XML.
pub fn paragraphs_from_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(|err| Error::Docx(err.to_string()))? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                b"w:p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t.unescape().map_err(|err| Error::Docx(err.to_string()))?;
                current.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(paragraphs = paragraphs.len(), "read DOCX paragraphs");
    Ok(paragraphs.join("\n"))
}
