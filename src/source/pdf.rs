//! PDF resumes.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::source::ocr::OcrEngine;
use crate::source::AcquireOptions;

/// Extracts the text layer of every page, OCRing pages that have none.
///
/// OCR failures leave the page blank. Pages are joined with newlines.
///
/// # Errors
///
/// Returns [`Error::Pdf`] when the file is not a readable PDF, including
/// files that make the PDF reader panic.
pub fn read_pdf(path: &Path, options: &AcquireOptions) -> Result<String> {
    let pages = text_layer(path)?;
    debug!(pages = pages.len(), "extracted PDF text layer");

    let ocr = options
        .ocr_fallback
        .then(|| OcrEngine::from_options(options));

    let texts: Vec<String> = pages
        .into_iter()
        .enumerate()
        .map(|(idx, page)| match &ocr {
            Some(engine) if page.trim().is_empty() => ocr_page(engine, path, idx),
            _ => page,
        })
        .collect();

    Ok(texts.join("\n"))
}

/// Runs pdf-extract, turning its panics on malformed input into errors.
fn text_layer(path: &Path) -> Result<Vec<String>> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_by_pages(path))) {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(err)) => Err(Error::Pdf(err.to_string())),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!(path = %path.display(), %reason, "PDF reader panicked");
            Err(Error::Pdf(format!("malformed PDF: {reason}")))
        }
    }
}

fn ocr_page(engine: &OcrEngine, path: &Path, page_idx: usize) -> String {
    match engine.page_text(path, page_idx) {
        Ok(text) => {
            debug!(page = page_idx + 1, chars = text.len(), "OCR recovered page text");
            text
        }
        Err(err) => {
            warn!(page = page_idx + 1, %err, "OCR fallback failed; page left blank");
            String::new()
        }
    }
}
