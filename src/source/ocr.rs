//! OCR fallback for PDF pages without a text layer.
//!
//! Pages are rasterized with `pdftoppm` (poppler-utils) and recognized with
//! the `tesseract` CLI. Both must be on `PATH`.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};
use crate::source::AcquireOptions;

/// Rasterize-then-recognize OCR for single PDF pages.
#[derive(Debug, Clone)]
pub struct OcrEngine {
    dpi: u32,
    language: String,
}

impl OcrEngine {
    #[must_use]
    pub fn new(dpi: u32, language: String) -> Self {
        Self { dpi, language }
    }

    #[must_use]
    pub fn from_options(options: &AcquireOptions) -> Self {
        Self::new(options.ocr_dpi, options.ocr_language.clone())
    }

    /// Rasterizes page `page_idx` (0-based) of `pdf_path` and returns its
    /// recognized text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Ocr`] when either tool is missing or fails.
    pub fn page_text(&self, pdf_path: &Path, page_idx: usize) -> Result<String> {
        let scratch = tempfile::tempdir()?;
        let image = self.render_page(pdf_path, page_idx, scratch.path())?;
        self.recognize(&image)
    }

    fn render_page(&self, pdf_path: &Path, page_idx: usize, out_dir: &Path) -> Result<PathBuf> {
        // pdftoppm uses 1-based page indices
        let page_number = (page_idx + 1).to_string();
        let prefix = out_dir.join(format!("page_{:03}", page_idx + 1));

        let output = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg("-f")
            .arg(&page_number)
            .arg("-l")
            .arg(&page_number)
            .arg("-singlefile")
            .arg(pdf_path)
            .arg(&prefix)
            .output()
            .map_err(|err| {
                Error::Ocr(format!(
                    "failed to invoke pdftoppm; is poppler-utils installed? ({err})"
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Ocr(format!("pdftoppm failed: {}", stderr.trim())));
        }

        // -singlefile writes exactly `<prefix>.png`
        let image = prefix.with_extension("png");
        if !image.exists() {
            return Err(Error::Ocr(format!(
                "expected rendered image not found: {}",
                image.display()
            )));
        }

        debug!(page = page_idx + 1, image = %image.display(), "rendered page for OCR");
        Ok(image)
    }

    /// Runs tesseract on an image and returns the recognized text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Ocr`] when tesseract is missing or fails.
    pub fn recognize(&self, image: &Path) -> Result<String> {
        let output = Command::new("tesseract")
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|err| {
                Error::Ocr(format!("failed to invoke tesseract; is it installed? ({err})"))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Ocr(format!("tesseract failed: {}", stderr.trim())));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
