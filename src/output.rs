//! Persisting parsed records as JSON files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::error::Result;
use crate::result::ResumeRecord;

/// Default directory for saved records.
pub const DEFAULT_OUTPUT_DIR: &str = "json_output";

/// Writes `record` to `destination` as indented JSON, creating parent
/// directories as needed. Non-ASCII text is written verbatim.
///
/// # Errors
///
/// Returns an error when the directory or file cannot be written.
pub fn persist(record: &ResumeRecord, destination: &Path) -> Result<()> {
    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(record)?;
    fs::write(destination, json)?;

    debug!(path = %destination.display(), "saved resume record");
    Ok(())
}

/// Output file for `input` inside `dir`: `<stem>.json`, or
/// `<stem>_<YYYYMMDD_HHMMSS>.json` when a timestamp is given.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use rs_resume_parser::output::output_path;
///
/// let path = output_path(Path::new("json_output"), Path::new("cvs/jane_doe.pdf"), None);
/// assert_eq!(path, Path::new("json_output/jane_doe.json"));
/// ```
#[must_use]
pub fn output_path(dir: &Path, input: &Path, timestamp: Option<NaiveDateTime>) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "resume".to_string(), |s| s.to_string_lossy().into_owned());

    let file_name = match timestamp {
        Some(ts) => format!("{stem}_{}.json", ts.format("%Y%m%d_%H%M%S")),
        None => format!("{stem}.json"),
    };

    dir.join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn timestamped_name() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(14, 5, 7))
            .unwrap();
        let path = output_path(Path::new("out"), Path::new("jane.docx"), Some(ts));
        assert_eq!(path, Path::new("out/jane_20240309_140507.json"));
    }

    #[test]
    fn persist_creates_directories_and_writes_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/zoe.json");
        let record = ResumeRecord {
            name: Some("Zoë Brontë".to_string()),
            ..ResumeRecord::default()
        };

        persist(&record, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"name\": \"Zoë Brontë\"\n}");
    }
}
