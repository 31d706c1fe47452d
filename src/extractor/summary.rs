//! Summary / objective extraction.

use crate::options::Options;
use crate::section;

/// Returns the "Summary" section, or the "Objective" section when there is
/// no summary.
#[must_use]
pub fn extract_summary(text: &str, options: &Options) -> Option<String> {
    ["Summary", "Objective"]
        .iter()
        .map(|header| section::locate(text, header, &options.stop_headers))
        .find(|body| !body.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_preferred_over_objective() {
        let text = "Objective:\nGet hired\nSummary:\nBackend engineer\nSkills:\nRust";
        assert_eq!(
            extract_summary(text, &Options::default()).as_deref(),
            Some("Backend engineer")
        );
    }

    #[test]
    fn objective_fallback() {
        let text = "Objective:\nJoin a systems team.\nSkills: Rust";
        assert_eq!(
            extract_summary(text, &Options::default()).as_deref(),
            Some("Join a systems team.")
        );
    }

    #[test]
    fn neither_section() {
        assert_eq!(extract_summary("Skills: Rust", &Options::default()), None);
    }
}
