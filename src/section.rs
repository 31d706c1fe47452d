//! Section locator.
//!
//! Resumes have no fixed schema, so a section is bounded by the closed set of
//! known headers: it runs from its own header line to the next line that
//! starts with any other known header, or to the end of the text.

use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use regex::Regex;
use tracing::{debug, warn};

use crate::options::DEFAULT_STOP_HEADERS;

/// Headers the extractors look up. Their patterns are compiled when a
/// locator is built.
const LOCATED_HEADERS: &[&str] = &[
    "Summary",
    "Objective",
    "Skills",
    "Work Experience",
    "Experience",
    "Education",
    "Certifications",
    "Projects",
    "Languages",
];

static DEFAULT_LOCATOR: LazyLock<Arc<SectionLocator>> = LazyLock::new(|| {
    let stop_headers: Vec<String> = DEFAULT_STOP_HEADERS
        .iter()
        .map(|h| (*h).to_string())
        .collect();
    Arc::new(SectionLocator::new(&stop_headers))
});

/// Locator for the most recently used non-default stop-header table.
static CUSTOM_LOCATOR: Mutex<Option<Arc<SectionLocator>>> = Mutex::new(None);

/// Returns the body of the section introduced by `header`.
///
/// The header must start a line (leading spaces and tabs are tolerated) and
/// be followed by a colon or a line break. Matching is case-insensitive and
/// the first occurrence wins. The body stops before the nearest following
/// line that starts with one of `stop_headers` (minus `header` itself) in
/// the same colon-or-newline form. The returned slice is trimmed; it is empty
/// when the header does not occur.
///
/// Patterns come from a shared [`SectionLocator`] for `stop_headers`, so
/// repeated calls with the same table do not recompile them.
///
/// # Example
///
/// ```rust
/// use rs_resume_parser::{section, Options};
///
/// let text = "Skills:\nPython\nEducation:\nBS, MIT, 2020";
/// let opts = Options::default();
/// assert_eq!(section::locate(text, "Skills", &opts.stop_headers), "Python");
/// assert_eq!(section::locate(text, "Projects", &opts.stop_headers), "");
/// ```
#[must_use]
pub fn locate<'a>(text: &'a str, header: &str, stop_headers: &[String]) -> &'a str {
    locator_for(stop_headers).locate(text, header)
}

fn locator_for(stop_headers: &[String]) -> Arc<SectionLocator> {
    if DEFAULT_LOCATOR.stop_headers == stop_headers {
        return Arc::clone(&*DEFAULT_LOCATOR);
    }

    let mut cached = CUSTOM_LOCATOR.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(locator) = cached.as_ref().filter(|l| l.stop_headers == stop_headers) {
        return Arc::clone(locator);
    }

    debug!(stop_headers = stop_headers.len(), "compiling section patterns");
    let locator = Arc::new(SectionLocator::new(stop_headers));
    *cached = Some(Arc::clone(&locator));
    locator
}

/// Compiled header and stop patterns for one stop-header table.
///
/// # Example
///
/// ```rust
/// use rs_resume_parser::section::SectionLocator;
///
/// let locator = SectionLocator::new(&["Skills".to_string(), "Hobbies".to_string()]);
/// assert_eq!(locator.locate("Skills:\nRust\nHobbies:\nChess", "Skills"), "Rust");
/// ```
#[derive(Debug)]
pub struct SectionLocator {
    stop_headers: Vec<String>,
    sections: Vec<(String, SectionPatterns)>,
}

impl SectionLocator {
    /// Compiles patterns for the extracted headers and every stop header.
    #[must_use]
    pub fn new(stop_headers: &[String]) -> Self {
        let mut headers: Vec<String> =
            LOCATED_HEADERS.iter().map(|h| (*h).to_string()).collect();
        for header in stop_headers {
            if !headers.iter().any(|h| h.eq_ignore_ascii_case(header)) {
                headers.push(header.clone());
            }
        }

        let sections = headers
            .into_iter()
            .filter_map(|header| {
                let patterns = SectionPatterns::compile(&header, stop_headers)?;
                Some((header, patterns))
            })
            .collect();

        Self {
            stop_headers: stop_headers.to_vec(),
            sections,
        }
    }

    /// Stop headers this locator was built for.
    #[must_use]
    pub fn stop_headers(&self) -> &[String] {
        &self.stop_headers
    }

    /// Same contract as [`locate`]. Headers outside the precompiled set are
    /// compiled on the spot.
    #[must_use]
    pub fn locate<'a>(&self, text: &'a str, header: &str) -> &'a str {
        if let Some((_, patterns)) = self
            .sections
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(header))
        {
            return patterns.locate(text);
        }

        SectionPatterns::compile(header, &self.stop_headers).map_or("", |p| p.locate(text))
    }
}

#[derive(Debug)]
struct SectionPatterns {
    header: Regex,
    stop: Option<Regex>,
}

impl SectionPatterns {
    fn compile(header: &str, stop_headers: &[String]) -> Option<Self> {
        let header_re = build(&format!(
            r"(?im)^[ \t]*{}[ \t\r]*[:\n]",
            regex::escape(header)
        ))?;

        let stops: Vec<String> = stop_headers
            .iter()
            .filter(|h| !h.eq_ignore_ascii_case(header))
            .map(|h| regex::escape(h))
            .collect();
        let stop = if stops.is_empty() {
            None
        } else {
            build(&format!(
                r"(?im)^[ \t]*(?:{})[ \t\r]*[:\n]",
                stops.join("|")
            ))
        };

        Some(Self {
            header: header_re,
            stop,
        })
    }

    fn locate<'a>(&self, text: &'a str) -> &'a str {
        let Some(found) = self.header.find(text) else {
            return "";
        };
        let body = &text[found.end()..];

        match self.stop.as_ref().and_then(|re| re.find(body)) {
            Some(stop) => body[..stop.start()].trim(),
            None => body.trim(),
        }
    }
}

fn build(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            warn!(%err, "section header pattern rejected");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn stops() -> Vec<String> {
        Options::default().stop_headers
    }

    #[test]
    fn section_stops_at_next_known_header() {
        let text = "Skills:\nPython\nEducation:\nBS, MIT, 2020";
        assert_eq!(locate(text, "Skills", &stops()), "Python");
        assert_eq!(locate(text, "Education", &stops()), "BS, MIT, 2020");
    }

    #[test]
    fn header_without_colon_is_recognized() {
        let text = "Skills\nRust, Go\n\nProjects\nParser";
        assert_eq!(locate(text, "Skills", &stops()), "Rust, Go");
        assert_eq!(locate(text, "Projects", &stops()), "Parser");
    }

    #[test]
    fn header_match_is_case_insensitive() {
        let text = "SKILLS:\nRust\nEDUCATION:\nBSc";
        assert_eq!(locate(text, "Skills", &stops()), "Rust");
    }

    #[test]
    fn inline_body_after_colon() {
        let text = "Languages: English, French\nSkills: Rust";
        assert_eq!(locate(text, "Languages", &stops()), "English, French");
    }

    #[test]
    fn missing_header_yields_empty() {
        assert_eq!(locate("nothing here", "Skills", &stops()), "");
        assert_eq!(locate("", "Skills", &stops()), "");
    }

    #[test]
    fn first_occurrence_wins() {
        let text = "Projects:\nOne\nSkills:\nRust\nProjects:\nTwo";
        assert_eq!(locate(text, "Projects", &stops()), "One");
    }

    #[test]
    fn header_must_start_a_line() {
        let text = "I list my Skills: below\nSkills:\nRust";
        assert_eq!(locate(text, "Skills", &stops()), "Rust");
    }

    #[test]
    fn experience_does_not_stop_work_experience() {
        let text = "Work Experience:\nEngineer at Acme\nPrior experience: none\nEducation:\nBSc";
        assert_eq!(
            locate(text, "Work Experience", &stops()),
            "Engineer at Acme\nPrior experience: none"
        );
    }

    #[test]
    fn empty_section_directly_followed_by_header() {
        let text = "Skills\nEducation\nBS, MIT, 2020";
        assert_eq!(locate(text, "Skills", &stops()), "");
    }

    #[test]
    fn crlf_line_endings() {
        let text = "Skills\r\nRust\r\nEducation\r\nBSc";
        assert_eq!(locate(text, "Skills", &stops()), "Rust");
    }

    #[test]
    fn default_table_shares_one_locator() {
        let first = locator_for(&stops());
        let second = locator_for(&stops());
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &*DEFAULT_LOCATOR));
    }

    #[test]
    fn extracted_headers_are_precompiled() {
        let locator = SectionLocator::new(&stops());
        for header in LOCATED_HEADERS.iter().chain(DEFAULT_STOP_HEADERS) {
            assert!(
                locator
                    .sections
                    .iter()
                    .any(|(known, _)| known.eq_ignore_ascii_case(header)),
                "{header} not precompiled"
            );
        }
        assert_eq!(locator.stop_headers(), stops().as_slice());
    }

    #[test]
    fn header_outside_table_still_located() {
        let locator = SectionLocator::new(&stops());
        let text = "Hobbies:\nChess\nSkills:\nRust";
        assert_eq!(locator.locate(text, "Hobbies"), "Chess");
    }

    #[test]
    fn custom_table_gives_same_result_on_repeat() {
        let custom = vec!["Skills".to_string(), "Publications".to_string()];
        let text = "Skills:\nRust\nPublications:\nPaper";
        assert_eq!(locate(text, "Skills", &custom), "Rust");
        assert_eq!(locate(text, "Skills", &custom), "Rust");
        assert_eq!(locate(text, "Publications", &custom), "Paper");
    }

    #[test]
    fn no_stop_headers_runs_to_end() {
        let text = "Summary:\nShips things.\nSkills:\nRust";
        assert_eq!(locate(text, "Summary", &[]), "Ships things.\nSkills:\nRust");
    }
}
