//! Configuration options for resume extraction.
//!
//! The `Options` struct carries every static table the heuristics consult:
//! section headers, keyword lists and blacklists. Extractors borrow these
//! tables; nothing is mutated during a parse.

/// Section headers used to bound a section when locating a different one.
pub const DEFAULT_STOP_HEADERS: &[&str] = &[
    "Skills",
    "Work Experience",
    "Experience",
    "Education",
    "Certifications",
    "Projects",
    "Languages",
    "Internships",
    "Summary",
];

/// Lines containing any of these are never taken as the candidate's name.
pub const DEFAULT_NAME_SKIP_KEYWORDS: &[&str] = &[
    "email",
    "phone",
    "linkedin",
    "skills",
    "experience",
    "education",
    "summary",
    "objective",
    "address",
    "contact",
];

/// Lines in the contact block containing any of these are address parts.
pub const DEFAULT_ADDRESS_KEYWORDS: &[&str] =
    &["street", "ave", "road", "zip", "city", "state", "district"];

/// Skill tokens containing any of these are mis-segmented address text.
pub const DEFAULT_SKILLS_BLACKLIST: &[&str] = &["street", "road", "city", "state", "india", "usa"];

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| (*s).to_string()).collect()
}

/// Configuration options for resume extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_resume_parser::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Recognize an extra section header
/// let mut stop_headers = options.stop_headers.clone();
/// stop_headers.push("Publications".to_string());
/// let options = Options {
///     stop_headers,
///     ..Options::default()
/// };
/// assert!(options.stop_headers.iter().any(|h| h == "Publications"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Headers that end a section. The header being located is removed from
    /// this set (case-insensitively) before use.
    ///
    /// Default: [`DEFAULT_STOP_HEADERS`]
    pub stop_headers: Vec<String>,

    /// Case-insensitive substrings that disqualify a line as the name line.
    ///
    /// Default: [`DEFAULT_NAME_SKIP_KEYWORDS`]
    pub name_skip_keywords: Vec<String>,

    /// Case-insensitive substrings that mark a contact-block line as part of
    /// the postal address.
    ///
    /// Default: [`DEFAULT_ADDRESS_KEYWORDS`]
    pub address_keywords: Vec<String>,

    /// Number of leading lines scanned for address parts.
    ///
    /// Default: `10`
    pub address_scan_lines: usize,

    /// Case-insensitive substrings that drop a token from the skills list.
    ///
    /// Default: [`DEFAULT_SKILLS_BLACKLIST`]
    pub skills_blacklist: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            stop_headers: owned(DEFAULT_STOP_HEADERS),
            name_skip_keywords: owned(DEFAULT_NAME_SKIP_KEYWORDS),
            address_keywords: owned(DEFAULT_ADDRESS_KEYWORDS),
            address_scan_lines: 10,
            skills_blacklist: owned(DEFAULT_SKILLS_BLACKLIST),
        }
    }
}

/// True when `haystack` contains any of `needles`, ignoring case.
pub(crate) fn contains_any_ci(haystack: &str, needles: &[String]) -> bool {
    let lower = haystack.to_lowercase();
    needles
        .iter()
        .any(|needle| lower.contains(needle.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let opts = Options::default();

        assert_eq!(opts.stop_headers.len(), 9);
        assert_eq!(opts.stop_headers[1], "Work Experience");
        assert!(opts.name_skip_keywords.iter().any(|k| k == "objective"));
        assert_eq!(opts.address_keywords.len(), 7);
        assert_eq!(opts.address_scan_lines, 10);
        assert_eq!(
            opts.skills_blacklist,
            vec!["street", "road", "city", "state", "india", "usa"]
        );
    }

    #[test]
    fn test_custom_tables() {
        let opts = Options {
            address_scan_lines: 3,
            skills_blacklist: vec!["germany".to_string()],
            ..Options::default()
        };

        assert_eq!(opts.address_scan_lines, 3);
        assert_eq!(opts.skills_blacklist.len(), 1);
        assert_eq!(opts.stop_headers, Options::default().stop_headers);
    }

    #[test]
    fn test_contains_any_ci() {
        let needles = vec!["City".to_string(), "road".to_string()];
        assert!(contains_any_ci("New York CITY", &needles));
        assert!(contains_any_ci("12 Abbey Road", &needles));
        assert!(!contains_any_ci("Rust", &needles));
        assert!(!contains_any_ci("anything", &[]));
    }
}
