//! Candidate name extraction.

use crate::options::{contains_any_ci, Options};
use crate::patterns::NAME_LINE;

/// Returns the first Title Case line of two or more words.
///
/// Lines are scanned top to bottom. Blank lines and lines mentioning any of
/// `options.name_skip_keywords` (contact details, section headers) are
/// skipped.
#[must_use]
pub fn extract_name(text: &str, options: &Options) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !contains_any_ci(line, &options.name_skip_keywords))
        .find(|line| NAME_LINE.is_match(line))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(text: &str) -> Option<String> {
        extract_name(text, &Options::default())
    }

    #[test]
    fn first_title_case_line_wins() {
        let text = "\n  John Smith  \nMary Jane Doe\n";
        assert_eq!(name(text).as_deref(), Some("John Smith"));
    }

    #[test]
    fn skips_contact_and_header_lines() {
        let text = "Contact Information\nEmail Address\nMary Jane Doe\nSoftware Engineer";
        assert_eq!(name(text).as_deref(), Some("Mary Jane Doe"));
    }

    #[test]
    fn single_words_and_caps_are_not_names() {
        assert_eq!(name("RESUME\nJohn\njohn smith"), None);
    }

    #[test]
    fn empty_text_has_no_name() {
        assert_eq!(name(""), None);
    }
}
