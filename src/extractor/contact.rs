//! Contact detail extraction: email, phone, LinkedIn and address.
//!
//! Each extractor returns `None` when nothing matches.

use crate::options::{contains_any_ci, Options};
use crate::patterns::{EMAIL, LINKEDIN_URL, PHONE_PATTERNS, URL_PREFIX};

/// Returns the first email address in the text.
#[must_use]
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// Returns the first phone number in the text.
///
/// Patterns are tried in priority order; the first pattern that matches
/// anywhere decides the result.
#[must_use]
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_PATTERNS
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().trim().to_string())
}

/// Returns the first LinkedIn URL, normalized to `linkedin.com/<path>`.
#[must_use]
pub fn extract_linkedin(text: &str) -> Option<String> {
    let url = LINKEDIN_URL.find(text)?.as_str();
    Some(URL_PREFIX.replace(url, "").trim().to_string())
}

/// Joins address-like lines from the top of the resume with ", ".
///
/// Only the first `options.address_scan_lines` lines are considered, since
/// the address conventionally sits in the contact block.
#[must_use]
pub fn extract_address(text: &str, options: &Options) -> Option<String> {
    let parts: Vec<&str> = text
        .split('\n')
        .take(options.address_scan_lines)
        .filter(|line| contains_any_ci(line, &options.address_keywords))
        .map(str::trim)
        .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_first_match() {
        let text = "Reach me: jane.doe@example.com or jd@work.io";
        assert_eq!(extract_email(text).as_deref(), Some("jane.doe@example.com"));
        assert_eq!(extract_email("no address here"), None);
    }

    #[test]
    fn phone_parenthesized_area_code() {
        let text = "Phone: (555) 123-4567";
        assert_eq!(extract_phone(text).as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn phone_with_country_code() {
        let text = "Mobile +1 555-123-4567";
        assert_eq!(extract_phone(text).as_deref(), Some("+1 555-123-4567"));
    }

    #[test]
    fn phone_dot_separated() {
        assert_eq!(extract_phone("Tel: 555.123.4567").as_deref(), Some("555.123.4567"));
        assert_eq!(
            extract_phone("Tel: +1.555.123.4567").as_deref(),
            Some("+1.555.123.4567")
        );
    }

    #[test]
    fn phone_space_separated() {
        assert_eq!(extract_phone("Cell 555 123 4567").as_deref(), Some("555 123 4567"));
        assert_eq!(
            extract_phone("Cell +1 555 123 4567").as_deref(),
            Some("+1 555 123 4567")
        );
    }

    #[test]
    fn phone_country_code_with_parenthesized_area_code() {
        assert_eq!(
            extract_phone("+1 (555) 123-4567").as_deref(),
            Some("+1 (555) 123-4567")
        );
    }

    #[test]
    fn phone_bare_ten_digits() {
        assert_eq!(extract_phone("tel 5551234567").as_deref(), Some("5551234567"));
    }

    #[test]
    fn phone_pattern_priority_beats_position() {
        // The dashed number appears first, but the parenthesized pattern has
        // higher priority.
        let text = "Fax 555-000-1111\nPhone (555) 123-4567";
        assert_eq!(extract_phone(text).as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn phone_absent() {
        assert_eq!(extract_phone("Call me maybe"), None);
    }

    #[test]
    fn linkedin_strips_scheme_and_www() {
        let text = "Profile: https://www.linkedin.com/in/janedoe and more";
        assert_eq!(extract_linkedin(text).as_deref(), Some("linkedin.com/in/janedoe"));
        assert_eq!(
            extract_linkedin("linkedin.com/in/jd").as_deref(),
            Some("linkedin.com/in/jd")
        );
        assert_eq!(extract_linkedin("github.com/jd"), None);
    }

    #[test]
    fn address_joins_matching_lines() {
        let text = "Jane Doe\n12 Baker Street\nSpringfield City, State 12345\njane@x.com";
        assert_eq!(
            extract_address(text, &Options::default()).as_deref(),
            Some("12 Baker Street, Springfield City, State 12345")
        );
    }

    #[test]
    fn address_only_scans_contact_block() {
        let mut text = "Jane Doe\n".repeat(10);
        text.push_str("1 Main Street");
        assert_eq!(extract_address(&text, &Options::default()), None);

        let opts = Options {
            address_scan_lines: 11,
            ..Options::default()
        };
        assert_eq!(extract_address(&text, &opts).as_deref(), Some("1 Main Street"));
    }
}
