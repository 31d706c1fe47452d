//! Compiled regex patterns for resume extraction.
//!
//! All patterns are compiled once on first use via `LazyLock`.
//! Patterns are organized by the extractor that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Contact Patterns
// =============================================================================

/// Matches an email address (`local@domain.tld`, tld of 2-4 word chars).
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[\w.-]+@[\w.-]+\.\w{2,4}\b").expect("EMAIL regex")
});

/// North-American phone number shapes, in priority order.
///
/// The first pattern with any match in the text wins, even if a later
/// pattern would match earlier in the text.
pub static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // (555) 123-4567
        r"(\+?1[-.\s]?)?\(([0-9]{3})\)[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})",
        // 555-123-4567, 555.123.4567, 555 123 4567
        r"(\+?1[-.\s]?)?([0-9]{3})[-.\s]([0-9]{3})[-.\s]([0-9]{4})",
        r"(\+?1[-.\s]?)?([0-9]{3})\.([0-9]{3})\.([0-9]{4})",
        r"(\+?1[-.\s]?)?([0-9]{3})\s([0-9]{3})\s([0-9]{4})",
        // 5551234567
        r"(\+?1[-.\s]?)?([0-9]{10})",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("PHONE_PATTERNS regex"))
    .collect()
});

/// Matches a LinkedIn profile URL with optional scheme and `www.`.
pub static LINKEDIN_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(https?://)?(www\.)?linkedin\.com/\S+").expect("LINKEDIN_URL regex")
});

/// Matches the scheme and `www.` prefix stripped from LinkedIn URLs.
pub static URL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://)?(www\.)?").expect("URL_PREFIX regex"));

/// Matches a Title Case line of two or more words, e.g. "Mary Jane Doe".
pub static NAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-z]+( [A-Z][a-z]+)+$").expect("NAME_LINE regex")
});

// =============================================================================
// List Patterns
// =============================================================================

/// Delimiters between items in skills and languages sections.
pub static LIST_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[•,\n]").expect("LIST_DELIMITER regex"));

// =============================================================================
// Education Patterns
// =============================================================================

/// Matches `<degree>, <university>, <year>[ - <year>|Present]`.
pub static EDUCATION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(.+?),\s*(.+?),\s*(\d{4})(?:\s*[-–—]\s*(\d{4}|Present))?")
        .expect("EDUCATION_LINE regex")
});

// =============================================================================
// Work Experience Patterns
// =============================================================================

/// Matches a company label, e.g. `Employer: `.
pub static COMPANY_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Company|Employer|Organization):\s*").expect("COMPANY_LABEL regex")
});

/// Matches a position label, e.g. `Job Title: `.
pub static POSITION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Position|Title|Role|Job Title):\s*").expect("POSITION_LABEL regex")
});

/// Matches a duration label, e.g. `Dates: `.
pub static DURATION_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:Duration|Dates|Period|Timeline):\s*").expect("DURATION_LABEL regex")
});

/// Matches any work experience field label.
pub static ANY_FIELD_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:Company|Employer|Organization|Position|Title|Role|Job Title|Duration|Dates|Period|Timeline):",
    )
    .expect("ANY_FIELD_LABEL regex")
});

/// Matches a blank line (possibly holding whitespace) between job blocks.
pub static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("BLANK_LINE regex"));

/// Matches a dash-like separator with surrounding whitespace.
pub static DASH_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*[-–—]\s*").expect("DASH_SEPARATOR regex"));

/// Matches `Company (duration)` at the start of a string.
pub static PARENTHESIZED_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s*\(([^)]+)\)").expect("PARENTHESIZED_DURATION regex")
});

// =============================================================================
// Internship Patterns
// =============================================================================

/// Matches "Intern at ...", "Internship at ..." or "... Intern".
pub static INTERNSHIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(Intern(?:ship)? at .+|.+ Intern\b)").expect("INTERNSHIP regex")
});
