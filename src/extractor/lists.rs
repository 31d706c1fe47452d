//! List extractors: skills, certifications, languages and projects.
//!
//! Each one locates its section and splits the body on a format-specific
//! delimiter set. A missing or empty section yields an empty list.

use std::collections::HashSet;

use crate::options::{contains_any_ci, Options};
use crate::patterns::LIST_DELIMITER;
use crate::section;

/// Splits the "Skills" section on `•`, commas and newlines.
///
/// Tokens containing a term from `options.skills_blacklist` are dropped, as
/// they are usually address text that leaked into the section. Duplicates
/// are removed keeping the first occurrence.
#[must_use]
pub fn extract_skills(text: &str, options: &Options) -> Vec<String> {
    let raw = section::locate(text, "Skills", &options.stop_headers);
    let mut seen = HashSet::new();

    split_items(raw)
        .filter(|item| !contains_any_ci(item, &options.skills_blacklist))
        .filter(|item| seen.insert(*item))
        .map(str::to_string)
        .collect()
}

/// One certification per line of the "Certifications" section.
#[must_use]
pub fn extract_certifications(text: &str, options: &Options) -> Vec<String> {
    bulleted_lines(section::locate(text, "Certifications", &options.stop_headers))
}

/// Splits the "Languages" section on commas, newlines and `•`.
#[must_use]
pub fn extract_languages(text: &str, options: &Options) -> Vec<String> {
    split_items(section::locate(text, "Languages", &options.stop_headers))
        .map(str::to_string)
        .collect()
}

/// One project per line of the "Projects" section.
#[must_use]
pub fn extract_projects(text: &str, options: &Options) -> Vec<String> {
    bulleted_lines(section::locate(text, "Projects", &options.stop_headers))
}

fn split_items(raw: &str) -> impl Iterator<Item = &str> {
    LIST_DELIMITER
        .split(raw)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

fn bulleted_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim_matches(|c: char| c.is_whitespace() || c == '–' || c == '•'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
