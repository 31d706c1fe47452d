//! Internship detection over the whole text.

use std::collections::HashSet;

use crate::patterns::INTERNSHIP;

/// Finds "Intern at ..." and "... Intern" mentions anywhere in the text.
///
/// Not section-scoped. Duplicates are removed; the result keeps first-seen
/// document order.
#[must_use]
pub fn detect_internships(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    INTERNSHIP
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|found| seen.insert(*found))
        .map(str::to_string)
        .collect()
}
