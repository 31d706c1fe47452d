//! Education section parsing.

use tracing::debug;

use crate::options::Options;
use crate::patterns::EDUCATION_LINE;
use crate::result::EducationEntry;
use crate::section;

/// Parses each line of the "Education" section into an entry.
///
/// A line is first matched against `<degree>, <university>, <year>[-<year>]`;
/// failing that, it is split on commas and kept when it has at least two
/// parts (degree, university, optional years). Other lines are dropped.
#[must_use]
pub fn extract_education(text: &str, options: &Options) -> Vec<EducationEntry> {
    let block = section::locate(text, "Education", &options.stop_headers);

    let entries: Vec<EducationEntry> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| parse_structured(line).or_else(|| parse_comma_split(line)))
        .collect();

    debug!(entries = entries.len(), "parsed education section");
    entries
}

fn parse_structured(line: &str) -> Option<EducationEntry> {
    let caps = EDUCATION_LINE.captures(line)?;

    let mut years = caps[3].trim().to_string();
    if let Some(end) = caps.get(4) {
        years.push('-');
        years.push_str(end.as_str().trim());
    }

    Some(EducationEntry {
        degree: caps[1].trim().to_string(),
        university: caps[2].trim().to_string(),
        years,
    })
}

fn parse_comma_split(line: &str) -> Option<EducationEntry> {
    let parts: Vec<&str> = line
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [degree, university, rest @ ..] => Some(EducationEntry {
            degree: (*degree).to_string(),
            university: (*university).to_string(),
            years: rest.first().map(|y| (*y).to_string()).unwrap_or_default(),
        }),
        _ => None,
    }
}
