//! Work experience parsing.
//!
//! The experience section is split on blank lines into one block per job.
//! Within a block, explicit labels (`Company:`, `Title:`, `Dates:` ...) are
//! authoritative. When company or position is still missing, the block's
//! first line is run through an ordered list of inference rules, and the
//! first rule that applies fills the gaps. Remaining lines become the
//! description.
//!
//! The description catch-all is permissive: any unlabeled line after the
//! first that is not one of the extracted field values is kept, so stray
//! text from a mis-split block ends up there. Output is best-effort.

use tracing::{debug, trace};

use crate::options::Options;
use crate::patterns::{
    ANY_FIELD_LABEL, BLANK_LINE, COMPANY_LABEL, DASH_SEPARATOR, DURATION_LABEL,
    PARENTHESIZED_DURATION, POSITION_LABEL,
};
use crate::result::{non_empty, WorkExperienceEntry};
use crate::section;

/// Separators between position, company and duration on a single line,
/// in priority order.
const FIELD_SEPARATORS: &[&str] = &[" | ", " - ", " – ", " — "];

/// Spaced dashes that mark a duration after the company name.
const DURATION_DASHES: &[&str] = &[" - ", " – ", " — "];

/// Fields derived from an unlabeled first line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InferredFields {
    /// Job title, the text before ` at ` or the first separator.
    pub position: Option<String>,

    /// Employer name.
    pub company: Option<String>,

    /// Date range after a spaced dash, inside parentheses, or in the third
    /// separated part.
    pub duration: Option<String>,
}

/// A first-line inference rule. Returns `None` when the rule does not apply.
pub type InferenceRule = fn(&str) -> Option<InferredFields>;

/// Inference rules in priority order; the first rule that applies wins.
pub const INFERENCE_RULES: &[(&str, InferenceRule)] = &[
    ("at-clause", infer_from_at_clause),
    ("separator", infer_from_separator),
];

/// Parses the "Work Experience" section (or "Experience" when absent) into
/// one entry per blank-line-separated block.
///
/// Blocks yielding neither a company nor a position are dropped.
#[must_use]
pub fn extract_work_experience(text: &str, options: &Options) -> Vec<WorkExperienceEntry> {
    let mut block = section::locate(text, "Work Experience", &options.stop_headers);
    if block.is_empty() {
        block = section::locate(text, "Experience", &options.stop_headers);
    }
    if block.is_empty() {
        return Vec::new();
    }

    let entries: Vec<WorkExperienceEntry> =
        BLANK_LINE.split(block).filter_map(parse_block).collect();

    debug!(entries = entries.len(), "parsed work experience section");
    entries
}

/// Parses one job block. Returns `None` when neither company nor position
/// could be found.
#[must_use]
pub fn parse_block(block: &str) -> Option<WorkExperienceEntry> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let first_line = lines.first()?;

    let mut entry = WorkExperienceEntry::default();
    for line in &lines {
        if let Some(value) = strip_label(&COMPANY_LABEL, line) {
            entry.company = non_empty(value);
        } else if let Some(value) = strip_label(&POSITION_LABEL, line) {
            entry.position = non_empty(value);
        } else if let Some(value) = strip_label(&DURATION_LABEL, line) {
            entry.duration = non_empty(value);
        }
    }

    if entry.company.is_none() || entry.position.is_none() {
        apply_inference(&mut entry, first_line);
    }

    if entry.company.is_none() && entry.position.is_none() {
        trace!(first_line, "dropping block without company or position");
        return None;
    }

    let description = collect_description(&lines, &entry);
    if !description.is_empty() {
        entry.description = Some(description);
    }

    Some(entry)
}

fn strip_label(label: &regex::Regex, line: &str) -> Option<String> {
    label
        .find(line)
        .map(|m| line[m.end()..].trim().to_string())
}

/// Runs the inference rules against `first_line`. Inferred values never
/// replace fields that are already set.
fn apply_inference(entry: &mut WorkExperienceEntry, first_line: &str) {
    let Some((rule, inferred)) = INFERENCE_RULES
        .iter()
        .find_map(|(name, rule)| rule(first_line).map(|inferred| (*name, inferred)))
    else {
        return;
    };

    trace!(rule, first_line, ?inferred, "inferred work experience fields");
    entry.position = entry.position.take().or(inferred.position);
    entry.company = entry.company.take().or(inferred.company);
    entry.duration = entry.duration.take().or(inferred.duration);
}

/// `"<position> at <company>[ - <duration>| (<duration>)]"`.
#[must_use]
pub fn infer_from_at_clause(line: &str) -> Option<InferredFields> {
    let (position, rest) = line.split_once(" at ")?;
    let rest = rest.trim();

    let mut inferred = InferredFields {
        position: non_empty(position.trim().to_string()),
        ..InferredFields::default()
    };

    if DURATION_DASHES.iter().any(|dash| rest.contains(dash)) {
        let mut parts = DASH_SEPARATOR.splitn(rest, 2);
        inferred.company = parts.next().and_then(|c| non_empty(c.trim().to_string()));
        inferred.duration = parts.next().and_then(|d| non_empty(d.trim().to_string()));
    } else if rest.contains('(') && rest.contains(')') {
        if let Some(caps) = PARENTHESIZED_DURATION.captures(rest) {
            inferred.company = non_empty(caps[1].trim().to_string());
            inferred.duration = non_empty(caps[2].trim().to_string());
        }
    } else {
        inferred.company = non_empty(rest.to_string());
    }

    Some(inferred)
}

/// `"<position> | <company>[ | <duration>]"`, or the same with a spaced dash.
///
/// The first separator present in the line is used for every split.
#[must_use]
pub fn infer_from_separator(line: &str) -> Option<InferredFields> {
    let separator = FIELD_SEPARATORS.iter().find(|sep| line.contains(*sep))?;
    let parts: Vec<&str> = line.split(separator).map(str::trim).collect();

    Some(InferredFields {
        position: parts.first().and_then(|p| non_empty((*p).to_string())),
        company: parts.get(1).and_then(|c| non_empty((*c).to_string())),
        duration: parts.get(2).and_then(|d| non_empty((*d).to_string())),
    })
}

/// Bullet lines anywhere in the block, plus any other unlabeled line after
/// the first that does not repeat an extracted field. Items of two
/// characters or fewer are dropped.
fn collect_description(lines: &[&str], entry: &WorkExperienceEntry) -> Vec<String> {
    let used: Vec<&str> = [&entry.company, &entry.position, &entry.duration]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .collect();

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !ANY_FIELD_LABEL.is_match(line))
        .filter_map(|(idx, line)| {
            if line.starts_with('-') || line.starts_with('•') {
                Some(line.trim_start_matches(['-', '•', ' ']).trim())
            } else if idx > 0 && !used.contains(line) {
                Some(*line)
            } else {
                None
            }
        })
        .filter(|item| item.chars().count() > 2)
        .map(str::to_string)
        .collect()
}
