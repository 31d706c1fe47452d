//! Record assembly.
//!
//! Runs every extractor over the full text and keeps only the fields that
//! produced a value. Line endings are normalized to `\n` first.

use std::borrow::Cow;

use tracing::debug;

use crate::extractor::{
    detect_internships, extract_address, extract_certifications, extract_education,
    extract_email, extract_languages, extract_linkedin, extract_name, extract_phone,
    extract_projects, extract_skills, extract_summary, extract_work_experience,
};
use crate::options::Options;
use crate::result::{non_empty_list, ResumeRecord};

/// Main entry point for record extraction.
pub(crate) fn extract_record(text: &str, options: &Options) -> ResumeRecord {
    debug!(chars = text.len(), "starting resume extraction");
    let normalized = normalize_line_endings(text);
    let text = normalized.as_ref();

    let record = ResumeRecord {
        name: extract_name(text, options),
        email: extract_email(text),
        phone: extract_phone(text),
        linkedin: extract_linkedin(text),
        summary: extract_summary(text, options),
        address: extract_address(text, options),
        skills: non_empty_list(extract_skills(text, options)),
        work_experience: non_empty_list(extract_work_experience(text, options)),
        education: non_empty_list(extract_education(text, options)),
        certifications: non_empty_list(extract_certifications(text, options)),
        languages: non_empty_list(extract_languages(text, options)),
        projects: non_empty_list(extract_projects(text, options)),
        internships: non_empty_list(detect_internships(text)),
    };

    debug!(
        name = record.name.is_some(),
        email = record.email.is_some(),
        phone = record.phone.is_some(),
        skills = record.skills.as_ref().map_or(0, Vec::len),
        jobs = record.work_experience.as_ref().map_or(0, Vec::len),
        schools = record.education.as_ref().map_or(0, Vec::len),
        "extraction summary"
    );

    record
}

/// Rewrites `\r\n` and lone `\r` as `\n`.
fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "John Smith
john.smith@example.com | (555) 123-4567
https://www.linkedin.com/in/johnsmith
42 Elm Street, Springfield

Summary:
Backend engineer who likes parsers.

Skills:
Rust, Python, Rust

Work Experience:
Engineer at Acme - 2019-2021
- Built systems

Education:
BS Computer Science, MIT, 2018-2022
";

    #[test]
    fn assembles_all_found_fields() {
        let record = extract_record(RESUME, &Options::default());
        assert_eq!(record.name.as_deref(), Some("John Smith"));
        assert_eq!(record.email.as_deref(), Some("john.smith@example.com"));
        assert_eq!(record.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(record.linkedin.as_deref(), Some("linkedin.com/in/johnsmith"));
        assert_eq!(record.address.as_deref(), Some("42 Elm Street, Springfield"));
        assert_eq!(record.summary.as_deref(), Some("Backend engineer who likes parsers."));
        assert_eq!(record.skills, Some(vec!["Rust".to_string(), "Python".to_string()]));
        assert_eq!(record.work_experience.as_ref().map(Vec::len), Some(1));
        assert_eq!(record.education.as_ref().map(Vec::len), Some(1));
        assert_eq!(record.certifications, None);
        assert_eq!(record.internships, None);
    }

    #[test]
    fn crlf_text_leaves_no_carriage_returns() {
        let text = "Summary:\r\nLine one\r\nLine two\r\nSkills:\r\nRust\r\nIntern at Google\r\n";
        let record = extract_record(text, &Options::default());
        assert_eq!(record.summary.as_deref(), Some("Line one\nLine two"));
        assert_eq!(record.internships, Some(vec!["Intern at Google".to_string()]));
        assert_eq!(
            record.skills,
            Some(vec!["Rust".to_string(), "Intern at Google".to_string()])
        );
    }

    #[test]
    fn line_endings() {
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed("a\nb")));
        assert_eq!(normalize_line_endings("a\r\nb\rc"), "a\nb\nc");
    }

    #[test]
    fn empty_text_yields_empty_record() {
        assert!(extract_record("", &Options::default()).is_empty());
    }
}
