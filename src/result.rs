//! Result types for extraction output.
//!
//! This module defines the structured record produced from resume text.
//! Every optional field is omitted from serialized output when absent.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One job parsed from the work experience section.
///
/// An entry only exists when at least one of `company` or `position` was
/// found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperienceEntry {
    /// Employer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Free-form date range, e.g. "2019-2021" or "Jan 2020 - Present".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// Bullet points and other description lines, in block order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
}

impl fmt::Display for WorkExperienceEntry {
    /// Formats the entry as a heading, e.g. `Engineer at Acme`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}",
            self.position.as_deref().unwrap_or("N/A"),
            self.company.as_deref().unwrap_or("N/A")
        )
    }
}

/// One line of the education section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Degree or course of study, e.g. "BS Computer Science".
    pub degree: String,

    /// Institution name.
    pub university: String,

    /// `"YYYY"`, `"YYYY-YYYY"`, `"YYYY-Present"`, free text from a
    /// comma-split line, or empty.
    pub years: String,
}

/// Structured record extracted from one resume.
///
/// A field is `Some` only when its extractor produced a non-empty value, so
/// serialized records never carry nulls or empty strings/lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Candidate name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// First email address found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First phone number found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// LinkedIn profile URL without scheme or `www.`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    /// Summary or objective section text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Address lines from the contact block, joined with ", ".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experience: Option<Vec<WorkExperienceEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<EducationEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,

    /// Internship mentions found anywhere in the text, first-seen order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internships: Option<Vec<String>>,
}

impl ResumeRecord {
    /// True when no field was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// `Some(value)` unless the string is empty.
pub(crate) fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// `Some(items)` unless the list is empty.
pub(crate) fn non_empty_list<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
