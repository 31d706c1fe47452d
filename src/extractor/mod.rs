//! Field extractors.
//!
//! Every extractor is a pure function of the resume text (plus the static
//! tables in [`Options`](crate::Options)) and reports "not found" as `None`
//! or an empty list, never as an error.
//!
//! # Module Structure
//!
//! - `name`: candidate name from the first Title Case line
//! - `contact`: email, phone, LinkedIn URL and postal address
//! - `summary`: summary or objective section
//! - `lists`: skills, certifications, languages and projects
//! - `education`: education entries
//! - `experience`: work experience entries (labels, then first-line inference)
//! - `internships`: internship mentions anywhere in the text
//!
//! # Usage
//!
//! ```rust
//! use rs_resume_parser::extractor::{extract_email, extract_skills};
//! use rs_resume_parser::Options;
//!
//! let text = "Jane Doe\njane@example.com\nSkills: Rust, Go";
//! assert_eq!(extract_email(text).as_deref(), Some("jane@example.com"));
//! assert_eq!(extract_skills(text, &Options::default()), vec!["Rust", "Go"]);
//! ```

pub mod contact;
pub mod education;
pub mod experience;
pub mod internships;
pub mod lists;
pub mod name;
pub mod summary;

pub use contact::{extract_address, extract_email, extract_linkedin, extract_phone};
pub use education::extract_education;
pub use experience::extract_work_experience;
pub use internships::detect_internships;
pub use lists::{extract_certifications, extract_languages, extract_projects, extract_skills};
pub use name::extract_name;
pub use summary::extract_summary;
