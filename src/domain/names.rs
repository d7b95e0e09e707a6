// src/domain/names.rs

use crate::catalog::{SchoolDirectory, SubjectDirectory};

/// Used when the remote school directory has no entry for a code.
const SCHOOL_FALLBACKS: &[(&str, &str)] = &[
    ("UA", "College of Arts and Science"),
    ("UB", "Leonard N. Stern School of Business"),
    ("UE", "Steinhardt School of Culture, Education, and Human Development"),
    ("UG", "Gallatin School of Individualized Study"),
    ("UT", "Tisch School of the Arts"),
    ("UY", "Tandon School of Engineering"),
    ("GA", "Graduate School of Arts and Science"),
    ("GY", "Tandon School of Engineering (Graduate)"),
];

pub fn fallback_school_name(code: &str) -> Option<&'static str> {
    SCHOOL_FALLBACKS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Directory name, then the static table, then the code itself. Never empty
/// unless the code is.
pub fn school_display_name(directory: Option<&SchoolDirectory>, code: &str) -> String {
    let remote = directory
        .and_then(|d| d.get(code))
        .and_then(|entry| entry.name.as_deref())
        .filter(|name| !name.trim().is_empty());

    remote
        .or_else(|| fallback_school_name(code))
        .unwrap_or(code)
        .to_string()
}

pub fn subject_display_name(
    directory: Option<&SubjectDirectory>,
    school: &str,
    subject: &str,
) -> Option<String> {
    directory?
        .get(school)?
        .get(subject)?
        .name
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
}
