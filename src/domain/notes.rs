// src/domain/notes.rs

use crate::catalog::Section;

/// Whether every section carries the same notes as the first one (two absent
/// notes count as equal). Trivially true when there are no sections.
pub fn should_collapse(sections: &[Section]) -> bool {
    match sections.split_first() {
        Some((first, rest)) => rest.iter().all(|s| s.notes == first.notes),
        None => true,
    }
}

/// The note to show once under the course description, if any.
pub fn shared_note(sections: &[Section]) -> Option<&str> {
    if !should_collapse(sections) {
        return None;
    }
    sections.first().and_then(|s| s.notes.as_deref())
}
