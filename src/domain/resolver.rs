// src/domain/resolver.rs

use crate::catalog::Course;
use std::cmp::Ordering;

/// Picks the course a detail page asked for out of a subject's full listing.
/// The first match in listing order wins; `None` means not found.
pub fn resolve<'a>(courses: &'a [Course], course_id: &str) -> Option<&'a Course> {
    let course_id = course_id.trim();
    courses.iter().find(|c| c.dept_course_id == course_id)
}

/// Listing order: numeric when both ids are numbers, lexical otherwise, with
/// numeric ids ahead of non-numeric ones.
pub fn compare_course_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
