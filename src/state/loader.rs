use crate::catalog::{CatalogSource, CourseQuery, TermQuery};
use crate::state::{CoursePage, SubjectPage};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;

fn lock<T>(page: &Mutex<T>) -> MutexGuard<'_, T> {
    page.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Issues the listing page's three fetches concurrently. Each result is
/// written back under the token it was issued with, in whatever order they
/// finish.
pub fn load_subject_page(source: &dyn CatalogSource, page: &Mutex<SubjectPage>, query: TermQuery) {
    let token = lock(page).begin(query);
    let token = &token;

    thread::scope(|s| {
        s.spawn(move || {
            let outcome = source.course_listing(token.params());
            lock(page).complete_courses(token, outcome);
        });
        s.spawn(move || {
            let outcome = source.schools();
            lock(page).complete_schools(token, outcome);
        });
        s.spawn(move || {
            let outcome = source.subjects();
            lock(page).complete_subjects(token, outcome);
        });
    });
}

pub fn load_course_page(source: &dyn CatalogSource, page: &Mutex<CoursePage>, query: CourseQuery) {
    let token = lock(page).begin(query);
    let outcome = source.course_listing_full(&token.params().term);
    lock(page).complete(&token, outcome);
}
