// src/tests/router_tests/course_tests.rs

use super::{body_string, get};
use crate::errors::ServerError;
use crate::tests::utils::{context, seeded_catalog};

#[test]
fn course_page_shows_shared_note_once() {
    let ctx = context(seeded_catalog());

    let mut resp = get(&ctx, "/course?school=UA&subject=CSCI&courseid=101").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Intro to Computer Science"));
    assert!(body.contains("CSCI-UA 101"));
    assert!(body.contains("Sections"));
    assert_eq!(body.matches("TBA").count(), 1);
    assert!(body.contains("Tue 09:30 - 10:45"));
}

#[test]
fn unknown_course_renders_not_found_placeholder() {
    let ctx = context(seeded_catalog());

    let mut resp = get(&ctx, "/course?school=UA&subject=CSCI&courseid=999").unwrap();
    assert_eq!(resp.status(), 404);

    let body = body_string(&mut resp);
    assert!(body.contains("Course not found"));
    assert!(body.contains("/subject?school=UA&amp;subject=CSCI"));
}

#[test]
fn course_id_is_required() {
    let ctx = context(seeded_catalog());

    let result = get(&ctx, "/course?school=UA&subject=CSCI");
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}
