// src/tests/router_tests/subject_tests.rs

use super::{body_string, get};
use crate::errors::ServerError;
use crate::tests::utils::{context, seeded_catalog, FakeCatalog};

#[test]
fn subject_page_lists_courses_in_id_order() {
    let ctx = context(seeded_catalog());

    let mut resp = get(&ctx, "/subject?school=UA&subject=CSCI").unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Computer Science"));
    assert!(body.contains("CAS"));
    assert!(body.contains("2 Sections"));

    let intro = body.find("Intro to Computer Science").unwrap();
    let systems = body.find("Computer Systems").unwrap();
    assert!(intro < systems, "course 101 should be listed before 202");
    assert!(body.contains("courseid=101"));
}

#[test]
fn explicit_term_overrides_defaults() {
    let ctx = context(seeded_catalog());

    // Only 2020/fa is seeded.
    let mut resp = get(&ctx, "/subject?school=UA&subject=CSCI&year=2021&semester=sp").unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("No data"));
}

#[test]
fn offline_catalog_renders_placeholder() {
    let ctx = context(FakeCatalog {
        offline: true,
        ..seeded_catalog()
    });

    let mut resp = get(&ctx, "/subject?school=UA&subject=CSCI").unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(&mut resp).contains("No data"));
}

#[test]
fn missing_subject_is_bad_request() {
    let ctx = context(seeded_catalog());

    let result = get(&ctx, "/subject?school=UA");
    assert!(matches!(result, Err(ServerError::BadRequest(_))));

    let result = get(&ctx, "/subject?school=UA&subject=CSCI&year=soon");
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn unknown_route_is_not_found() {
    let ctx = context(seeded_catalog());
    assert!(matches!(get(&ctx, "/wishlist"), Err(ServerError::NotFound)));
}
