// src/tests/utils.rs
use crate::catalog::models::{NamedEntry, SubjectCode};
use crate::catalog::{
    CatalogError, CatalogSource, Course, Meeting, SchoolDirectory, Section, SubjectDirectory,
    TermQuery,
};
use crate::config::TermDefaults;
use crate::router::AppContext;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory catalog. Unknown terms and missing directories answer like the
/// real service does for bad parameters (HTTP 404).
#[derive(Default)]
pub struct FakeCatalog {
    pub listings: HashMap<TermQuery, Vec<Course>>,
    pub schools: Option<SchoolDirectory>,
    pub subjects: Option<SubjectDirectory>,
    pub offline: bool,
    pub calls: AtomicUsize,
}

impl FakeCatalog {
    fn check(&self) -> Result<(), CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.offline {
            return Err(CatalogError::Network("connection refused".into()));
        }
        Ok(())
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

fn not_found() -> CatalogError {
    CatalogError::InvalidParameters { status: 404 }
}

impl CatalogSource for FakeCatalog {
    fn course_listing(&self, term: &TermQuery) -> Result<Vec<Course>, CatalogError> {
        self.check()?;
        self.listings.get(term).cloned().ok_or_else(not_found)
    }

    fn course_listing_full(&self, term: &TermQuery) -> Result<Vec<Course>, CatalogError> {
        self.course_listing(term)
    }

    fn schools(&self) -> Result<SchoolDirectory, CatalogError> {
        self.check()?;
        self.schools.clone().ok_or_else(not_found)
    }

    fn subjects(&self) -> Result<SubjectDirectory, CatalogError> {
        self.check()?;
        self.subjects.clone().ok_or_else(not_found)
    }
}

pub fn term() -> TermQuery {
    TermQuery::new(2020, "fa", "UA", "CSCI")
}

pub fn section(status: &str, notes: Option<&str>) -> Section {
    Section {
        code: Some("001".to_string()),
        status: Some(status.to_string()),
        notes: notes.map(str::to_string),
        meetings: Some(vec![Meeting {
            begin_date: Some("2020-09-08 09:30:00".to_string()),
            minutes_duration: Some(75),
        }]),
        ..Section::default()
    }
}

pub fn course(id: &str, name: &str, sections: Vec<Section>) -> Course {
    Course {
        name: name.to_string(),
        dept_course_id: id.to_string(),
        description: Some(format!("About {name}.")),
        subject_code: Some(SubjectCode {
            code: "CSCI".to_string(),
            school: "UA".to_string(),
        }),
        sections,
    }
}

/// Subject listing with courses "101" and "202"; 101 has an open and a
/// closed section sharing the note "TBA".
pub fn seeded_catalog() -> FakeCatalog {
    let listing = vec![
        course("202", "Computer Systems", vec![section("Closed", None)]),
        course(
            "101",
            "Intro to Computer Science",
            vec![section("Open", Some("TBA")), section("Closed", Some("TBA"))],
        ),
    ];

    let mut schools = SchoolDirectory::new();
    schools.insert(
        "UA".to_string(),
        NamedEntry {
            name: Some("CAS".to_string()),
        },
    );

    let mut subjects = SubjectDirectory::new();
    subjects.entry("UA".to_string()).or_default().insert(
        "CSCI".to_string(),
        NamedEntry {
            name: Some("Computer Science".to_string()),
        },
    );

    FakeCatalog {
        listings: HashMap::from([(term(), listing)]),
        schools: Some(schools),
        subjects: Some(subjects),
        ..FakeCatalog::default()
    }
}

pub fn context(catalog: FakeCatalog) -> AppContext {
    AppContext::new(Arc::new(catalog), TermDefaults::default())
}
