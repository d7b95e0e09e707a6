use crate::catalog::{CatalogError, Course, SchoolDirectory, SubjectDirectory, TermQuery};
use crate::domain::{assemble_listing, SubjectListingView};
use crate::state::{Load, PageView, RequestToken, Tracker};
use tracing::debug;

/// Listing page: course listing, school directory and subject directory load
/// independently and the page is ready once all three have settled.
#[derive(Debug, Default)]
pub struct SubjectPage {
    tracker: Tracker<TermQuery>,
    courses: Load<Vec<Course>>,
    schools: Load<SchoolDirectory>,
    subjects: Load<SubjectDirectory>,
}

impl SubjectPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the page to new parameters. Results for earlier tokens are
    /// ignored from here on.
    pub fn begin(&mut self, query: TermQuery) -> RequestToken<TermQuery> {
        self.courses = Load::Loading;
        self.schools = Load::Loading;
        self.subjects = Load::Loading;
        self.tracker.begin(query)
    }

    fn accept(&self, token: &RequestToken<TermQuery>, what: &'static str) -> bool {
        let current = self.tracker.is_current(token);
        if !current {
            debug!(what, query = ?token.params(), "discarding stale response");
        }
        current
    }

    pub fn complete_courses(
        &mut self,
        token: &RequestToken<TermQuery>,
        outcome: Result<Vec<Course>, CatalogError>,
    ) -> bool {
        if !self.accept(token, "courses") {
            return false;
        }
        self.courses.settle("courses", outcome);
        true
    }

    pub fn complete_schools(
        &mut self,
        token: &RequestToken<TermQuery>,
        outcome: Result<SchoolDirectory, CatalogError>,
    ) -> bool {
        if !self.accept(token, "schools") {
            return false;
        }
        self.schools.settle("schools", outcome);
        true
    }

    pub fn complete_subjects(
        &mut self,
        token: &RequestToken<TermQuery>,
        outcome: Result<SubjectDirectory, CatalogError>,
    ) -> bool {
        if !self.accept(token, "subjects") {
            return false;
        }
        self.subjects.settle("subjects", outcome);
        true
    }

    pub fn is_ready(&self) -> bool {
        self.tracker.current().is_some()
            && !(self.courses.is_loading()
                || self.schools.is_loading()
                || self.subjects.is_loading())
    }

    /// Missing directories only cost the pretty names; a missing course
    /// listing makes the page unavailable.
    pub fn view(&self) -> PageView<SubjectListingView> {
        let Some(query) = self.tracker.current() else {
            return PageView::Loading;
        };
        if !self.is_ready() {
            return PageView::Loading;
        }

        match &self.courses {
            Load::Ready(courses) => PageView::Ready(assemble_listing(
                query,
                courses,
                self.schools.ready(),
                self.subjects.ready(),
            )),
            _ => PageView::Unavailable,
        }
    }
}
