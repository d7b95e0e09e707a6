use crate::catalog::{CatalogError, Course, CourseQuery};
use crate::domain::{assemble_course, resolve, CourseView};
use crate::state::{Load, PageView, RequestToken, Tracker};
use tracing::debug;

/// Detail page: one full-listing fetch per parameter change, narrowed to the
/// requested course as soon as it arrives.
#[derive(Debug, Default)]
pub struct CoursePage {
    tracker: Tracker<CourseQuery>,
    course: Load<Option<Course>>,
}

impl CoursePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, query: CourseQuery) -> RequestToken<CourseQuery> {
        self.course = Load::Loading;
        self.tracker.begin(query)
    }

    pub fn complete(
        &mut self,
        token: &RequestToken<CourseQuery>,
        outcome: Result<Vec<Course>, CatalogError>,
    ) -> bool {
        if !self.tracker.is_current(token) {
            debug!(query = ?token.params(), "discarding stale response");
            return false;
        }

        let course_id = &token.params().course_id;
        let resolved = outcome.map(|listing| resolve(&listing, course_id).cloned());
        self.course.settle("course", resolved);
        true
    }

    pub fn view(&self) -> PageView<CourseView> {
        let Some(query) = self.tracker.current() else {
            return PageView::Loading;
        };

        match &self.course {
            Load::Loading => PageView::Loading,
            Load::Ready(Some(course)) => PageView::Ready(assemble_course(query, course)),
            Load::Ready(None) => PageView::NotFound,
            Load::Unavailable => PageView::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::TermQuery;

    fn listing() -> Vec<Course> {
        ["101", "202"]
            .iter()
            .map(|id| Course {
                name: format!("Course {id}"),
                dept_course_id: id.to_string(),
                description: None,
                subject_code: None,
                sections: Vec::new(),
            })
            .collect()
    }

    fn query(id: &str) -> CourseQuery {
        TermQuery::new(2020, "fa", "UA", "CSCI").course(id)
    }

    #[test]
    fn loading_is_distinct_from_not_found() {
        let mut page = CoursePage::new();
        let token = page.begin(query("999"));
        assert_eq!(page.view(), PageView::Loading);

        page.complete(&token, Ok(listing()));
        assert_eq!(page.view(), PageView::NotFound);
    }

    #[test]
    fn resolves_requested_course() {
        let mut page = CoursePage::new();
        let token = page.begin(query("202"));
        page.complete(&token, Ok(listing()));

        let PageView::Ready(view) = page.view() else {
            panic!("expected a course view");
        };
        assert_eq!(view.name, "Course 202");
    }

    #[test]
    fn stale_detail_response_is_ignored() {
        let mut page = CoursePage::new();
        let old = page.begin(query("101"));
        let new = page.begin(query("202"));

        assert!(page.complete(&new, Ok(listing())));
        assert!(!page.complete(&old, Err(CatalogError::Network("timed out".into()))));

        assert!(matches!(page.view(), PageView::Ready(v) if v.dept_course_id == "202"));
    }

    #[test]
    fn rejected_query_is_unavailable() {
        let mut page = CoursePage::new();
        let token = page.begin(query("101"));
        page.complete(&token, Err(CatalogError::InvalidParameters { status: 400 }));

        assert_eq!(page.view(), PageView::Unavailable);
    }
}
