use url::form_urlencoded;

/// The parameter tuple every subject-level fetch is keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TermQuery {
    pub year: i32,
    pub semester: String,
    pub school: String,
    pub subject: String,
}

/// A subject query narrowed to one course, as used by the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseQuery {
    pub term: TermQuery,
    pub course_id: String,
}

impl TermQuery {
    pub fn new(
        year: i32,
        semester: impl Into<String>,
        school: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            year,
            semester: semester.into(),
            school: school.into(),
            subject: subject.into(),
        }
    }

    pub fn course(&self, course_id: impl Into<String>) -> CourseQuery {
        CourseQuery {
            term: self.clone(),
            course_id: course_id.into(),
        }
    }

    /// Relative link to the listing page for this subject.
    pub fn subject_link(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("school", &self.school)
            .append_pair("subject", &self.subject)
            .append_pair("year", &self.year.to_string())
            .append_pair("semester", &self.semester)
            .finish();
        format!("/subject?{query}")
    }
}

impl CourseQuery {
    pub fn course_link(&self) -> String {
        let term = &self.term;
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("school", &term.school)
            .append_pair("subject", &term.subject)
            .append_pair("courseid", &self.course_id)
            .append_pair("year", &term.year.to_string())
            .append_pair("semester", &term.semester)
            .finish();
        format!("/course?{query}")
    }
}
