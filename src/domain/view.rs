// src/domain/view.rs

use crate::catalog::{
    Course, CourseQuery, Meeting, SchoolDirectory, Section, SubjectDirectory, TermQuery,
};
use crate::domain::names::{school_display_name, subject_display_name};
use crate::domain::notes::{shared_note, should_collapse};
use crate::domain::resolver::compare_course_ids;
use crate::domain::schedule::{normalize, weekday_bucket};
use crate::domain::status::{aggregate, StatusKind};

const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Status kind bundled with its presentation tokens so templates never
/// re-derive them.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub kind: StatusKind,
    pub label: &'static str,
    pub color: &'static str,
}

impl From<StatusKind> for StatusView {
    fn from(kind: StatusKind) -> Self {
        Self {
            kind,
            label: kind.label(),
            color: kind.color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotesView {
    pub collapse: bool,
    /// Rendered once after the course description.
    pub shared: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeetingView {
    pub day: Option<&'static str>,
    /// "09:30", or `None` when the timestamp could not be read.
    pub begins: Option<String>,
    pub ends: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub code: Option<String>,
    pub registration_number: Option<String>,
    pub section_type: Option<String>,
    pub instructors: Vec<String>,
    pub status: StatusView,
    pub waitlist_total: Option<i64>,
    pub notes: Option<String>,
    pub meetings: Vec<MeetingView>,
    pub last: bool,
}

/// Everything the course detail page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseView {
    pub school: String,
    pub subject: String,
    /// "CSCI-UA"
    pub department: String,
    pub dept_course_id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: StatusView,
    pub notes: NotesView,
    pub show_sections_header: bool,
    pub sections: Vec<SectionView>,
    pub back_link: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub department: String,
    pub dept_course_id: String,
    pub name: String,
    pub status: StatusView,
    pub section_count: usize,
    pub link: String,
}

/// Everything the subject listing page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectListingView {
    pub school: String,
    pub school_name: String,
    pub subject: String,
    pub subject_name: Option<String>,
    pub courses: Vec<CourseSummary>,
}

fn meeting_view(meeting: &Meeting) -> MeetingView {
    let bucket = weekday_bucket(meeting) as usize;
    MeetingView {
        day: DAY_LABELS.get(bucket).copied(),
        begins: meeting.begin().map(|t| t.format("%H:%M").to_string()),
        ends: meeting.end().map(|t| t.format("%H:%M").to_string()),
    }
}

fn section_view(section: &Section, last: bool) -> SectionView {
    SectionView {
        code: section.code.clone(),
        registration_number: section.registration_number.clone(),
        section_type: section.section_type.clone(),
        instructors: section.instructors.clone(),
        status: StatusKind::of_section(section).into(),
        waitlist_total: section.waitlist_total,
        notes: section.notes.clone(),
        meetings: normalize(section.meetings.as_deref())
            .iter()
            .map(meeting_view)
            .collect(),
        last,
    }
}

/// The school/subject a course belongs to, falling back to the page query
/// when the record has no `subjectCode`.
fn course_codes<'a>(course: &'a Course, term: &'a TermQuery) -> (&'a str, &'a str) {
    match &course.subject_code {
        Some(sc) if !sc.code.is_empty() && !sc.school.is_empty() => {
            (sc.school.as_str(), sc.code.as_str())
        }
        _ => (term.school.as_str(), term.subject.as_str()),
    }
}

pub fn assemble_course(query: &CourseQuery, course: &Course) -> CourseView {
    let (school, subject) = course_codes(course, &query.term);
    let count = course.sections.len();

    CourseView {
        school: school.to_string(),
        subject: subject.to_string(),
        department: format!("{subject}-{school}"),
        dept_course_id: course.dept_course_id.clone(),
        name: course.name.clone(),
        description: course.description.clone(),
        status: aggregate(&course.sections).into(),
        notes: NotesView {
            collapse: should_collapse(&course.sections),
            shared: shared_note(&course.sections).map(str::to_string),
        },
        show_sections_header: count > 1,
        sections: course
            .sections
            .iter()
            .enumerate()
            .map(|(i, s)| section_view(s, i + 1 == count))
            .collect(),
        back_link: query.term.subject_link(),
    }
}

pub fn assemble_listing(
    query: &TermQuery,
    courses: &[Course],
    schools: Option<&SchoolDirectory>,
    subjects: Option<&SubjectDirectory>,
) -> SubjectListingView {
    let mut ordered: Vec<&Course> = courses.iter().collect();
    ordered.sort_by(|a, b| compare_course_ids(&a.dept_course_id, &b.dept_course_id));

    let courses = ordered
        .into_iter()
        .map(|course| {
            let (school, subject) = course_codes(course, query);
            let mut term = query.clone();
            term.school = school.to_string();
            term.subject = subject.to_string();

            CourseSummary {
                department: format!("{subject}-{school}"),
                dept_course_id: course.dept_course_id.clone(),
                name: course.name.clone(),
                status: aggregate(&course.sections).into(),
                section_count: course.sections.len(),
                link: term.course(course.dept_course_id.clone()).course_link(),
            }
        })
        .collect();

    SubjectListingView {
        school: query.school.clone(),
        school_name: school_display_name(schools, &query.school),
        subject: query.subject.clone(),
        subject_name: subject_display_name(subjects, &query.school, &query.subject),
        courses,
    }
}
