// templates/pages/subject.rs

use crate::domain::view::{CourseSummary, SubjectListingView};
use crate::templates::{desktop_layout, status_badge};
use maud::{html, Markup};

pub fn subject_page(vm: &SubjectListingView) -> Markup {
    let title = vm.subject_name.as_deref().unwrap_or(&vm.subject);

    desktop_layout(
        title,
        html! {
            header class="department-header" {
                div class="school-name" title=(vm.school) { (vm.school_name) }
                div class="department-name" {
                    (vm.subject_name.as_deref().unwrap_or(""))
                }
            }
            main class="course-container" {
                @for course in &vm.courses {
                    (course_card(course))
                }
            }
        },
    )
}

fn course_card(course: &CourseSummary) -> Markup {
    html! {
        a class="course-link" href=(course.link) {
            div class="course" {
                div style="display: flex; justify-content: space-between;" {
                    h4 { (course.department) " " (course.dept_course_id) }
                    (status_badge(&course.status))
                }
                h3 { (course.name) }
                p { (course.section_count) " Sections" }
            }
        }
    }
}
