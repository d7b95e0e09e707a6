// templates/pages/course.rs

use crate::domain::view::{CourseView, MeetingView, SectionView};
use crate::templates::{desktop_layout, status_badge};
use maud::{html, Markup};

pub fn course_page(vm: &CourseView) -> Markup {
    desktop_layout(
        &vm.name,
        html! {
            header class="course-header" {
                a href=(vm.back_link) id="backButton" { "Go back" }
                div {
                    div id="titleDepartment" { (vm.department) " " (vm.dept_course_id) }
                    div id="titleName" { (vm.name) }
                    (status_badge(&vm.status))
                }
            }

            // Notes shared by every section are shown once, after the description.
            div class="sections-description" {
                @if let Some(description) = &vm.description {
                    (description)
                }
                @if let Some(note) = &vm.notes.shared {
                    br;
                    br;
                    (note)
                }
            }

            @if vm.show_sections_header {
                h2 class="sections-header" { "Sections" }
            }
            div {
                @for section in &vm.sections {
                    (section_block(section, !vm.notes.collapse))
                }
            }
        },
    )
}

fn section_block(section: &SectionView, show_notes: bool) -> Markup {
    html! {
        div.section.last-section[section.last] {
            div class="section-title" {
                @if let Some(code) = &section.code {
                    span class="section-code" { "Section " (code) }
                }
                @if let Some(kind) = &section.section_type {
                    span class="section-type" { " " (kind) }
                }
                " "
                (status_badge(&section.status))
            }
            @if let Some(number) = &section.registration_number {
                div class="registration-number" { "Registration #" (number) }
            }
            @if !section.instructors.is_empty() {
                div class="instructors" { (section.instructors.join(", ")) }
            }
            @if let Some(total) = section.waitlist_total {
                div class="waitlist" { (total) " on waitlist" }
            }
            @if show_notes {
                @if let Some(notes) = &section.notes {
                    p class="section-notes" { (notes) }
                }
            }
            ul class="meetings" {
                @for meeting in &section.meetings {
                    li { (meeting_line(meeting)) }
                }
            }
        }
    }
}

fn meeting_line(meeting: &MeetingView) -> String {
    let day = meeting.day.unwrap_or("TBA");
    match (&meeting.begins, &meeting.ends) {
        (Some(begins), Some(ends)) => format!("{day} {begins} - {ends}"),
        (Some(begins), None) => format!("{day} {begins}"),
        _ => day.to_string(),
    }
}
