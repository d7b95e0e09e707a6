// templates/pages/empty.rs

use crate::templates::{desktop_layout, placeholder};
use maud::Markup;

pub fn loading_page() -> Markup {
    desktop_layout("Loading", placeholder("Loading...", "", None))
}

pub fn not_found_page(back_link: &str) -> Markup {
    desktop_layout(
        "Course not found",
        placeholder(
            "Course not found",
            "This course is not offered for the selected term.",
            Some(back_link),
        ),
    )
}

pub fn unavailable_page() -> Markup {
    desktop_layout(
        "No data",
        placeholder(
            "No data",
            "The catalog has nothing for these parameters right now.",
            Some("/"),
        ),
    )
}
