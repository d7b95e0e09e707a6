use crate::domain::view::StatusView;
use maud::{html, Markup};

pub mod error;

pub use error::html_error_response;

/// Course or section status painted with its color token.
pub fn status_badge(status: &StatusView) -> Markup {
    html! {
        span
            class={ "status status-" (status.color) }
            style={ "color: " (status.color) ";" }
            data-priority=(status.kind.severity())
        {
            (status.label)
        }
    }
}

/// Empty-state box used for loading, missing and unavailable data.
pub fn placeholder(title: &str, message: &str, back_link: Option<&str>) -> Markup {
    html! {
        div class="placeholder" {
            h2 { (title) }
            p { (message) }
            @if let Some(href) = back_link {
                a href=(href) { "Go back" }
            }
        }
    }
}
