pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{html_error_response, placeholder, status_badge};
pub use layouts::desktop::desktop_layout;
