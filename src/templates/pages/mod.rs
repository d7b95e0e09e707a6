pub mod course;
pub mod empty;
pub mod subject;

pub use course::course_page;
pub use empty::{loading_page, not_found_page, unavailable_page};
pub use subject::subject_page;
