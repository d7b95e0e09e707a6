pub mod names;
pub mod notes;
pub mod resolver;
pub mod schedule;
pub mod status;
pub mod view;

pub use resolver::resolve;
pub use view::{assemble_course, assemble_listing, CourseView, SubjectListingView};
