mod catalog_error;
mod client;
pub mod models;
mod query;

pub use catalog_error::CatalogError;
pub use client::{CatalogClient, CatalogSource};
pub use models::{Course, Meeting, SchoolDirectory, Section, SubjectDirectory};
pub use query::{CourseQuery, TermQuery};
