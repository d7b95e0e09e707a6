// errors.rs
use thiserror::Error;

/// Errors surfaced by the HTTP layer. Catalog failures never end up here:
/// they are absorbed by page state and rendered as placeholders.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}
