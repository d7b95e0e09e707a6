use thiserror::Error;

/// Failures reported by a catalog source. None of these are fatal: page
/// state turns them into an empty placeholder.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Catalog rejected the query (HTTP {status})")]
    InvalidParameters { status: u16 },
    #[error("JSON decode error: {0}")]
    Decode(String),
    #[error("Bad catalog URL: {0}")]
    Url(String),
}

impl CatalogError {
    /// Transport-level failures get logged; rejected queries just mean "no data".
    pub fn is_network(&self) -> bool {
        matches!(self, CatalogError::Network(_) | CatalogError::Decode(_))
    }
}
