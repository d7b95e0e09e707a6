//! Per-page view state fed by catalog fetches.
//!
//! Every fetch is issued under a [`RequestToken`] carrying the parameter
//! snapshot it was made for. A page only accepts completions whose token is
//! still current, so a slow response for old parameters can never overwrite
//! state that belongs to newer ones.

mod course_page;
mod loader;
mod subject_page;

pub use course_page::CoursePage;
pub use loader::{load_course_page, load_subject_page};
pub use subject_page::SubjectPage;

use crate::catalog::CatalogError;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestToken<P> {
    params: P,
    generation: u64,
}

impl<P> RequestToken<P> {
    pub fn params(&self) -> &P {
        &self.params
    }
}

/// Hands out tokens and remembers which one is current.
#[derive(Debug)]
pub struct Tracker<P> {
    current: Option<P>,
    generation: u64,
}

impl<P> Default for Tracker<P> {
    fn default() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }
}

impl<P: Clone + PartialEq> Tracker<P> {
    pub fn begin(&mut self, params: P) -> RequestToken<P> {
        self.generation += 1;
        self.current = Some(params.clone());
        RequestToken {
            params,
            generation: self.generation,
        }
    }

    pub fn is_current(&self, token: &RequestToken<P>) -> bool {
        token.generation == self.generation && self.current.as_ref() == Some(&token.params)
    }

    pub fn current(&self) -> Option<&P> {
        self.current.as_ref()
    }
}

/// One independently loading piece of page data.
#[derive(Debug, Default)]
pub enum Load<T> {
    #[default]
    Loading,
    Ready(T),
    /// The fetch failed or the catalog had nothing for the parameters. The
    /// error itself is logged when the slot settles.
    Unavailable,
}

impl<T> Load<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Load::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Load::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Stores a fetch outcome. Transport failures are logged; a rejected
    /// query quietly becomes an empty slot.
    fn settle(&mut self, what: &'static str, outcome: Result<T, CatalogError>) {
        *self = match outcome {
            Ok(value) => Load::Ready(value),
            Err(err) => {
                if err.is_network() {
                    warn!(what, error = %err, "catalog fetch failed");
                } else {
                    debug!(what, error = %err, "no catalog data");
                }
                Load::Unavailable
            }
        };
    }
}

/// What a page can currently show.
#[derive(Debug, Clone, PartialEq)]
pub enum PageView<V> {
    Loading,
    Ready(V),
    NotFound,
    Unavailable,
}
