// client.rs
use crate::catalog::models::{Course, SchoolDirectory, SubjectDirectory};
use crate::catalog::query::TermQuery;
use crate::catalog::CatalogError;
use crate::config::CatalogConfig;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("course_catalog/", env!("CARGO_PKG_VERSION"));

/// Everything the pages need from the catalog service.
///
/// `Sync` because the listing page fans its three fetches out over threads.
pub trait CatalogSource: Send + Sync {
    /// `/{year}/{semester}/{school}/{subject}`
    fn course_listing(&self, term: &TermQuery) -> Result<Vec<Course>, CatalogError>;
    /// Same listing with full section and meeting detail.
    fn course_listing_full(&self, term: &TermQuery) -> Result<Vec<Course>, CatalogError>;
    fn schools(&self) -> Result<SchoolDirectory, CatalogError>;
    fn subjects(&self) -> Result<SubjectDirectory, CatalogError>;
}

pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    pub fn new(cfg: &CatalogConfig) -> Result<Self, CatalogError> {
        let base_url =
            Url::parse(&cfg.base_url).map_err(|e| CatalogError::Url(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::Url(format!("{} cannot be a base", cfg.base_url)));
        }

        // `None` disables reqwest's default 30s timeout.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::Url(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn term_endpoint(&self, term: &TermQuery) -> Result<Url, CatalogError> {
        let year = term.year.to_string();
        self.endpoint(&[&year, &term.semester, &term.school, &term.subject])
    }

    /// One GET, no retries. Non-2xx means the catalog has nothing for
    /// these parameters.
    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogError> {
        debug!(%url, "fetching catalog data");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            debug!(%url, %status, "catalog returned non-success status");
            return Err(CatalogError::InvalidParameters {
                status: status.as_u16(),
            });
        }

        resp.json::<T>()
            .map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

impl CatalogSource for CatalogClient {
    fn course_listing(&self, term: &TermQuery) -> Result<Vec<Course>, CatalogError> {
        let url = self.term_endpoint(term)?;
        self.get_json(url)
    }

    fn course_listing_full(&self, term: &TermQuery) -> Result<Vec<Course>, CatalogError> {
        let mut url = self.term_endpoint(term)?;
        url.query_pairs_mut().append_pair("full", "true");
        self.get_json(url)
    }

    fn schools(&self) -> Result<SchoolDirectory, CatalogError> {
        let url = self.endpoint(&["schools"])?;
        self.get_json(url)
    }

    fn subjects(&self) -> Result<SubjectDirectory, CatalogError> {
        let url = self.endpoint(&["subjects"])?;
        self.get_json(url)
    }
}
