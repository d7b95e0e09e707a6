// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Root of the scheduling API, e.g. "https://schedge.a1liu.com".
    pub base_url: String,
    /// Per-request timeout. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://schedge.a1liu.com".to_string(),
            timeout: None,
        }
    }
}

/// Term shown when a page URL does not name one.
#[derive(Debug, Clone, PartialEq)]
pub struct TermDefaults {
    pub year: i32,
    pub semester: String,
}

impl Default for TermDefaults {
    fn default() -> Self {
        Self {
            year: 2020,
            semester: "fa".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub catalog: CatalogConfig,
    pub term: TermDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            catalog: CatalogConfig::default(),
            term: TermDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `BIND_ADDR`, `MAX_WORKERS`, `CATALOG_BASE_URL`,
    /// `CATALOG_TIMEOUT_SECS`, `CATALOG_YEAR` and `CATALOG_SEMESTER`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(addr) = lookup("BIND_ADDR") {
            cfg.bind_addr = parse_var("BIND_ADDR", &addr)?;
        }
        if let Some(workers) = lookup("MAX_WORKERS") {
            cfg.max_workers = parse_var("MAX_WORKERS", &workers)?;
        }
        if let Some(base) = lookup("CATALOG_BASE_URL") {
            cfg.catalog.base_url = base.trim().to_string();
        }
        if let Some(secs) = lookup("CATALOG_TIMEOUT_SECS") {
            let secs: u64 = parse_var("CATALOG_TIMEOUT_SECS", &secs)?;
            cfg.catalog.timeout = Some(Duration::from_secs(secs));
        }
        if let Some(year) = lookup("CATALOG_YEAR") {
            cfg.term.year = parse_var("CATALOG_YEAR", &year)?;
        }
        if let Some(semester) = lookup("CATALOG_SEMESTER") {
            let semester = semester.trim();
            if semester.is_empty() {
                return Err(ConfigError::Invalid {
                    var: "CATALOG_SEMESTER",
                    value: semester.to_string(),
                });
            }
            cfg.term.semester = semester.to_string();
        }

        Ok(cfg)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
    })
}
