use crate::catalog::CatalogClient;
use crate::config::AppConfig;
use crate::router::{handle, AppContext};
use astra::Server;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let catalog = match CatalogClient::new(&cfg.catalog) {
        Ok(client) => client,
        Err(e) => {
            error!("Catalog client init failed: {e}");
            std::process::exit(1);
        }
    };

    let ctx = AppContext::new(Arc::new(catalog), cfg.term.clone());

    info!(addr = %cfg.bind_addr, catalog = %cfg.catalog.base_url, "starting server");

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
