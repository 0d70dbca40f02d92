//! HTTP access to the scenic routing service
//!
//! Runs one search end to end: build the URL, fetch it, validate the payload
//! and normalize every route. The first failing stage ends the search.

use std::time::Duration;

use log::{debug, warn};
use once_cell::sync::Lazy;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder};
use url::Url;

use crate::core::error::{Error, Result};
use crate::core::metrics::{normalize_all, NormalizedRoute};
use crate::core::query::{ClientConfig, SearchQuery};
use crate::core::route::RouteOption;
use crate::core::validate::validate_body;

/// Shared HTTP client, reused across searches
static GLOBAL_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .pool_idle_timeout(Duration::from_secs(90))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(format!("scenariq/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// Client for the route listing endpoint
#[derive(Debug, Clone, Default)]
pub struct RoutesClient {
    config: ClientConfig,
}

impl RoutesClient {
    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL a search for `query` would request
    pub fn request_url(&self, query: &SearchQuery) -> Result<Url> {
        self.config.request_url(query)
    }

    /// Fetch and validate the raw route records for `query`
    pub async fn fetch_routes(&self, query: &SearchQuery) -> Result<Vec<RouteOption>> {
        let url = self.request_url(query)?;
        debug!("Requesting scenic routes from {url}");

        let response = GLOBAL_CLIENT
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-store")
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {url} failed: {e}");
                Error::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Routing service answered {status} for {url}");
            return Err(Error::UpstreamUnavailable(format!(
                "routing service returned {status}"
            )));
        }

        let body = response.bytes().await?;
        let routes = validate_body(&body)?;
        debug!("Routing service returned {} route(s)", routes.len());
        Ok(routes)
    }

    /// Run a full search and return display-ready routes
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<NormalizedRoute>> {
        let routes = self.fetch_routes(query).await?;
        Ok(normalize_all(routes))
    }
}
