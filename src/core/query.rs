//! Request construction for the scenariq client
//!
//! Turns a base URL and an optional start/end pair into the routing service URL.

use std::env;
use std::time::Duration;

use url::Url;

use crate::core::error::{Error, Result};

/// Environment variable overriding the routing service base URL
pub const BASE_URL_ENV: &str = "SCENARIQ_API_BASE_URL";

/// Base URL used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path of the route listing endpoint
pub const ROUTES_PATH: &str = "/api/routes";

/// A start/end pair as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl SearchQuery {
    /// Build a query, treating empty strings as absent
    pub fn new(start: &str, end: &str) -> Self {
        Self {
            start: non_empty(start),
            end: non_empty(end),
        }
    }

    /// Query parameters in the order they are sent
    fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::with_capacity(2);
        if let Some(start) = self.start.as_deref().filter(|s| !s.is_empty()) {
            params.push(("start", start));
        }
        if let Some(end) = self.end.as_deref().filter(|s| !s.is_empty()) {
            params.push(("end", end));
        }
        params
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Configuration for the routing service client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin of the routing service
    pub base_url: String,

    /// Endpoint path resolved against `base_url`
    pub routes_path: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            routes_path: ROUTES_PATH.to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

impl ClientConfig {
    /// Default configuration with the base URL taken from the environment when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url.trim().to_string();
            }
        }
        config
    }

    /// Replace the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the request URL for `query` under this configuration
    pub fn request_url(&self, query: &SearchQuery) -> Result<Url> {
        build_request_url(&self.base_url, &self.routes_path, query)
    }
}

/// Resolve `path` against `base` and append the non-empty query parameters
pub fn build_request_url(base: &str, path: &str, query: &SearchQuery) -> Result<Url> {
    let base = Url::parse(base)?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(Error::InvalidConfiguration(format!(
            "unsupported scheme '{}' in base URL {base}",
            base.scheme()
        )));
    }

    let mut url = base.join(path)?;

    let params = query.params();
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in params {
            pairs.append_pair(name, value);
        }
    }

    Ok(url)
}
