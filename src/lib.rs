//! # Scenariq
//!
//! Client library for a scenic routing service. It asks the service for
//! detour options between two places and turns each route record into
//! display-ready comparison metrics.
//!
//! ```no_run
//! # async fn demo() -> scenariq::Result<()> {
//! let routes = scenariq::search("Mumbai", "Goa").await?;
//! for normalized in &routes {
//!     println!("{}: scenic {}%", normalized.route.name, normalized.metrics.scenic);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;

pub use crate::core::error::{Error, ErrorKind, Result, SEARCH_FAILED_MESSAGE};
pub use crate::core::metrics::{MetricPercentages, NormalizedRoute, Tradeoff};
pub use crate::core::query::{ClientConfig, SearchQuery, BASE_URL_ENV, DEFAULT_BASE_URL, ROUTES_PATH};
pub use crate::core::route::RouteOption;
pub use crate::core::validate::validate;
pub use crate::core::{build_request_url, RoutesClient, SearchPhase, SearchSession};

/// Search with configuration taken from the environment
pub async fn search(start: &str, end: &str) -> Result<Vec<NormalizedRoute>> {
    search_with_config(start, end, ClientConfig::from_env()).await
}

/// Search with an explicit configuration
pub async fn search_with_config(
    start: &str,
    end: &str,
    config: ClientConfig,
) -> Result<Vec<NormalizedRoute>> {
    RoutesClient::with_config(config)
        .search(&SearchQuery::new(start, end))
        .await
}
