//! Core library modules for scenariq
//!
//! This module contains the internal implementation details of the scenariq library.

pub mod client;
pub mod error;
pub mod metrics;
pub mod query;
pub mod route;
pub mod session;
pub mod validate;

// Re-export main types for internal use
pub use client::RoutesClient;
pub use query::{build_request_url, ClientConfig, SearchQuery};
pub use session::{SearchPhase, SearchSession};
