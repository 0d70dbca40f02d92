//! Route records returned by the routing service

use serde::{Deserialize, Serialize};

/// One candidate detour as described by the routing service
///
/// Numeric fields are signed so that out-of-contract negatives survive
/// deserialization and get clamped by the normalizer instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOption {
    /// Unique within one result set
    pub id: String,
    pub name: String,
    pub total_minutes: i64,
    pub distance_km: f64,
    /// 0-10
    pub scenic_score: f64,
    /// Minutes added versus the direct route
    pub traffic_impact_minutes: i64,
    /// Percent added versus the direct route
    pub fuel_impact_percent: f64,
    /// 0-10
    pub comfort_score: i64,
    pub description: String,
    pub highlights: Vec<String>,
    pub views: Vec<String>,
    pub thumbnail: String,
    pub google_maps_url: String,
}
