//! Display metrics derived from route records
//!
//! Each route gets four bars bounded to 0..=100 plus the text labels shown
//! next to them. Negative raw values are treated as 0 before any formula runs.

use serde::Serialize;

use crate::core::route::RouteOption;

/// Upper bound of every bar
const MAX_PERCENT: f64 = 100.0;

/// Bounded percentages used to draw the comparison bars
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPercentages {
    pub scenic: f64,
    pub comfort: f64,
    pub time_impact: f64,
    pub fuel_impact: f64,
}

/// `min(100, round(scenicScore * 10))`
pub fn scenic_percent(scenic_score: f64) -> f64 {
    (non_negative(scenic_score) * 10.0).round().min(MAX_PERCENT)
}

/// `min(100, comfortScore * 10)`, no rounding since the score is integral
pub fn comfort_percent(comfort_score: i64) -> f64 {
    comfort_score.max(0).saturating_mul(10).min(100) as f64
}

/// Share of the trip spent on the detour, 0 when the trip has no duration
pub fn time_impact_percent(traffic_impact_minutes: i64, total_minutes: i64) -> f64 {
    let total = total_minutes.max(0);
    if total == 0 {
        return 0.0;
    }
    let traffic = traffic_impact_minutes.max(0);
    ((traffic as f64 / total as f64) * 100.0).min(MAX_PERCENT)
}

/// The raw fuel impact is already a percentage; only clamping applies
pub fn fuel_impact_percent(fuel_impact: f64) -> f64 {
    non_negative(fuel_impact).min(MAX_PERCENT)
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else if value == f64::INFINITY {
        MAX_PERCENT
    } else {
        0.0
    }
}

impl MetricPercentages {
    pub fn for_route(route: &RouteOption) -> Self {
        Self {
            scenic: scenic_percent(route.scenic_score),
            comfort: comfort_percent(route.comfort_score),
            time_impact: time_impact_percent(route.traffic_impact_minutes, route.total_minutes),
            fuel_impact: fuel_impact_percent(route.fuel_impact_percent),
        }
    }
}

/// One labelled bar on a route card
#[derive(Debug, Clone, PartialEq)]
pub struct Tradeoff {
    pub label: &'static str,
    pub value: String,
    pub percent: f64,
    /// CSS-style hex colour of the bar
    pub tone: &'static str,
}

/// A validated route together with its display metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRoute {
    #[serde(flatten)]
    pub route: RouteOption,
    pub metrics: MetricPercentages,
}

impl NormalizedRoute {
    pub fn new(route: RouteOption) -> Self {
        let metrics = MetricPercentages::for_route(&route);
        Self { route, metrics }
    }

    /// Summary line items: distance, duration and scenic score
    pub fn meta(&self) -> [String; 3] {
        [
            format!("{:.1} km total", self.route.distance_km),
            format!("{} min door-to-door", self.route.total_minutes),
            format!("Scenic score {:.1}", self.route.scenic_score),
        ]
    }

    /// The four comparison bars in card order
    pub fn tradeoffs(&self) -> [Tradeoff; 4] {
        let route = &self.route;
        [
            Tradeoff {
                label: "Scenic",
                value: format!("{:.1}/10", route.scenic_score),
                percent: self.metrics.scenic,
                tone: "#7be4ff",
            },
            Tradeoff {
                label: "Comfort",
                value: format!("{}/10", route.comfort_score),
                percent: self.metrics.comfort,
                tone: "#c0f28e",
            },
            Tradeoff {
                label: "Time impact",
                value: format!("+{} min", route.traffic_impact_minutes),
                percent: self.metrics.time_impact,
                tone: "#f8d66d",
            },
            Tradeoff {
                label: "Fuel impact",
                value: format!("+{:.1} %", route.fuel_impact_percent),
                percent: self.metrics.fuel_impact,
                tone: "#f58ad0",
            },
        ]
    }
}

/// Normalize every route, keeping order
pub fn normalize_all(routes: Vec<RouteOption>) -> Vec<NormalizedRoute> {
    routes.into_iter().map(NormalizedRoute::new).collect()
}
