//! Plain-text route cards for the terminal

use scenariq::NormalizedRoute;

/// Width of a trade-off bar in characters, brackets excluded
pub const BAR_WIDTH: usize = 20;

/// Shown when a search returns no routes
pub const EMPTY_HINT: &str = "Enter your endpoints and we will surface a few curated detours.";

/// Draw a bar for a percentage in 0..=100
pub fn render_bar(percent: f64) -> String {
    let clamped = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Render one route card
pub fn render_card(normalized: &NormalizedRoute) -> String {
    let route = &normalized.route;
    let mut lines = vec![route.name.clone(), format!("  {}", normalized.meta().join(" · "))];

    if !route.description.is_empty() {
        lines.push(format!("  {}", route.description));
    }
    if !route.views.is_empty() {
        let badges: Vec<String> = route.views.iter().map(|view| format!("[{view}]")).collect();
        lines.push(format!("  {}", badges.join(" ")));
    }

    for tradeoff in normalized.tradeoffs() {
        lines.push(format!(
            "  {:<12} {:>9} {} {:>5.1}%",
            tradeoff.label,
            tradeoff.value,
            render_bar(tradeoff.percent),
            tradeoff.percent
        ));
    }

    for highlight in &route.highlights {
        lines.push(format!("  • {highlight}"));
    }
    lines.push(format!("  Open in Maps: {}", route.google_maps_url));

    lines.join("\n")
}

/// Render every card, or the empty-state hint
pub fn render_results(routes: &[NormalizedRoute]) -> String {
    if routes.is_empty() {
        return EMPTY_HINT.to_string();
    }
    routes
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}
