//! Integration tests for the scenariq binary
//!
//! These tests run the built CLI against a stub routing service.

use std::process::Output;

use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[ctor::ctor]
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Run the CLI with `args`, isolated from the caller's environment
async fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scenariq"))
        .args(args)
        .env_remove("SCENARIQ_API_BASE_URL")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to run scenariq binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

async fn stub_with_routes() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/routes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "konkan-coastal-via-nh-66",
            "name": "Mumbai → Goa (Konkan Coastal via NH 66)",
            "totalMinutes": 240,
            "distanceKm": 585.0,
            "scenicScore": 8.5,
            "trafficImpactMinutes": 30,
            "fuelImpactPercent": 4.2,
            "comfortScore": 7,
            "description": "Konkan Coastal via NH 66 · 240 min · 585.0 km",
            "highlights": ["Toll road near Panvel"],
            "views": ["Konkan Coastal via NH 66"],
            "thumbnail": "https://images.unsplash.com/photo-1505739775417-85f7f80593dd",
            "googleMapsUrl": "https://www.google.com/maps/dir/?api=1&travelmode=driving&origin=Mumbai&destination=Goa"
        }])))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_dry_run_prints_request_url() {
    let output = run_cli(&[
        "--start",
        "Navi Mumbai",
        "--end",
        "Goa",
        "--base-url",
        "http://127.0.0.1:9000",
        "--dry-run",
    ])
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output).trim(),
        "http://127.0.0.1:9000/api/routes?start=Navi+Mumbai&end=Goa"
    );
    assert!(stderr(&output).contains("timeout 15s"));
}

#[tokio::test]
async fn test_dry_run_rejects_bad_base_url() {
    let output = run_cli(&["--base-url", "not a url", "--dry-run"]).await;
    assert!(!output.status.success());
}

#[tokio::test]
async fn test_cards_are_printed() {
    let server = stub_with_routes().await;
    let output = run_cli(&["--base-url", &server.uri()]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Mumbai → Goa (Konkan Coastal via NH 66)"));
    assert!(text.contains("+30 min"));
    assert!(text.contains("Open in Maps: https://www.google.com/maps/dir/"));
}

#[tokio::test]
async fn test_json_output() {
    let server = stub_with_routes().await;
    let output = run_cli(&["--base-url", &server.uri(), "--json"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value[0]["metrics"]["scenic"], 85.0);
    assert_eq!(value[0]["metrics"]["timeImpact"], 12.5);
}

#[tokio::test]
async fn test_failed_search_shows_opaque_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/routes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let output = run_cli(&["--base-url", &server.uri()]).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(scenariq::SEARCH_FAILED_MESSAGE));
    assert!(stdout(&output).is_empty());
}

#[tokio::test]
async fn test_empty_result_shows_hint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/routes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let output = run_cli(&["--base-url", &server.uri()]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("curated detours"));
}

#[tokio::test]
async fn test_version_matches_package() {
    let output = run_cli(&["--version"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}
