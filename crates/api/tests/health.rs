//! Tests for the root-level health endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_unconfigured_app, get, mock_settings};

#[tokio::test]
async fn health_reports_degraded_without_providers() {
    let app = build_unconfigured_app();
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["providers_configured"], 0);
    assert!(json["version"].as_str().is_some());
}

#[tokio::test]
async fn health_reports_ok_with_providers() {
    let settings = mock_settings("http://localhost:9");
    let app = common::build_test_app(&settings);
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["providers_configured"], 7);
}
