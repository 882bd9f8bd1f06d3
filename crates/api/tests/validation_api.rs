//! HTTP-level validation tests: missing fields, bad enum values, wrong
//! methods, and unconfigured providers.
//!
//! Uses Axum's `tower::ServiceExt` to send requests directly to the router;
//! no vendor is ever contacted because every request fails before the
//! adapter's network call.

mod common;

use axum::http::StatusCode;
use common::{assert_error, build_test_app, build_unconfigured_app, get, mock_settings, post_json, request_with_method};
use serde_json::json;

fn app() -> axum::Router {
    // Vendor base URLs are never reached in these tests.
    build_test_app(&mock_settings("http://localhost:9"))
}

// ---------------------------------------------------------------------------
// Test: POST /content/script without a topic returns 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn content_script_requires_topic() {
    let response = post_json(app(), "/api/v1/content/script", json!({})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Test: quick submit requires title and script, naming the missing field
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quick_submit_requires_title() {
    let response = post_json(app(), "/api/v1/videos/quick", json!({"script": "S"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("title"));
}

#[tokio::test]
async fn quick_submit_requires_script() {
    let response = post_json(app(), "/api/v1/videos/quick", json!({"title": "T"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("script"));
}

#[tokio::test]
async fn blank_fields_are_rejected_like_missing_ones() {
    let response = post_json(
        app(),
        "/api/v1/videos/quick",
        json!({"title": "  ", "script": "S"}),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Test: polls without the id query parameter return 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quick_status_requires_public_id() {
    let response = get(app(), "/api/v1/videos/quick/status").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("public_id"));
}

#[tokio::test]
async fn avatar_status_requires_video_id() {
    let response = get(app(), "/api/v1/videos/avatar/status").await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn extendable_status_requires_task_id() {
    let response = get(app(), "/api/v1/videos/extendable/status").await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Test: avatar submit validates platform and duration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn avatar_submit_rejects_unknown_platform() {
    let response = post_json(
        app(),
        "/api/v1/videos/avatar",
        json!({
            "title": "T", "script": "S", "duration_secs": 30,
            "platform": "tiktok", "avatar": "narrator"
        }),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn avatar_submit_requires_duration() {
    let response = post_json(
        app(),
        "/api/v1/videos/avatar",
        json!({
            "title": "T", "script": "S",
            "platform": "youtube", "avatar": "narrator"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("duration_secs"));
}

// ---------------------------------------------------------------------------
// Test: extension stage bounds are enforced at the HTTP boundary
// ---------------------------------------------------------------------------

#[tokio::test]
async fn extend_rejects_stage_outside_bounds() {
    for stage in [0, 1, 5] {
        let response = post_json(
            app(),
            "/api/v1/videos/extendable/extend",
            json!({"asset_id": "task-1", "stage": stage, "title": "T"}),
        )
        .await;
        assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    }
}

#[tokio::test]
async fn extendable_status_rejects_bad_stage() {
    let response = get(app(), "/api/v1/videos/extendable/status?task_id=t&stage=7").await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Test: search endpoints require their query parameters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn footage_search_requires_query() {
    let response = get(app(), "/api/v1/footage/search").await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn channel_search_requires_search() {
    let response = get(app(), "/api/v1/channels/search").await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Test: an unconfigured provider yields 500 CONFIG_ERROR naming the key
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unconfigured_provider_returns_named_config_error() {
    let response = post_json(
        build_unconfigured_app(),
        "/api/v1/videos/quick",
        json!({"title": "T", "script": "S"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "CONFIG_ERROR");
    assert!(json["error"].as_str().unwrap().contains("EDENAI_API_KEY"));
}

#[tokio::test]
async fn unconfigured_catalog_returns_config_error() {
    let response = get(build_unconfigured_app(), "/api/v1/avatars").await;
    assert_error(response, StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR").await;
}

// ---------------------------------------------------------------------------
// Test: wrong method on a known path returns 405
// ---------------------------------------------------------------------------

#[tokio::test]
async fn wrong_method_returns_405() {
    let response = request_with_method(app(), "GET", "/api/v1/videos/quick").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = request_with_method(app(), "POST", "/api/v1/videos/quick/status").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
