//! Shared helpers for API integration tests.
//!
//! Builds the full application router with the same middleware stack
//! production uses, backed by a provider registry whose base URLs point at
//! a wiremock server instead of the real vendors.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use reelgen_api::config::ServerConfig;
use reelgen_api::router::build_app_router;
use reelgen_api::state::AppState;
use reelgen_pipeline::ExtensionPipeline;
use reelgen_providers::{CredentialKey, ProviderRegistry, ProviderSettings};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Settings with every credential configured and every base URL pointed at
/// the given mock server.
pub fn mock_settings(mock_uri: &str) -> ProviderSettings {
    let mut settings = ProviderSettings::empty();
    for key in CredentialKey::ALL {
        settings = settings.with_credential(*key, "test-key");
    }
    settings.openai_base_url = mock_uri.to_string();
    settings.edenai_base_url = mock_uri.to_string();
    settings.heygen_base_url = mock_uri.to_string();
    settings.synthesia_base_url = mock_uri.to_string();
    settings.runway_base_url = mock_uri.to_string();
    settings.pexels_base_url = mock_uri.to_string();
    settings.youtube_base_url = mock_uri.to_string();
    settings
}

/// Build the full application router from the given provider settings.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. The extension pipeline polls at
/// millisecond intervals so chain tests finish quickly.
pub fn build_test_app(settings: &ProviderSettings) -> Router {
    let config = test_config();
    let registry = ProviderRegistry::from_settings(settings);

    let state = AppState {
        registry: Arc::new(registry),
        pipeline: Arc::new(ExtensionPipeline::with_timing(
            Duration::from_millis(5),
            5,
        )),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Router backed by a registry with no credentials configured.
pub fn build_unconfigured_app() -> Router {
    build_test_app(&ProviderSettings::empty())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request"),
    )
    .await
    .expect("request failed")
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request"),
    )
    .await
    .expect("request failed")
}

/// Send a request with an arbitrary method and empty body.
pub async fn request_with_method(app: Router, method: &str, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request"),
    )
    .await
    .expect("request failed")
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body was not valid JSON")
}

/// Assert a response is an error with the given status and error code.
pub async fn assert_error(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code, "unexpected error code: {json}");
}
