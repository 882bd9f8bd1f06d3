use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use reelgen_core::error::CoreError;
use reelgen_pipeline::PipelineError;
use reelgen_providers::ProviderError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`ProviderError`] for vendor
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`]
/// to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `reelgen-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A provider adapter error.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// An extension chain run ended early.
    #[error(transparent)]
    Chain(#[from] PipelineError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => classify_core_error(core),

            // --- Provider errors ---
            AppError::Provider(provider) => classify_provider_error(provider),

            // --- Extension chain errors ---
            AppError::Chain(chain) => match chain {
                PipelineError::Provider(provider) => classify_provider_error(provider),
                PipelineError::StageFailed { .. } | PipelineError::Timeout { .. } => {
                    tracing::warn!(error = %chain, "Extension chain ended early");
                    (StatusCode::BAD_GATEWAY, "CHAIN_FAILED", chain.to_string())
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a provider error into an HTTP status, error code, and message.
///
/// - Local validation failures map to 400.
/// - A missing credential maps to 500 with the `CONFIG_ERROR` code, naming
///   the unset variable.
/// - Vendor non-2xx responses mirror the vendor's status code when it is a
///   valid HTTP error status; transport and decode failures map to 502.
fn classify_provider_error(err: &ProviderError) -> (StatusCode, &'static str, String) {
    match err {
        ProviderError::Invalid(core) => classify_core_error(core),
        ProviderError::MissingCredential(var) => {
            tracing::error!(env_var = %var, "Provider credential not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                format!("Provider credential {var} is not configured"),
            )
        }
        ProviderError::Api { status, body } => {
            let mirrored = StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            tracing::warn!(vendor_status = *status, "Vendor API error");
            (
                mirrored,
                "UPSTREAM_ERROR",
                format!("Provider returned {status}: {body}"),
            )
        }
        ProviderError::Request(e) => {
            tracing::warn!(error = %e, "Vendor request failed");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "Provider request failed".to_string(),
            )
        }
        ProviderError::Decode(msg) => {
            tracing::warn!(error = %msg, "Vendor response did not match expected shape");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "Provider returned an unexpected response".to_string(),
            )
        }
    }
}
