//! Error type shared by all provider adapters.

use reelgen_core::error::CoreError;

/// Errors from the provider adapter layer.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The request failed local validation before any network call.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    /// The provider's credential was not configured at startup.
    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The vendor returned a non-2xx status code.
    #[error("Provider API error ({status}): {body}")]
    Api {
        /// HTTP status code returned by the vendor.
        status: u16,
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The vendor returned 2xx but the body did not match the expected shape.
    #[error("Unexpected provider response: {0}")]
    Decode(String),
}

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or [`ProviderError::Api`] carrying the status and
/// body text on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ProviderError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ProviderError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}
