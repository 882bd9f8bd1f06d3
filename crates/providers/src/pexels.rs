//! Client for the stock-footage search provider.
//!
//! The browser consumes the vendor response shape directly, so the search
//! result is passed through as raw JSON rather than remapped.

use crate::error::{parse_response, ProviderError};

/// Default page size when the browser does not ask for one.
const DEFAULT_PER_PAGE: u32 = 10;

/// HTTP client for the footage search endpoint.
pub struct PexelsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl PexelsClient {
    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Search stock videos, returning the vendor payload verbatim.
    pub async fn search_videos(
        &self,
        query: &str,
        per_page: Option<u32>,
    ) -> Result<serde_json::Value, ProviderError> {
        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).to_string();

        let response = self
            .client
            .get(format!("{}/videos/search", self.base_url))
            .query(&[("query", query), ("per_page", per_page.as_str())])
            .header("Authorization", &self.api_key)
            .send()
            .await?;

        parse_response(response).await
    }
}
