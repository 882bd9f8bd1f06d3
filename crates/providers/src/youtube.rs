//! Client for the video-platform channel search provider.

use serde::Deserialize;

use crate::error::{parse_response, ProviderError};

/// Maximum channels returned per search.
const MAX_RESULTS: u32 = 10;

/// HTTP client for the channel search endpoint.
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

/// One channel search hit, reshaped for the browser.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ChannelInfo {
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct ItemId {
    #[serde(rename = "channelId")]
    channel_id: String,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    #[serde(default)]
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

impl YouTubeClient {
    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Search for channels matching `query`.
    pub async fn search_channels(&self, query: &str) -> Result<Vec<ChannelInfo>, ProviderError> {
        let max_results = MAX_RESULTS.to_string();

        let response = self
            .client
            .get(format!("{}/youtube/v3/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("type", "channel"),
                ("q", query),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let search: SearchResponse = parse_response(response).await?;
        Ok(search
            .items
            .into_iter()
            .map(|item| ChannelInfo {
                channel_id: item.id.channel_id,
                title: item.snippet.title,
                description: item.snippet.description,
                thumbnail: item
                    .snippet
                    .thumbnails
                    .default
                    .map(|t| t.url)
                    .unwrap_or_default(),
            })
            .collect())
    }
}
