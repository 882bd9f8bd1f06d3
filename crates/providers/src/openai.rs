//! Client for the text-completion and image-generation provider.
//!
//! Two operations: turn a topic into a full content plan (title,
//! description, category, tags, script), and generate a background image
//! sized for the target platform.

use serde::Deserialize;

use reelgen_core::types::Platform;

use crate::error::{parse_response, ProviderError};

/// Model used for script/metadata generation.
const COMPLETION_MODEL: &str = "gpt-4o-mini";
/// Model used for image generation.
const IMAGE_MODEL: &str = "dall-e-3";
/// Characters of the script surfaced as the preview snippet.
const PREVIEW_CHARS: usize = 160;

/// System prompt constraining the completion to a strict JSON shape.
const CONTENT_SYSTEM_PROMPT: &str = "You are a video content writer. Respond with a single JSON \
object with exactly these keys: title (string), description (string), category (string), tags \
(array of strings), script (string, a spoken-word video script). No markdown, no extra keys.";

/// HTTP client for the completion/image endpoints.
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

/// A generated content plan, ready for the browser's editable-script state.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ContentPlan {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub script_preview: String,
    pub ai_content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedPlan {
    title: String,
    description: String,
    category: String,
    #[serde(default)]
    tags: Vec<String>,
    script: String,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageItem>,
}

#[derive(Debug, Deserialize)]
struct ImageItem {
    url: String,
}

impl OpenAiClient {
    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url,
        }
    }

    /// Generate a content plan for `topic`.
    pub async fn generate_content(&self, topic: &str) -> Result<ContentPlan, ProviderError> {
        let body = serde_json::json!({
            "model": COMPLETION_MODEL,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": CONTENT_SYSTEM_PROMPT },
                { "role": "user", "content": format!("Write a video about: {topic}") },
            ],
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let chat: ChatResponse = parse_response(response).await?;
        let content = chat
            .choices
            .first()
            .map(|choice| choice.message.content.as_str())
            .ok_or_else(|| ProviderError::Decode("Completion returned no choices".into()))?;

        let plan: GeneratedPlan = serde_json::from_str(content)
            .map_err(|e| ProviderError::Decode(format!("Completion was not valid JSON: {e}")))?;

        Ok(ContentPlan {
            title: plan.title,
            description: plan.description,
            category: plan.category,
            tags: plan.tags,
            script_preview: preview(&plan.script),
            ai_content: plan.script,
        })
    }

    /// Generate a background image for `prompt`, sized for `platform`.
    ///
    /// Returns the hosted image URL.
    pub async fn generate_image(
        &self,
        prompt: &str,
        platform: Platform,
    ) -> Result<String, ProviderError> {
        let size = match platform {
            Platform::Youtube => "1792x1024",
            Platform::Instagram => "1024x1792",
        };

        let body = serde_json::json!({
            "model": IMAGE_MODEL,
            "prompt": prompt,
            "n": 1,
            "size": size,
        });

        let response = self
            .client
            .post(format!("{}/v1/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let image: ImageResponse = parse_response(response).await?;
        image
            .data
            .into_iter()
            .next()
            .map(|item| item.url)
            .ok_or_else(|| ProviderError::Decode("Image response contained no items".into()))
    }
}

/// First [`PREVIEW_CHARS`] characters of a script, on a char boundary.
fn preview(script: &str) -> String {
    script.chars().take(PREVIEW_CHARS).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
