//! Adapter for the HeyGen avatar video API.
//!
//! Submission maps the UI avatar selector to a vendor avatar/voice pair via
//! a static table, falling back to a default persona for unknown selectors.
//! A 404 on the status endpoint means the video was rejected by moderation
//! (this vendor reuses not-found for moderated jobs), so it is mapped to a
//! failed status rather than an error.

use async_trait::async_trait;
use serde::Deserialize;

use reelgen_core::types::{GenerationRequest, JobHandle, JobState, JobStatus, ProviderKind};

use crate::error::{parse_response, ProviderError};
use crate::provider::{extract_video_url, VideoProvider};

/// UI selector → (avatar_id, voice_id).
const AVATAR_TABLE: &[(&str, (&str, &str))] = &[
    ("professional_male", ("Tyler-incasualsuit-20220721", "en-US-BrianNeural")),
    ("professional_female", ("Angela-inblackskirt-20220820", "en-US-JennyNeural")),
    ("casual_male", ("Wayne_20240711", "en-US-GuyNeural")),
    ("casual_female", ("Daisy-inskirt-20220818", "en-US-AriaNeural")),
    ("narrator", ("Thomas_20240711", "en-GB-RyanNeural")),
];

/// Persona used when the selector is not in [`AVATAR_TABLE`].
const DEFAULT_AVATAR: (&str, &str) = ("Tyler-incasualsuit-20220721", "en-US-BrianNeural");

/// Documented location of the finished video URL.
const PRIMARY_URL_FIELD: &str = "data.video_url";
/// Deprecated locations observed in older vendor responses.
const LEGACY_URL_FIELDS: &[&str] = &["data.video_url_caption", "data.url", "video_url"];

/// HTTP client for the HeyGen video endpoints.
pub struct HeyGenProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    legacy_url_fallback: bool,
}

/// One avatar entry from the vendor catalog, reshaped for the browser.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AvatarInfo {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct SubmitData {
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct StatusData {
    status: String,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CatalogData {
    avatars: Vec<CatalogAvatar>,
}

#[derive(Debug, Deserialize)]
struct CatalogAvatar {
    avatar_id: String,
    avatar_name: String,
}

impl HeyGenProvider {
    /// Create an adapter reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        api_key: String,
        base_url: String,
        legacy_url_fallback: bool,
    ) -> Self {
        Self {
            client,
            api_key,
            base_url,
            legacy_url_fallback,
        }
    }

    /// Resolve a UI selector to a vendor avatar/voice pair.
    ///
    /// Unknown selectors fall back to [`DEFAULT_AVATAR`] instead of failing;
    /// the browser ships selector strings we do not control.
    pub fn lookup_avatar(selector: &str) -> (&'static str, &'static str) {
        AVATAR_TABLE
            .iter()
            .find(|(key, _)| *key == selector)
            .map(|(_, pair)| *pair)
            .unwrap_or(DEFAULT_AVATAR)
    }

    /// Map the vendor's status vocabulary to the internal four states.
    fn map_state(status: &str) -> JobState {
        match status {
            "completed" => JobState::Completed,
            "failed" | "error" => JobState::Failed,
            "pending" | "waiting" => JobState::Pending,
            _ => JobState::Processing,
        }
    }

    /// Fetch the avatar catalog, reshaped to the browser's field names.
    pub async fn list_avatars(&self) -> Result<Vec<AvatarInfo>, ProviderError> {
        let response = self
            .client
            .get(format!("{}/v2/avatars", self.base_url))
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let catalog: Envelope<CatalogData> = parse_response(response).await?;
        Ok(catalog
            .data
            .avatars
            .into_iter()
            .map(|avatar| AvatarInfo {
                id: avatar.avatar_id.clone(),
                name: avatar.avatar_name.clone(),
                display_name: avatar.avatar_name,
                value: avatar.avatar_id,
                kind: "avatar".to_string(),
            })
            .collect())
    }
}

#[async_trait]
impl VideoProvider for HeyGenProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::HeyGen
    }

    async fn submit(&self, request: &GenerationRequest) -> Result<JobHandle, ProviderError> {
        request.validate()?;

        let (avatar_id, voice_id) = Self::lookup_avatar(&request.avatar_selector);
        let (width, height) = request.platform.dimensions();

        let mut video_input = serde_json::json!({
            "character": {
                "type": "avatar",
                "avatar_id": avatar_id,
                "avatar_style": "normal",
            },
            "voice": {
                "type": "text",
                "input_text": request.script,
                "voice_id": voice_id,
            },
        });
        if let Some(ref url) = request.background_image_url {
            video_input["background"] = serde_json::json!({ "type": "image", "url": url });
        }

        let body = serde_json::json!({
            "title": request.title,
            "video_inputs": [video_input],
            "dimension": { "width": width, "height": height },
        });

        let response = self
            .client
            .post(format!("{}/v2/video/generate", self.base_url))
            .header("X-Api-Key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let submit: Envelope<SubmitData> = parse_response(response).await?;
        Ok(JobHandle::new(ProviderKind::HeyGen, submit.data.video_id))
    }

    async fn poll_status(&self, handle: &JobHandle) -> Result<JobStatus, ProviderError> {
        let response = self
            .client
            .get(format!("{}/v1/video_status.get", self.base_url))
            .query(&[("video_id", handle.provider_job_id.as_str())])
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        // This vendor answers 404 for moderated videos as well as unknown
        // ids; for a handle we issued ourselves, moderation is the cause.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(JobStatus::new(
                JobState::Failed,
                None,
                "Video was rejected by content moderation",
            ));
        }

        let raw: serde_json::Value = parse_response(response).await?;
        let data: Envelope<StatusData> = serde_json::from_value(raw.clone())
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let state = Self::map_state(&data.data.status);
        let video_url = extract_video_url(
            &raw,
            PRIMARY_URL_FIELD,
            LEGACY_URL_FIELDS,
            self.legacy_url_fallback,
        );

        let message = match state {
            JobState::Failed => data
                .data
                .error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "Generation failed".to_string()),
            JobState::Completed if video_url.is_none() => {
                "Completed but no video URL found in vendor response".to_string()
            }
            _ => format!("Vendor status: {}", data.data.status),
        };

        Ok(JobStatus::new(state, video_url, message).with_raw(raw))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
