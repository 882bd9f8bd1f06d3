//! Adapter for the Synthesia presenter video API (the alternate avatar
//! path).
//!
//! Scripts pass through the content word-substitution filter and the
//! pacing truncation before submission; this vendor's moderation rejects
//! financial-advice phrasing and bills by render time.

use async_trait::async_trait;
use serde::Deserialize;

use reelgen_core::content_filter::filter_script;
use reelgen_core::script::truncate_for_pacing;
use reelgen_core::types::{GenerationRequest, JobHandle, JobState, JobStatus, Platform, ProviderKind};

use crate::error::{parse_response, ProviderError};
use crate::provider::{extract_video_url, VideoProvider};

/// UI selector → vendor presenter id (voice is bound to the presenter).
const PRESENTER_TABLE: &[(&str, &str)] = &[
    ("professional_male", "james_costume1_cameraA"),
    ("professional_female", "anna_costume1_cameraA"),
    ("casual_male", "jack_costume1_cameraA"),
    ("casual_female", "laura_costume1_cameraA"),
    ("narrator", "isaac_costume1_cameraA"),
];

/// Presenter used when the selector is not in [`PRESENTER_TABLE`].
const DEFAULT_PRESENTER: &str = "anna_costume1_cameraA";

/// Documented location of the finished video URL.
const PRIMARY_URL_FIELD: &str = "download";
/// Deprecated locations observed in older vendor responses.
const LEGACY_URL_FIELDS: &[&str] = &["downloadUrl", "download_url", "video_url"];

/// HTTP client for the Synthesia video endpoints.
pub struct SynthesiaProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    legacy_url_fallback: bool,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
    #[serde(flatten)]
    rest: serde_json::Value,
}

impl SynthesiaProvider {
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

    /// Resolve a UI selector to a vendor presenter id, with default fallback.
    pub fn lookup_presenter(selector: &str) -> &'static str {
        PRESENTER_TABLE
            .iter()
            .find(|(key, _)| *key == selector)
            .map(|(_, presenter)| *presenter)
            .unwrap_or(DEFAULT_PRESENTER)
    }

    /// Filter and cut a script the way submission will.
    ///
    /// Exposed so the API layer can echo the exact submitted script back to
    /// the browser.
    pub fn shape_script(script: &str, platform: Platform, duration_secs: u32) -> String {
        let filtered = filter_script(script);
        truncate_for_pacing(&filtered, platform, duration_secs).script
    }

    /// Map the vendor's status vocabulary to the internal four states.
    ///
    /// `rejected` and `moderated` are vendor-terminal refusals and collapse
    /// to `failed` alongside plain failures.
    fn map_state(status: &str) -> JobState {
        match status {
            "complete" => JobState::Completed,
            "failed" | "rejected" | "moderated" | "error" => JobState::Failed,
            "queued" | "pending" => JobState::Pending,
            _ => JobState::Processing,
        }
    }
}

#[async_trait]
impl VideoProvider for SynthesiaProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Synthesia
    }

    async fn submit(&self, request: &GenerationRequest) -> Result<JobHandle, ProviderError> {
        request.validate()?;

        let script = Self::shape_script(&request.script, request.platform, request.duration_secs);
        let presenter = Self::lookup_presenter(&request.avatar_selector);
        let aspect_ratio = match request.platform {
            Platform::Youtube => "16:9",
            Platform::Instagram => "9:16",
        };

        let background = request
            .background_image_url
            .clone()
            .unwrap_or_else(|| "off_white".to_string());

        let body = serde_json::json!({
            "test": false,
            "title": request.title,
            "visibility": "private",
            "aspectRatio": aspect_ratio,
            "input": [{
                "scriptText": script,
                "avatar": presenter,
                "background": background,
            }],
        });

        let response = self
            .client
            .post(format!("{}/v2/videos", self.base_url))
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let submit: SubmitResponse = parse_response(response).await?;
        Ok(JobHandle::new(ProviderKind::Synthesia, submit.id))
    }

    async fn poll_status(&self, handle: &JobHandle) -> Result<JobStatus, ProviderError> {
        let response = self
            .client
            .get(format!(
                "{}/v2/videos/{}",
                self.base_url, handle.provider_job_id
            ))
            .header("Authorization", &self.api_key)
            .send()
            .await?;

        let status: StatusResponse = parse_response(response).await?;
        let state = Self::map_state(&status.status);

        let video_url = extract_video_url(
            &status.rest,
            PRIMARY_URL_FIELD,
            LEGACY_URL_FIELDS,
            self.legacy_url_fallback,
        );

        let message = match state {
            JobState::Failed => format!("Vendor reported terminal status: {}", status.status),
            JobState::Completed if video_url.is_none() => {
                "Completed but no video URL found in vendor response".to_string()
            }
            _ => format!("Vendor status: {}", status.status),
        };

        Ok(JobStatus::new(state, video_url, message).with_raw(status.rest))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
