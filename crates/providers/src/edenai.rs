//! Adapter for the EdenAI asynchronous text-to-video API (the fast,
//! low-fidelity path).
//!
//! Submission truncates the script to the vendor's 512-character limit
//! before sending. Jobs are keyed by the vendor-issued `public_id`.

use async_trait::async_trait;
use serde::Deserialize;

use reelgen_core::script::truncate_for_quick;
use reelgen_core::types::{GenerationRequest, JobHandle, JobState, JobStatus, ProviderKind};

use crate::error::{parse_response, ProviderError};
use crate::provider::{extract_video_url, VideoProvider};

/// Backing engine requested from the EdenAI aggregator.
const QUICK_ENGINE: &str = "amazon";

/// Documented location of the finished video URL.
const PRIMARY_URL_FIELD: &str = "results.amazon.video_resource_url";
/// Deprecated locations observed in older vendor responses.
const LEGACY_URL_FIELDS: &[&str] = &[
    "results.amazon.video",
    "video_resource_url",
    "video_url",
];

/// HTTP client for the EdenAI async video endpoints.
#[derive(Debug)]
pub struct EdenAiProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    legacy_url_fallback: bool,
}

/// Response returned when a generation job is queued.
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    public_id: String,
}

/// Response from the job status endpoint.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    rest: serde_json::Value,
}

impl EdenAiProvider {
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

    /// Map the vendor's status vocabulary to the internal four states.
    fn map_state(status: &str) -> JobState {
        match status {
            "finished" | "succeeded" => JobState::Completed,
            "failed" | "error" => JobState::Failed,
            "pending" | "queued" => JobState::Pending,
            _ => JobState::Processing,
        }
    }
}

#[async_trait]
impl VideoProvider for EdenAiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::EdenAi
    }

    async fn submit(&self, request: &GenerationRequest) -> Result<JobHandle, ProviderError> {
        request.validate()?;

        let shaped = truncate_for_quick(&request.script);
        if shaped.truncated {
            tracing::debug!(title = %request.title, "Quick script truncated to 512 characters");
        }

        let body = serde_json::json!({
            "providers": QUICK_ENGINE,
            "text": shaped.script,
        });

        let response = self
            .client
            .post(format!("{}/v2/video/text_to_video_async", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let submit: SubmitResponse = parse_response(response).await?;
        Ok(JobHandle::new(ProviderKind::EdenAi, submit.public_id))
    }

    async fn poll_status(&self, handle: &JobHandle) -> Result<JobStatus, ProviderError> {
        let response = self
            .client
            .get(format!(
                "{}/v2/video/text_to_video_async/{}",
                self.base_url, handle.provider_job_id
            ))
            .bearer_auth(&self.api_key)
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
            JobState::Failed => status
                .error
                .unwrap_or_else(|| "Generation failed".to_string()),
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
