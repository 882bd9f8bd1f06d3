//! Adapter for the Runway task API -- the only vendor supporting
//! incremental clip extension.
//!
//! Besides the standard submit/poll pair, [`RunwayProvider::extend`]
//! submits an extension task that lengthens an existing clip by 8 seconds,
//! using the previous stage's task id as the asset to extend from. Stage
//! validation lives in `reelgen-core`; only stages 2 through 4 are
//! accepted.

use async_trait::async_trait;
use serde::Deserialize;

use reelgen_core::extension::{
    continuation_prompt, stage_description, ExtensionStage, BASE_CLIP_SECS,
    EXTENSION_INCREMENT_SECS,
};
use reelgen_core::types::{GenerationRequest, JobHandle, JobState, JobStatus, Platform, ProviderKind};

use crate::error::{parse_response, ProviderError};
use crate::provider::{extract_video_url, VideoProvider};

/// Model requested for both base generation and extensions.
const MODEL: &str = "gen3a_turbo";

/// Documented location of the finished video URL (first output artifact).
const PRIMARY_URL_FIELD: &str = "output";
/// Deprecated locations observed in older vendor responses.
const LEGACY_URL_FIELDS: &[&str] = &["artifacts.0.url", "videoUrl", "video_url"];

/// HTTP client for the Runway task endpoints.
#[derive(Debug)]
pub struct RunwayProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    legacy_url_fallback: bool,
}

/// An accepted extension task.
#[derive(Debug, Clone)]
pub struct ExtensionSubmission {
    pub handle: JobHandle,
    pub stage: u8,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct TaskResponse {
    status: String,
    #[serde(default)]
    failure: Option<String>,
    #[serde(flatten)]
    rest: serde_json::Value,
}

impl RunwayProvider {
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

    /// Map the vendor's task vocabulary to the internal four states.
    fn map_state(status: &str) -> JobState {
        match status {
            "SUCCEEDED" => JobState::Completed,
            "FAILED" | "CANCELED" => JobState::Failed,
            "PENDING" | "THROTTLED" => JobState::Pending,
            _ => JobState::Processing,
        }
    }

    /// Submit an extension task for `stage`, continuing from `asset_id`
    /// (the task id produced by the previous stage).
    pub async fn extend(
        &self,
        asset_id: &str,
        stage: u8,
        title: &str,
    ) -> Result<ExtensionSubmission, ProviderError> {
        let step = ExtensionStage::new(stage, asset_id).map_err(ProviderError::Invalid)?;

        let body = serde_json::json!({
            "model": MODEL,
            "assetId": step.asset_id,
            "promptText": continuation_prompt(title, step.stage),
            "duration": EXTENSION_INCREMENT_SECS,
        });

        let response = self
            .client
            .post(format!("{}/v1/video_extend", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let submit: SubmitResponse = parse_response(response).await?;
        tracing::info!(stage, task_id = %submit.id, "Extension task accepted");
        Ok(ExtensionSubmission {
            handle: JobHandle::new(ProviderKind::Runway, submit.id),
            stage,
            description: stage_description(stage),
        })
    }
}

#[async_trait]
impl VideoProvider for RunwayProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Runway
    }

    async fn submit(&self, request: &GenerationRequest) -> Result<JobHandle, ProviderError> {
        request.validate()?;

        let ratio = match request.platform {
            Platform::Youtube => "1280:768",
            Platform::Instagram => "768:1280",
        };

        let body = serde_json::json!({
            "model": MODEL,
            "promptText": request.script,
            "duration": BASE_CLIP_SECS,
            "ratio": ratio,
        });

        let response = self
            .client
            .post(format!("{}/v1/text_to_video", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let submit: SubmitResponse = parse_response(response).await?;
        Ok(JobHandle::new(ProviderKind::Runway, submit.id))
    }

    async fn poll_status(&self, handle: &JobHandle) -> Result<JobStatus, ProviderError> {
        let response = self
            .client
            .get(format!(
                "{}/v1/tasks/{}",
                self.base_url, handle.provider_job_id
            ))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let task: TaskResponse = parse_response(response).await?;
        let state = Self::map_state(&task.status);

        let video_url = extract_video_url(
            &task.rest,
            PRIMARY_URL_FIELD,
            LEGACY_URL_FIELDS,
            self.legacy_url_fallback,
        );

        let message = match state {
            JobState::Failed => task
                .failure
                .unwrap_or_else(|| "Task failed".to_string()),
            JobState::Completed if video_url.is_none() => {
                "Completed but no video URL found in vendor response".to_string()
            }
            _ => format!("Vendor status: {}", task.status),
        };

        Ok(JobStatus::new(state, video_url, message).with_raw(task.rest))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
