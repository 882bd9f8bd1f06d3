//! Handlers for the extension-capable video path.
//!
//! Routes:
//! - `POST /videos/extendable`        -- submit the 10-second base generation
//! - `GET  /videos/extendable/status` -- poll a task; auto-submits the next
//!   extension stage when the polled stage is completed and more remain
//! - `POST /videos/extendable/extend` -- submit one extension stage explicitly
//! - `POST /videos/extendable/run`    -- run the full 4-stage chain
//!
//! The deployment is stateless, so the status endpoint cannot know which
//! stage a task belongs to; the caller passes `stage` (and `title`, for the
//! continuation prompt) back on each poll. The auto-extend side effect can
//! be disabled per request with `auto_extend=false`.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use reelgen_core::error::CoreError;
use reelgen_core::extension::{self, StageDecision, FINAL_STAGE, FIRST_STAGE};
use reelgen_core::types::{GenerationRequest, JobHandle, JobState, Platform, ProviderKind};
use reelgen_providers::VideoProvider;

use crate::error::{AppError, AppResult};
use crate::handlers::require;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtendableSubmitRequest {
    pub title: Option<String>,
    pub script: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtendableSubmitResponse {
    pub task_id: String,
    pub status: JobState,
}

/// POST /api/v1/videos/extendable
pub async fn submit_extendable(
    State(state): State<AppState>,
    Json(input): Json<ExtendableSubmitRequest>,
) -> AppResult<impl IntoResponse> {
    let title = require(&input.title, "title")?;
    let script = require(&input.script, "script")?;
    let platform = parse_platform_or_default(&input.platform)?;

    let request = GenerationRequest {
        title: title.to_string(),
        script: script.to_string(),
        duration_secs: extension::BASE_CLIP_SECS,
        platform,
        avatar_selector: String::new(),
        background_image_url: None,
    };

    let handle = state.registry.extendable()?.submit(&request).await?;

    Ok(Json(DataResponse {
        data: ExtendableSubmitResponse {
            task_id: handle.provider_job_id,
            status: JobState::Pending,
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct ExtendableStatusQuery {
    pub task_id: Option<String>,
    /// Stage the polled task belongs to; defaults to 1 (base generation).
    pub stage: Option<u8>,
    /// Original title, used to build the continuation prompt when the next
    /// stage is auto-submitted.
    pub title: Option<String>,
    /// Set to `false` to poll without the auto-extend side effect.
    pub auto_extend: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ExtendableStatusResponse {
    pub status: JobState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub message: String,
    pub should_extend: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_stage: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_task_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_description: Option<String>,
}

/// GET /api/v1/videos/extendable/status?task_id=...&stage=1&title=...
///
/// When the polled stage is completed with a video URL and stages remain,
/// the next extension stage is submitted as a side effect and its task id
/// is returned in `next_task_id`; the caller continues polling that id with
/// the incremented `stage`.
pub async fn extendable_status(
    State(state): State<AppState>,
    Query(query): Query<ExtendableStatusQuery>,
) -> AppResult<impl IntoResponse> {
    let task_id = require(&query.task_id, "task_id")?;
    let stage = query.stage.unwrap_or(FIRST_STAGE);
    if !(FIRST_STAGE..=FINAL_STAGE).contains(&stage) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Invalid stage {stage}. Must be between {FIRST_STAGE} and {FINAL_STAGE}"
        ))));
    }
    let auto_extend = query.auto_extend.unwrap_or(true);

    let provider = state.registry.extendable()?;
    let handle = JobHandle::new(ProviderKind::Runway, task_id);
    let status = provider.poll_status(&handle).await?;

    let mut response = ExtendableStatusResponse {
        status: status.state,
        video_url: status.video_url.clone(),
        message: status.message.clone(),
        should_extend: false,
        next_stage: None,
        next_task_id: None,
        stage_description: None,
    };

    if let StageDecision::Extend { next_stage } = extension::decide(stage, &status) {
        response.should_extend = true;
        response.next_stage = Some(next_stage);

        if auto_extend {
            let title = query.title.as_deref().unwrap_or_default();
            let submission = provider.extend(task_id, next_stage, title).await?;
            response.next_task_id = Some(submission.handle.provider_job_id);
            response.stage_description = Some(submission.description);
        }
    }

    Ok(Json(DataResponse { data: response }))
}

#[derive(Debug, Deserialize)]
pub struct ExtensionSubmitRequest {
    pub asset_id: Option<String>,
    pub stage: Option<u8>,
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtensionSubmitResponse {
    pub task_id: String,
    pub status: JobState,
    pub stage_description: String,
}

/// POST /api/v1/videos/extendable/extend
///
/// Submits one extension stage explicitly. Stages outside [2, 4] are
/// rejected with a validation error before any vendor call.
pub async fn submit_extension(
    State(state): State<AppState>,
    Json(input): Json<ExtensionSubmitRequest>,
) -> AppResult<impl IntoResponse> {
    let asset_id = require(&input.asset_id, "asset_id")?;
    let title = require(&input.title, "title")?;
    let stage = input
        .stage
        .ok_or_else(|| AppError::Core(CoreError::Validation("stage is required".into())))?;

    let submission = state
        .registry
        .extendable()?
        .extend(asset_id, stage, title)
        .await?;

    Ok(Json(DataResponse {
        data: ExtensionSubmitResponse {
            task_id: submission.handle.provider_job_id,
            status: JobState::Pending,
            stage_description: submission.description,
        },
    }))
}

#[derive(Debug, Serialize)]
pub struct RunChainResponse {
    pub task_id: String,
    pub stages_completed: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub duration_secs: u32,
}

/// POST /api/v1/videos/extendable/run
///
/// Runs the whole base-plus-three-extensions chain server-side and responds
/// once the final 34-second video is ready (or the chain fails).
pub async fn run_extension_chain(
    State(state): State<AppState>,
    Json(input): Json<ExtendableSubmitRequest>,
) -> AppResult<impl IntoResponse> {
    let title = require(&input.title, "title")?;
    let script = require(&input.script, "script")?;
    let platform = parse_platform_or_default(&input.platform)?;

    let provider = state.registry.extendable()?;
    let outcome = state
        .pipeline
        .run(provider, title, script, platform)
        .await?;

    Ok(Json(DataResponse {
        data: RunChainResponse {
            task_id: outcome.task_id,
            stages_completed: outcome.stages_completed,
            video_url: outcome.video_url,
            duration_secs: outcome.duration_secs,
        },
    }))
}

/// Platform is optional on the extendable path; it defaults to landscape.
fn parse_platform_or_default(value: &Option<String>) -> Result<Platform, AppError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(Platform::parse(v)?),
        _ => Ok(Platform::Youtube),
    }
}
