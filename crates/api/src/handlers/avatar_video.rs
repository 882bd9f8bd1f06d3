//! Handlers for the avatar video path.
//!
//! Routes:
//! - `POST /videos/avatar`        -- submit a generation job
//! - `GET  /videos/avatar/status` -- poll a job by `video_id`

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use reelgen_core::error::CoreError;
use reelgen_core::types::{GenerationRequest, JobHandle, JobState, Platform, ProviderKind};
use reelgen_providers::VideoProvider;

use crate::error::{AppError, AppResult};
use crate::handlers::{require, PollResponse};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AvatarSubmitRequest {
    pub title: Option<String>,
    pub script: Option<String>,
    pub duration_secs: Option<u32>,
    pub platform: Option<String>,
    pub avatar: Option<String>,
    pub background_image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AvatarSubmitResponse {
    pub video_id: String,
    pub status: JobState,
}

/// POST /api/v1/videos/avatar
///
/// The `avatar` selector is resolved against a static persona table;
/// unknown values render with the default persona rather than failing.
pub async fn submit_avatar(
    State(state): State<AppState>,
    Json(input): Json<AvatarSubmitRequest>,
) -> AppResult<impl IntoResponse> {
    let request = build_request(&input)?;

    let handle = state.registry.avatar()?.submit(&request).await?;

    Ok(Json(DataResponse {
        data: AvatarSubmitResponse {
            video_id: handle.provider_job_id,
            status: JobState::Pending,
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct AvatarStatusQuery {
    pub video_id: Option<String>,
}

/// GET /api/v1/videos/avatar/status?video_id=...
pub async fn avatar_status(
    State(state): State<AppState>,
    Query(query): Query<AvatarStatusQuery>,
) -> AppResult<impl IntoResponse> {
    let video_id = require(&query.video_id, "video_id")?;

    let handle = JobHandle::new(ProviderKind::HeyGen, video_id);
    let status = state.registry.avatar()?.poll_status(&handle).await?;

    Ok(Json(DataResponse {
        data: PollResponse::from(status),
    }))
}

/// Validate and assemble a [`GenerationRequest`] from the submit payload.
pub(crate) fn build_request(input: &AvatarSubmitRequest) -> Result<GenerationRequest, AppError> {
    let title = require(&input.title, "title")?;
    let script = require(&input.script, "script")?;
    let platform = Platform::parse(require(&input.platform, "platform")?)?;
    let avatar = require(&input.avatar, "avatar")?;
    let duration_secs = input.duration_secs.ok_or_else(|| {
        AppError::Core(CoreError::Validation("duration_secs is required".into()))
    })?;

    Ok(GenerationRequest {
        title: title.to_string(),
        script: script.to_string(),
        duration_secs,
        platform,
        avatar_selector: avatar.to_string(),
        background_image_url: input.background_image_url.clone(),
    })
}
