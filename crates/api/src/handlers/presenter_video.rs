//! Handlers for the presenter (alternate avatar) video path.
//!
//! Routes:
//! - `POST /videos/presenter`        -- submit a generation job
//! - `GET  /videos/presenter/status` -- poll a job by `video_id`
//!
//! Shares the submit payload shape with the avatar path; the adapter
//! additionally runs the content filter and pacing truncation, and the
//! response echoes the script exactly as it was submitted.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use reelgen_core::types::{JobHandle, JobState, ProviderKind};
use reelgen_providers::synthesia::SynthesiaProvider;
use reelgen_providers::VideoProvider;

use crate::error::AppResult;
use crate::handlers::avatar_video::{build_request, AvatarSubmitRequest};
use crate::handlers::{require, PollResponse};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PresenterSubmitResponse {
    pub video_id: String,
    pub status: JobState,
    /// The script as actually submitted: filtered and cut to pace.
    pub script: String,
}

/// POST /api/v1/videos/presenter
pub async fn submit_presenter(
    State(state): State<AppState>,
    Json(input): Json<AvatarSubmitRequest>,
) -> AppResult<impl IntoResponse> {
    let request = build_request(&input)?;

    let script =
        SynthesiaProvider::shape_script(&request.script, request.platform, request.duration_secs);
    let handle = state.registry.presenter()?.submit(&request).await?;

    Ok(Json(DataResponse {
        data: PresenterSubmitResponse {
            video_id: handle.provider_job_id,
            status: JobState::Pending,
            script,
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct PresenterStatusQuery {
    pub video_id: Option<String>,
}

/// GET /api/v1/videos/presenter/status?video_id=...
pub async fn presenter_status(
    State(state): State<AppState>,
    Query(query): Query<PresenterStatusQuery>,
) -> AppResult<impl IntoResponse> {
    let video_id = require(&query.video_id, "video_id")?;

    let handle = JobHandle::new(ProviderKind::Synthesia, video_id);
    let status = state.registry.presenter()?.poll_status(&handle).await?;

    Ok(Json(DataResponse {
        data: PollResponse::from(status),
    }))
}
