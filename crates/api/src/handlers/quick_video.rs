//! Handlers for the quick (low-fidelity) video path.
//!
//! Routes:
//! - `POST /videos/quick`        -- submit a generation job
//! - `GET  /videos/quick/status` -- poll a job by `public_id`

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use reelgen_core::script::{truncate_for_quick, QUICK_SCRIPT_MAX_CHARS};
use reelgen_core::types::{GenerationRequest, JobHandle, JobState, Platform, ProviderKind};
use reelgen_providers::VideoProvider;

use crate::error::AppResult;
use crate::handlers::{require, PollResponse};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuickSubmitRequest {
    pub title: Option<String>,
    pub script: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuickSubmitResponse {
    pub public_id: String,
    pub status: JobState,
    /// The script as actually submitted to the vendor.
    pub script: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// POST /api/v1/videos/quick
///
/// Scripts longer than the vendor's 512-character limit are silently cut;
/// the response echoes the submitted script and carries a `note` so the
/// browser can tell the user what was sent.
pub async fn submit_quick(
    State(state): State<AppState>,
    Json(input): Json<QuickSubmitRequest>,
) -> AppResult<impl IntoResponse> {
    let title = require(&input.title, "title")?;
    let script = require(&input.script, "script")?;

    let shaped = truncate_for_quick(script);

    let request = GenerationRequest {
        title: title.to_string(),
        script: script.to_string(),
        duration_secs: 0,
        platform: Platform::Youtube,
        avatar_selector: String::new(),
        background_image_url: None,
    };

    let handle = state.registry.quick()?.submit(&request).await?;

    let note = shaped.truncated.then(|| {
        format!("Script was truncated to {QUICK_SCRIPT_MAX_CHARS} characters for this provider")
    });

    Ok(Json(DataResponse {
        data: QuickSubmitResponse {
            public_id: handle.provider_job_id,
            status: JobState::Pending,
            script: shaped.script,
            note,
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct QuickStatusQuery {
    pub public_id: Option<String>,
}

/// GET /api/v1/videos/quick/status?public_id=...
pub async fn quick_status(
    State(state): State<AppState>,
    Query(query): Query<QuickStatusQuery>,
) -> AppResult<impl IntoResponse> {
    let public_id = require(&query.public_id, "public_id")?;

    let handle = JobHandle::new(ProviderKind::EdenAi, public_id);
    let status = state.registry.quick()?.poll_status(&handle).await?;

    Ok(Json(DataResponse {
        data: PollResponse::from(status),
    }))
}
