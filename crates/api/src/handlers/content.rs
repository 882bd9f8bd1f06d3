//! Handlers for AI content generation.
//!
//! Routes:
//! - `POST /content/script` -- topic in, full content plan out
//! - `POST /content/image`  -- prompt in, hosted image URL out

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use reelgen_core::types::Platform;

use crate::error::AppResult;
use crate::handlers::require;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateScriptRequest {
    pub topic: Option<String>,
}

/// POST /api/v1/content/script
///
/// Generates a title, description, category, tags, and a spoken-word script
/// for the given topic. The browser shows `script_preview` and feeds
/// `ai_content` into the editable-script state.
pub async fn generate_script(
    State(state): State<AppState>,
    Json(input): Json<GenerateScriptRequest>,
) -> AppResult<impl IntoResponse> {
    let topic = require(&input.topic, "topic")?;

    let plan = state.registry.content()?.generate_content(topic).await?;

    Ok(Json(DataResponse { data: plan }))
}

#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateImageResponse {
    pub image_url: String,
}

/// POST /api/v1/content/image
///
/// Generates a background image sized for the target platform.
pub async fn generate_image(
    State(state): State<AppState>,
    Json(input): Json<GenerateImageRequest>,
) -> AppResult<impl IntoResponse> {
    let prompt = require(&input.prompt, "prompt")?;
    let platform = Platform::parse(require(&input.platform, "platform")?)?;

    let image_url = state
        .registry
        .content()?
        .generate_image(prompt, platform)
        .await?;

    Ok(Json(DataResponse {
        data: GenerateImageResponse { image_url },
    }))
}
