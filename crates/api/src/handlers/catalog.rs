//! Handler for the avatar catalog.
//!
//! Routes:
//! - `GET /avatars` -- list available presenter personas

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use reelgen_providers::heygen::AvatarInfo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AvatarCatalogResponse {
    pub avatars: Vec<AvatarInfo>,
}

/// GET /api/v1/avatars
pub async fn list_avatars(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let avatars = state.registry.avatar()?.list_avatars().await?;

    Ok(Json(DataResponse {
        data: AvatarCatalogResponse { avatars },
    }))
}
