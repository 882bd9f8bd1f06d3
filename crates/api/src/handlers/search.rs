//! Handlers for external search passthroughs.
//!
//! Routes:
//! - `GET /footage/search`  -- stock footage search (vendor payload verbatim)
//! - `GET /channels/search` -- channel search (reshaped hits)

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use reelgen_providers::youtube::ChannelInfo;

use crate::error::AppResult;
use crate::handlers::require;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FootageSearchQuery {
    pub query: Option<String>,
    pub per_page: Option<u32>,
}

/// GET /api/v1/footage/search?query=...&per_page=...
///
/// The vendor response is passed through verbatim; the browser renders its
/// shape directly.
pub async fn search_footage(
    State(state): State<AppState>,
    Query(params): Query<FootageSearchQuery>,
) -> AppResult<impl IntoResponse> {
    let query = require(&params.query, "query")?;

    let results = state
        .registry
        .footage()?
        .search_videos(query, params.per_page)
        .await?;

    Ok(Json(DataResponse { data: results }))
}

#[derive(Debug, Deserialize)]
pub struct ChannelSearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChannelSearchResponse {
    pub channels: Vec<ChannelInfo>,
}

/// GET /api/v1/channels/search?search=...
pub async fn search_channels(
    State(state): State<AppState>,
    Query(params): Query<ChannelSearchQuery>,
) -> AppResult<impl IntoResponse> {
    let search = require(&params.search, "search")?;

    let channels = state.registry.channels()?.search_channels(search).await?;

    Ok(Json(DataResponse {
        data: ChannelSearchResponse { channels },
    }))
}
