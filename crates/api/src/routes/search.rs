//! Route definitions for external search passthroughs.
//!
//! ```text
//! GET /footage/search      search_footage
//! GET /channels/search     search_channels
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/footage/search", get(search::search_footage))
        .route("/channels/search", get(search::search_channels))
}
