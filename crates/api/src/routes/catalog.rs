//! Route definitions for the avatar catalog.
//!
//! ```text
//! GET /avatars     list_avatars
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/avatars", get(catalog::list_avatars))
}
