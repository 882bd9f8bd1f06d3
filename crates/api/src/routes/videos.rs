//! Route definitions for video generation across all providers.
//!
//! ```text
//! POST /videos/quick                submit_quick
//! GET  /videos/quick/status         quick_status
//! POST /videos/avatar               submit_avatar
//! GET  /videos/avatar/status        avatar_status
//! POST /videos/presenter            submit_presenter
//! GET  /videos/presenter/status     presenter_status
//! POST /videos/extendable           submit_extendable
//! GET  /videos/extendable/status    extendable_status
//! POST /videos/extendable/extend    submit_extension
//! POST /videos/extendable/run       run_extension_chain
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{avatar_video, extend_video, presenter_video, quick_video};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/videos/quick", post(quick_video::submit_quick))
        .route("/videos/quick/status", get(quick_video::quick_status))
        .route("/videos/avatar", post(avatar_video::submit_avatar))
        .route("/videos/avatar/status", get(avatar_video::avatar_status))
        .route("/videos/presenter", post(presenter_video::submit_presenter))
        .route(
            "/videos/presenter/status",
            get(presenter_video::presenter_status),
        )
        .route("/videos/extendable", post(extend_video::submit_extendable))
        .route(
            "/videos/extendable/status",
            get(extend_video::extendable_status),
        )
        .route(
            "/videos/extendable/extend",
            post(extend_video::submit_extension),
        )
        .route(
            "/videos/extendable/run",
            post(extend_video::run_extension_chain),
        )
}
