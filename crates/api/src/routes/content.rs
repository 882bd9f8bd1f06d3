//! Route definitions for AI content generation.
//!
//! ```text
//! POST /content/script     generate_script
//! POST /content/image      generate_image
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/content/script", post(content::generate_script))
        .route("/content/image", post(content::generate_image))
}
