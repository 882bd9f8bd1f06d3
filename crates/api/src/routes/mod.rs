pub mod catalog;
pub mod content;
pub mod health;
pub mod search;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /content/script                    generate script + metadata (POST)
/// /content/image                     generate background image (POST)
///
/// /videos/quick                      quick video submit (POST)
/// /videos/quick/status               quick video poll (GET)
/// /videos/avatar                     avatar video submit (POST)
/// /videos/avatar/status              avatar video poll (GET)
/// /videos/presenter                  presenter video submit (POST)
/// /videos/presenter/status           presenter video poll (GET)
/// /videos/extendable                 extendable base submit (POST)
/// /videos/extendable/status          extendable poll + auto-extend (GET)
/// /videos/extendable/extend          explicit extension submit (POST)
/// /videos/extendable/run             full 4-stage chain (POST)
///
/// /avatars                           avatar catalog fetch (GET)
///
/// /footage/search                    stock footage search (GET)
/// /channels/search                   channel search (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(content::router())
        .merge(videos::router())
        .merge(catalog::router())
        .merge(search::router())
}
