//! Route definitions for the embed surface.

use axum::routing::get;
use axum::Router;

use crate::handlers::embed;
use crate::state::AppState;

/// Routes mounted at `/embed`. All GET, all returning executable JS.
///
/// ```text
/// GET /announcement    -> serve_announcement   (?id, ?test)
/// GET /banner          -> serve_banner         (?id, ?test)
/// GET /spotlight       -> serve_spotlight      (?id, ?test)
/// GET /video-tutorial  -> serve_video_tutorial (?id, ?test)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/announcement", get(embed::serve_announcement))
        .route("/banner", get(embed::serve_banner))
        .route("/spotlight", get(embed::serve_spotlight))
        .route("/video-tutorial", get(embed::serve_video_tutorial))
}
