//! Route definitions for click tracking.

use axum::routing::post;
use axum::Router;

use crate::handlers::track;
use crate::state::AppState;

/// Routes merged into `/api/v1`.
///
/// ```text
/// POST /track -> track_click
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/track", post(track::track_click))
}
