//! Route definitions, grouped per surface.

pub mod embed;
pub mod health;
pub mod track;

use axum::Router;

use crate::state::AppState;

/// Routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(track::router())
}
