//! Click tracking endpoint.
//!
//! Generated scripts POST here (fire-and-forget, `keepalive`) before the
//! action button performs its configured action. The write is transactional
//! on the server side but delivery is best-effort end to end: the script
//! swallows any failure.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use likemetric_core::widget::WidgetKind;
use likemetric_db::repositories::WidgetRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Payload sent by generated scripts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackClick {
    pub widget_id: String,
    pub widget_type: String,
}

/// POST /api/v1/track
///
/// Bumps the click counter and appends a `widget_clicks` event row.
pub async fn track_click(
    State(state): State<AppState>,
    Json(input): Json<TrackClick>,
) -> AppResult<StatusCode> {
    let kind = WidgetKind::parse(&input.widget_type)
        .ok_or_else(|| AppError::BadRequest(format!("unknown widget type: {}", input.widget_type)))?;

    WidgetRepo::record_click(&state.pool, kind, &input.widget_id).await?;

    tracing::debug!(
        widget_id = %input.widget_id,
        widget_kind = kind.as_str(),
        "Click recorded"
    );
    Ok(StatusCode::NO_CONTENT)
}
