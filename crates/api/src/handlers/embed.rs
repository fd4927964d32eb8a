//! Embed script delivery.
//!
//! One pipeline serves all four widget kinds: parse query params, fetch the
//! row, gate on status, normalize, generate, respond. Every exit path —
//! including database failure — returns a body that executes cleanly as a
//! `<script src>` on a third-party page; this surface never produces a
//! response that would throw.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use likemetric_core::normalize::normalize;
use likemetric_core::script::{self, console_error_script, console_warn_script, ScriptOptions};
use likemetric_core::widget::{WidgetKind, WidgetStatus};
use likemetric_db::repositories::WidgetRepo;

use crate::background;
use crate::response::ScriptResponse;
use crate::state::AppState;

/// Query parameters accepted by every embed route.
#[derive(Debug, serde::Deserialize)]
pub struct EmbedParams {
    /// Widget identifier. Required; missing yields a 400 error script.
    pub id: Option<String>,
    /// `test=1` enables the admin's preview mode: status gate, trigger
    /// policy, reentrancy guard, and view counting are all bypassed.
    pub test: Option<String>,
}

impl EmbedParams {
    fn test_mode(&self) -> bool {
        self.test.as_deref() == Some("1")
    }
}

/// GET /embed/announcement?id=...&test=1
pub async fn serve_announcement(
    State(state): State<AppState>,
    Query(params): Query<EmbedParams>,
) -> Response {
    serve(WidgetKind::Announcement, state, params).await
}

/// GET /embed/banner?id=...&test=1
pub async fn serve_banner(
    State(state): State<AppState>,
    Query(params): Query<EmbedParams>,
) -> Response {
    serve(WidgetKind::Banner, state, params).await
}

/// GET /embed/spotlight?id=...&test=1
pub async fn serve_spotlight(
    State(state): State<AppState>,
    Query(params): Query<EmbedParams>,
) -> Response {
    serve(WidgetKind::Spotlight, state, params).await
}

/// GET /embed/video-tutorial?id=...&test=1
pub async fn serve_video_tutorial(
    State(state): State<AppState>,
    Query(params): Query<EmbedParams>,
) -> Response {
    serve(WidgetKind::VideoTutorial, state, params).await
}

async fn serve(kind: WidgetKind, state: AppState, params: EmbedParams) -> Response {
    use axum::response::IntoResponse;

    let test_mode = params.test_mode();

    let widget_id = match params.id.filter(|id| !id.trim().is_empty()) {
        Some(id) => id,
        None => {
            return ScriptResponse::with_status(
                StatusCode::BAD_REQUEST,
                console_error_script("widget id is required"),
            )
            .into_response();
        }
    };

    let row = match WidgetRepo::find_by_id(&state.pool, kind, &widget_id).await {
        Ok(row) => row,
        Err(err) => {
            tracing::error!(
                widget_id = %widget_id,
                widget_kind = kind.as_str(),
                error = %err,
                "Widget fetch failed"
            );
            return ScriptResponse::with_status(
                StatusCode::INTERNAL_SERVER_ERROR,
                console_error_script(&format!("widget could not be loaded: {err}")),
            )
            .into_response();
        }
    };

    let Some(row) = row else {
        tracing::debug!(widget_id = %widget_id, widget_kind = kind.as_str(), "Widget not found");
        return ScriptResponse::ok(console_warn_script("widget not found")).into_response();
    };

    // Inactive widgets serve a no-op: no content leaks before publication.
    if !test_mode && !WidgetStatus::parse(&row.status).is_servable() {
        return ScriptResponse::ok(console_warn_script("widget is not active")).into_response();
    }

    if !test_mode {
        background::spawn_view_increment(state.pool.clone(), kind, widget_id.clone());
    }

    let fields = normalize(row.raw_fields());
    let opts = ScriptOptions {
        test_mode,
        track_url: Some(state.config.track_url()),
    };
    let js = script::generate(kind, &widget_id, &fields, &opts);

    tracing::info!(
        widget_id = %widget_id,
        widget_kind = kind.as_str(),
        test_mode,
        "Widget script served"
    );
    ScriptResponse::ok(js).into_response()
}
