//! Fire-and-forget background work.

use likemetric_core::widget::WidgetKind;
use likemetric_db::repositories::WidgetRepo;
use sqlx::PgPool;

/// Bump a widget's view counter without blocking the response.
///
/// Best-effort by contract: failures are logged and swallowed, and
/// concurrent serves may lose increments. Never awaited by callers.
pub fn spawn_view_increment(pool: PgPool, kind: WidgetKind, widget_id: String) {
    tokio::spawn(async move {
        if let Err(err) = WidgetRepo::increment_views(&pool, kind, &widget_id).await {
            tracing::warn!(
                widget_id = %widget_id,
                widget_kind = kind.as_str(),
                error = %err,
                "View count increment failed"
            );
        }
    });
}
