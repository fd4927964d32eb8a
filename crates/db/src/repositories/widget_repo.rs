//! Repository for the widget tables and the `widget_clicks` event log.
//!
//! The table name comes from [`WidgetKind::table_name`] (a closed enum, so
//! `format!`-interpolating it is safe); all values are bound parameters.

use likemetric_core::widget::WidgetKind;
use sqlx::PgPool;

use crate::models::widget::{ClickEvent, WidgetRow};

/// Shared column list for widget table queries.
const WIDGET_COLUMNS: &str = "\
    id, status, title, description, button_text, button_url, button_action, \
    image_url, video_url, background_color, text_color, button_color, \
    trigger_type, delay, show_close_button, views, clicks, \
    created_at, updated_at";

/// Provides data access for widget rows and click events.
pub struct WidgetRepo;

impl WidgetRepo {
    /// Fetch a single widget by id from the table for `kind`.
    pub async fn find_by_id(
        pool: &PgPool,
        kind: WidgetKind,
        widget_id: &str,
    ) -> Result<Option<WidgetRow>, sqlx::Error> {
        let query = format!(
            "SELECT {WIDGET_COLUMNS} FROM {} WHERE id = $1",
            kind.table_name()
        );
        sqlx::query_as::<_, WidgetRow>(&query)
            .bind(widget_id)
            .fetch_optional(pool)
            .await
    }

    /// Bump the view counter for a widget.
    ///
    /// Plain `views = views + 1`; concurrent serves may lose increments,
    /// which the analytics contract accepts.
    pub async fn increment_views(
        pool: &PgPool,
        kind: WidgetKind,
        widget_id: &str,
    ) -> Result<(), sqlx::Error> {
        let query = format!(
            "UPDATE {} SET views = views + 1 WHERE id = $1",
            kind.table_name()
        );
        sqlx::query(&query).bind(widget_id).execute(pool).await?;
        Ok(())
    }

    /// Record an action-button click: bump the counter and append an event
    /// row, atomically.
    pub async fn record_click(
        pool: &PgPool,
        kind: WidgetKind,
        widget_id: &str,
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update = format!(
            "UPDATE {} SET clicks = clicks + 1 WHERE id = $1",
            kind.table_name()
        );
        sqlx::query(&update).bind(widget_id).execute(&mut *tx).await?;

        sqlx::query("INSERT INTO widget_clicks (widget_id, widget_kind) VALUES ($1, $2)")
            .bind(widget_id)
            .bind(kind.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await
    }

    /// List click events for a widget, newest first.
    pub async fn list_clicks(
        pool: &PgPool,
        widget_id: &str,
    ) -> Result<Vec<ClickEvent>, sqlx::Error> {
        sqlx::query_as::<_, ClickEvent>(
            "SELECT id, widget_id, widget_kind, clicked_at \
             FROM widget_clicks WHERE widget_id = $1 ORDER BY clicked_at DESC",
        )
        .bind(widget_id)
        .fetch_all(pool)
        .await
    }
}
