//! Widget row models.
//!
//! The four widget tables (`announcements`, `banners`, `spotlights`,
//! `video_tutorials`) share one column set, so a single [`WidgetRow`] maps
//! all of them. The builder UI writes these rows; the delivery service only
//! reads them and bumps counters.

use chrono::{DateTime, Utc};
use likemetric_core::normalize::RawWidgetFields;
use serde::Serialize;
use sqlx::FromRow;

/// A row from one of the widget tables.
///
/// Almost everything is nullable; normalization in `likemetric-core` turns
/// this into a bounded field set with defaults.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WidgetRow {
    pub id: String,
    pub status: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub button_text: Option<String>,
    pub button_url: Option<String>,
    pub button_action: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub button_color: Option<String>,
    pub trigger_type: Option<String>,
    pub delay: Option<i64>,
    pub show_close_button: Option<bool>,
    pub views: i64,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WidgetRow {
    /// Extract the delivery-relevant fields for normalization.
    pub fn raw_fields(&self) -> RawWidgetFields {
        RawWidgetFields {
            title: self.title.clone(),
            description: self.description.clone(),
            button_text: self.button_text.clone(),
            button_url: self.button_url.clone(),
            button_action: self.button_action.clone(),
            image_url: self.image_url.clone(),
            video_url: self.video_url.clone(),
            background_color: self.background_color.clone(),
            text_color: self.text_color.clone(),
            button_color: self.button_color.clone(),
            trigger_type: self.trigger_type.clone(),
            delay: self.delay,
            show_close_button: self.show_close_button,
        }
    }
}

/// A row from the `widget_clicks` event table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ClickEvent {
    pub id: i64,
    pub widget_id: String,
    pub widget_kind: String,
    pub clicked_at: DateTime<Utc>,
}
