//! Widget domain types shared by the normalizer, emitter, and HTTP layer.

use serde::{Deserialize, Serialize};

/// The four deliverable widget variants.
///
/// Each variant maps to its own table, reentrancy-guard prefix, and manual
/// trigger name on `window`, so two widgets embedded on the same host page
/// never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Announcement,
    Banner,
    Spotlight,
    VideoTutorial,
}

impl WidgetKind {
    /// Table holding rows of this widget kind.
    pub fn table_name(self) -> &'static str {
        match self {
            WidgetKind::Announcement => "announcements",
            WidgetKind::Banner => "banners",
            WidgetKind::Spotlight => "spotlights",
            WidgetKind::VideoTutorial => "video_tutorials",
        }
    }

    /// Canonical short name used in logs and click events.
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetKind::Announcement => "announcement",
            WidgetKind::Banner => "banner",
            WidgetKind::Spotlight => "spotlight",
            WidgetKind::VideoTutorial => "video_tutorial",
        }
    }

    /// Parse the canonical short name; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "announcement" => WidgetKind::Announcement,
            "banner" => WidgetKind::Banner,
            "spotlight" => WidgetKind::Spotlight,
            "video_tutorial" => WidgetKind::VideoTutorial,
            _ => return None,
        })
    }

    /// Window-global reentrancy flag for a given widget id.
    ///
    /// The prefixes (`aw_`, `bw_`, `sw_`, `vt_`) are part of the embed
    /// contract: host pages may inspect them for debugging.
    pub fn guard_flag(self, widget_id: &str) -> String {
        let prefix = match self {
            WidgetKind::Announcement => "aw_",
            WidgetKind::Banner => "bw_",
            WidgetKind::Spotlight => "sw_",
            WidgetKind::VideoTutorial => "vt_",
        };
        format!("{prefix}{widget_id}")
    }

    /// Name of the manual trigger function exposed on `window`.
    pub fn manual_trigger(self) -> &'static str {
        match self {
            WidgetKind::Announcement => "showAnnouncement",
            WidgetKind::Banner => "showBanner",
            WidgetKind::Spotlight => "showSpotlight",
            WidgetKind::VideoTutorial => "showVideoTutorial",
        }
    }

    /// DOM id of the container element the script injects.
    pub fn container_id(self, widget_id: &str) -> String {
        format!("lm-{}-{widget_id}", self.as_str().replace('_', "-"))
    }
}

/// Lifecycle status of a widget row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetStatus {
    Draft,
    Active,
    Published,
    /// Anything we do not recognize; treated as not servable.
    Unknown,
}

impl WidgetStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "draft" => WidgetStatus::Draft,
            "active" => WidgetStatus::Active,
            "published" => WidgetStatus::Published,
            _ => WidgetStatus::Unknown,
        }
    }

    /// Whether a non-test request may receive this widget's script.
    pub fn is_servable(self) -> bool {
        matches!(self, WidgetStatus::Active | WidgetStatus::Published)
    }
}

/// Display trigger policy configured on the widget row.
///
/// Unrecognized or missing values fall back to `AutoShow`; the builder UI
/// has historically written free-form strings here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerKind {
    #[default]
    AutoShow,
    TimeOnPage,
    ScrollPercent,
    ExitIntent,
}

impl TriggerKind {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("time_on_page") => TriggerKind::TimeOnPage,
            Some("scroll_percent") => TriggerKind::ScrollPercent,
            Some("exit_intent") => TriggerKind::ExitIntent,
            _ => TriggerKind::AutoShow,
        }
    }
}

/// What the action button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonAction {
    /// Open `button_url` in a new tab (default).
    #[default]
    Url,
    /// Dismiss the widget.
    Close,
}

impl ButtonAction {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("close") => ButtonAction::Close,
            _ => ButtonAction::Url,
        }
    }
}
