//! Raw row → bounded, sanitized field set.
//!
//! The builder UI writes whatever it likes; this module is the trust
//! boundary. Normalization is total: every field has a safe fallback and
//! malformed input never produces an error, only a default.

use crate::sanitize::{escape_html, is_valid_url};
use crate::widget::{ButtonAction, TriggerKind};

/// Default modal/background color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
/// Default text color.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";
/// Default action button color.
pub const DEFAULT_BUTTON_COLOR: &str = "#000000";

/// Trigger delay bounds and default, in milliseconds.
pub const MIN_DELAY_MS: i64 = 0;
pub const MAX_DELAY_MS: i64 = 60_000;
pub const DEFAULT_DELAY_MS: i64 = 2_000;

/// Scroll threshold bounds and default, in percent of page height.
pub const MIN_SCROLL_PERCENT: i64 = 1;
pub const MAX_SCROLL_PERCENT: i64 = 100;
pub const DEFAULT_SCROLL_PERCENT: i64 = 50;

/// Raw delivery-relevant fields as read from a widget row.
///
/// All-optional on purpose; the database allows NULL almost everywhere.
#[derive(Debug, Clone, Default)]
pub struct RawWidgetFields {
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
}

/// Sanitized, defaulted fields ready for template interpolation.
///
/// String fields are already HTML-escaped; URL fields are either valid
/// `http(s)` URLs or empty; color fields are hex colors or the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedWidget {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub button_url: String,
    pub button_action: ButtonAction,
    pub image_url: String,
    pub video_url: String,
    pub background_color: String,
    pub text_color: String,
    pub button_color: String,
    pub trigger: TriggerKind,
    pub delay_ms: u32,
    pub scroll_threshold: u8,
    pub show_close_button: bool,
}

/// Clamp a configured delay to `[0, 60000]` ms, defaulting to 2000.
pub fn clamp_delay(delay: Option<i64>) -> u32 {
    let value = delay.unwrap_or(DEFAULT_DELAY_MS);
    value.clamp(MIN_DELAY_MS, MAX_DELAY_MS) as u32
}

/// Derive a 1–100 scroll threshold from the overloaded `delay` column.
///
/// The schema stores the `scroll_percent` threshold in the same column as
/// the millisecond delay; this is where the overload is resolved into a
/// typed value. Missing values default to 50%.
pub fn scroll_threshold(delay: Option<i64>) -> u8 {
    let value = delay.unwrap_or(DEFAULT_SCROLL_PERCENT);
    value.clamp(MIN_SCROLL_PERCENT, MAX_SCROLL_PERCENT) as u8
}

fn sanitized_text(value: Option<String>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => escape_html(&s),
        _ => String::new(),
    }
}

fn sanitized_url(value: Option<String>) -> String {
    match value {
        Some(s) if is_valid_url(&s) => s,
        _ => String::new(),
    }
}

// `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`. Anything else could smuggle
// extra declarations (or a closing brace) into the generated stylesheet.
fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 3 | 4 | 6 | 8)
                && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

fn color_or(value: Option<String>, default: &str) -> String {
    match value {
        Some(s) if is_hex_color(s.trim()) => s.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Normalize a raw row into a bounded field set. Total; never fails.
pub fn normalize(raw: RawWidgetFields) -> NormalizedWidget {
    let trigger = TriggerKind::parse(raw.trigger_type.as_deref());
    NormalizedWidget {
        title: sanitized_text(raw.title),
        description: sanitized_text(raw.description),
        button_text: sanitized_text(raw.button_text),
        button_url: sanitized_url(raw.button_url),
        button_action: ButtonAction::parse(raw.button_action.as_deref()),
        image_url: sanitized_url(raw.image_url),
        video_url: sanitized_url(raw.video_url),
        background_color: color_or(raw.background_color, DEFAULT_BACKGROUND_COLOR),
        text_color: color_or(raw.text_color, DEFAULT_TEXT_COLOR),
        button_color: color_or(raw.button_color, DEFAULT_BUTTON_COLOR),
        trigger,
        delay_ms: clamp_delay(raw.delay),
        scroll_threshold: scroll_threshold(raw.delay),
        show_close_button: raw.show_close_button.unwrap_or(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- clamp_delay ---------------------------------------------------------

    #[test]
    fn negative_delay_clamps_to_zero() {
        assert_eq!(clamp_delay(Some(-5)), 0);
    }

    #[test]
    fn oversized_delay_clamps_to_max() {
        assert_eq!(clamp_delay(Some(999_999)), 60_000);
    }

    #[test]
    fn missing_delay_defaults_to_two_seconds() {
        assert_eq!(clamp_delay(None), 2_000);
    }

    #[test]
    fn in_range_delay_passes_through() {
        assert_eq!(clamp_delay(Some(1_500)), 1_500);
    }

    // -- scroll_threshold ----------------------------------------------------

    #[test]
    fn threshold_clamps_into_percent_range() {
        assert_eq!(scroll_threshold(Some(0)), 1);
        assert_eq!(scroll_threshold(Some(250)), 100);
        assert_eq!(scroll_threshold(Some(50)), 50);
        assert_eq!(scroll_threshold(None), 50);
    }

    // -- normalize -----------------------------------------------------------

    #[test]
    fn empty_row_gets_defaults() {
        let n = normalize(RawWidgetFields::default());
        assert_eq!(n.background_color, "#ffffff");
        assert_eq!(n.text_color, "#000000");
        assert_eq!(n.button_color, "#000000");
        assert_eq!(n.delay_ms, 2_000);
        assert!(n.show_close_button);
        assert!(n.title.is_empty());
        assert_eq!(n.trigger, TriggerKind::AutoShow);
        assert_eq!(n.button_action, ButtonAction::Url);
    }

    #[test]
    fn text_fields_are_html_escaped() {
        let n = normalize(RawWidgetFields {
            title: Some("<script>alert(1)</script>".into()),
            ..Default::default()
        });
        assert!(!n.title.contains('<'));
        assert!(n.title.contains("&lt;script&gt;"));
    }

    #[test]
    fn invalid_urls_collapse_to_empty() {
        let n = normalize(RawWidgetFields {
            button_url: Some("javascript:alert(1)".into()),
            image_url: Some("not a url".into()),
            video_url: Some("https://youtu.be/abc123".into()),
            ..Default::default()
        });
        assert!(n.button_url.is_empty());
        assert!(n.image_url.is_empty());
        assert_eq!(n.video_url, "https://youtu.be/abc123");
    }

    #[test]
    fn whitespace_only_strings_collapse_to_empty() {
        let n = normalize(RawWidgetFields {
            title: Some("   ".into()),
            button_text: Some(String::new()),
            ..Default::default()
        });
        assert!(n.title.is_empty());
        assert!(n.button_text.is_empty());
    }

    #[test]
    fn non_hex_colors_fall_back_to_defaults() {
        let n = normalize(RawWidgetFields {
            background_color: Some("#fff;}body{display:none".into()),
            text_color: Some("red".into()),
            button_color: Some("url(https://evil.example/x)".into()),
            ..Default::default()
        });
        assert_eq!(n.background_color, "#ffffff");
        assert_eq!(n.text_color, "#000000");
        assert_eq!(n.button_color, "#000000");
    }

    #[test]
    fn hex_colors_pass_through() {
        let n = normalize(RawWidgetFields {
            background_color: Some("#1A2B3C".into()),
            text_color: Some(" #fff ".into()),
            button_color: Some("#00ff0080".into()),
            ..Default::default()
        });
        assert_eq!(n.background_color, "#1A2B3C");
        assert_eq!(n.text_color, "#fff");
        assert_eq!(n.button_color, "#00ff0080");
    }

    #[test]
    fn explicit_false_close_button_is_respected() {
        let n = normalize(RawWidgetFields {
            show_close_button: Some(false),
            ..Default::default()
        });
        assert!(!n.show_close_button);
    }
}
