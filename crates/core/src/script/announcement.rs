//! Announcement modal: full-page overlay with a centered card.

use crate::normalize::NormalizedWidget;
use crate::sanitize::escape_html;
use crate::widget::WidgetKind;

use super::css::CssRule;
use super::{button_plan, ScriptOptions, ScriptPlan, TriggerPlan};

pub fn plan(widget_id: &str, fields: &NormalizedWidget, opts: &ScriptOptions) -> ScriptPlan {
    let kind = WidgetKind::Announcement;
    let container = format!("#{}", kind.container_id(widget_id));

    let mut html = String::from("<div class=\"lm-card\">");
    if fields.show_close_button {
        html.push_str("<button class=\"lm-close\" data-lm-close aria-label=\"Close\">&times;</button>");
    }
    if !fields.image_url.is_empty() {
        html.push_str(&format!(
            "<img class=\"lm-media\" src=\"{}\" alt=\"\">",
            escape_html(&fields.image_url)
        ));
    }
    if !fields.title.is_empty() {
        html.push_str(&format!("<h2 class=\"lm-title\">{}</h2>", fields.title));
    }
    if !fields.description.is_empty() {
        html.push_str(&format!("<p class=\"lm-desc\">{}</p>", fields.description));
    }
    if !fields.button_text.is_empty() {
        html.push_str(&format!(
            "<button class=\"lm-action\" data-lm-action>{}</button>",
            fields.button_text
        ));
    }
    html.push_str("</div>");

    let css = vec![
        CssRule::reset(&container)
            .prop("position", "fixed")
            .prop("top", "0")
            .prop("left", "0")
            .prop("right", "0")
            .prop("bottom", "0")
            .prop("display", "flex")
            .prop("align-items", "center")
            .prop("justify-content", "center")
            .prop("background", "rgba(0,0,0,0.5)")
            .prop("z-index", "2147483647")
            .prop("opacity", "0")
            .prop("transition", "opacity 0.2s ease"),
        CssRule::reset(&format!("{container} .lm-card"))
            .prop("position", "relative")
            .prop("display", "block")
            .prop("box-sizing", "border-box")
            .prop("max-width", "420px")
            .prop("width", "90%")
            .prop("padding", "32px")
            .prop("border-radius", "12px")
            .prop("box-shadow", "0 12px 40px rgba(0,0,0,0.25)")
            .prop("background", fields.background_color.clone())
            .prop("color", fields.text_color.clone())
            .prop(
                "font-family",
                "-apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            )
            .prop("text-align", "center")
            .prop("transition", "transform 0.2s ease"),
        CssRule::reset(&format!("{container} .lm-close"))
            .prop("position", "absolute")
            .prop("top", "10px")
            .prop("right", "14px")
            .prop("font-size", "22px")
            .prop("line-height", "1")
            .prop("cursor", "pointer")
            .prop("color", fields.text_color.clone()),
        CssRule::reset(&format!("{container} .lm-media"))
            .prop("display", "block")
            .prop("width", "100%")
            .prop("border-radius", "8px")
            .prop("margin", "0 0 16px"),
        CssRule::reset(&format!("{container} .lm-title"))
            .prop("display", "block")
            .prop("font-size", "20px")
            .prop("font-weight", "700")
            .prop("margin", "0 0 8px")
            .prop("color", fields.text_color.clone())
            .prop(
                "font-family",
                "-apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            ),
        CssRule::reset(&format!("{container} .lm-desc"))
            .prop("display", "block")
            .prop("font-size", "14px")
            .prop("line-height", "1.5")
            .prop("margin", "0 0 20px")
            .prop("color", fields.text_color.clone())
            .prop(
                "font-family",
                "-apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            ),
        CssRule::reset(&format!("{container} .lm-action"))
            .prop("display", "inline-block")
            .prop("padding", "10px 24px")
            .prop("border-radius", "6px")
            .prop("font-size", "14px")
            .prop("font-weight", "600")
            .prop("cursor", "pointer")
            .prop("background", fields.button_color.clone())
            .prop("color", "#ffffff")
            .prop(
                "font-family",
                "-apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif",
            ),
    ];

    ScriptPlan {
        kind,
        widget_id: widget_id.to_string(),
        css,
        html,
        overlay: true,
        button: button_plan(fields),
        trigger: TriggerPlan::from_fields(fields),
        close_transform: "scale(0.95)",
        track_url: opts.track_url.clone(),
        test_mode: opts.test_mode,
    }
}
