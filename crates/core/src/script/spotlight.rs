//! Spotlight: compact card anchored to the bottom-right corner.

use crate::normalize::NormalizedWidget;
use crate::sanitize::escape_html;
use crate::widget::WidgetKind;

use super::css::CssRule;
use super::{button_plan, ScriptOptions, ScriptPlan, TriggerPlan};

pub fn plan(widget_id: &str, fields: &NormalizedWidget, opts: &ScriptOptions) -> ScriptPlan {
    let kind = WidgetKind::Spotlight;
    let container = format!("#{}", kind.container_id(widget_id));

    let mut html = String::new();
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
        html.push_str(&format!("<h3 class=\"lm-title\">{}</h3>", fields.title));
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

    let font = "-apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif";
    let css = vec![
        CssRule::reset(&container)
            .prop("position", "fixed")
            .prop("right", "20px")
            .prop("bottom", "20px")
            .prop("display", "block")
            .prop("box-sizing", "border-box")
            .prop("width", "320px")
            .prop("max-width", "calc(100vw - 40px)")
            .prop("padding", "20px")
            .prop("border-radius", "10px")
            .prop("box-shadow", "0 8px 30px rgba(0,0,0,0.2)")
            .prop("background", fields.background_color.clone())
            .prop("color", fields.text_color.clone())
            .prop("z-index", "2147483647")
            .prop("font-family", font)
            .prop("opacity", "0")
            .prop("transition", "opacity 0.2s ease, transform 0.2s ease"),
        CssRule::reset(&format!("{container} .lm-close"))
            .prop("position", "absolute")
            .prop("top", "8px")
            .prop("right", "12px")
            .prop("font-size", "18px")
            .prop("line-height", "1")
            .prop("cursor", "pointer")
            .prop("color", fields.text_color.clone()),
        CssRule::reset(&format!("{container} .lm-media"))
            .prop("display", "block")
            .prop("width", "100%")
            .prop("border-radius", "6px")
            .prop("margin", "0 0 12px"),
        CssRule::reset(&format!("{container} .lm-title"))
            .prop("display", "block")
            .prop("font-size", "16px")
            .prop("font-weight", "700")
            .prop("margin", "0 0 6px")
            .prop("color", fields.text_color.clone())
            .prop("font-family", font),
        CssRule::reset(&format!("{container} .lm-desc"))
            .prop("display", "block")
            .prop("font-size", "13px")
            .prop("line-height", "1.5")
            .prop("margin", "0 0 14px")
            .prop("color", fields.text_color.clone())
            .prop("font-family", font),
        CssRule::reset(&format!("{container} .lm-action"))
            .prop("display", "inline-block")
            .prop("padding", "8px 18px")
            .prop("border-radius", "5px")
            .prop("font-size", "13px")
            .prop("font-weight", "600")
            .prop("cursor", "pointer")
            .prop("background", fields.button_color.clone())
            .prop("color", "#ffffff")
            .prop("font-family", font),
    ];

    ScriptPlan {
        kind,
        widget_id: widget_id.to_string(),
        css,
        html,
        overlay: false,
        button: button_plan(fields),
        trigger: TriggerPlan::from_fields(fields),
        close_transform: "translateY(12px)",
        track_url: opts.track_url.clone(),
        test_mode: opts.test_mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, RawWidgetFields};

    #[test]
    fn card_sits_outside_any_overlay() {
        let fields = normalize(RawWidgetFields {
            title: Some("New feature".into()),
            ..Default::default()
        });
        let p = plan("s1", &fields, &ScriptOptions::default());
        assert!(!p.overlay);
        assert!(p.html.contains("lm-title"));
    }

    #[test]
    fn image_attribute_is_html_escaped() {
        let fields = normalize(RawWidgetFields {
            image_url: Some("https://example.com/a.png?x=1&y=2".into()),
            ..Default::default()
        });
        let p = plan("s1", &fields, &ScriptOptions::default());
        assert!(p.html.contains("a.png?x=1&amp;y=2"));
    }
}
