//! Banner: fixed bar pinned to the top of the viewport.

use crate::normalize::NormalizedWidget;
use crate::widget::WidgetKind;

use super::css::CssRule;
use super::{button_plan, ScriptOptions, ScriptPlan, TriggerPlan};

pub fn plan(widget_id: &str, fields: &NormalizedWidget, opts: &ScriptOptions) -> ScriptPlan {
    let kind = WidgetKind::Banner;
    let container = format!("#{}", kind.container_id(widget_id));

    let mut html = String::from("<div class=\"lm-inner\">");
    html.push_str("<span class=\"lm-text\">");
    if !fields.title.is_empty() {
        html.push_str(&format!("<strong class=\"lm-title\">{}</strong>", fields.title));
    }
    if !fields.description.is_empty() {
        if !fields.title.is_empty() {
            html.push_str("&nbsp;");
        }
        html.push_str(&fields.description);
    }
    html.push_str("</span>");
    if !fields.button_text.is_empty() {
        html.push_str(&format!(
            "<button class=\"lm-action\" data-lm-action>{}</button>",
            fields.button_text
        ));
    }
    if fields.show_close_button {
        html.push_str("<button class=\"lm-close\" data-lm-close aria-label=\"Close\">&times;</button>");
    }
    html.push_str("</div>");

    let font = "-apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif";
    let css = vec![
        CssRule::reset(&container)
            .prop("position", "fixed")
            .prop("top", "0")
            .prop("left", "0")
            .prop("right", "0")
            .prop("display", "block")
            .prop("box-sizing", "border-box")
            .prop("background", fields.background_color.clone())
            .prop("color", fields.text_color.clone())
            .prop("z-index", "2147483647")
            .prop("box-shadow", "0 2px 8px rgba(0,0,0,0.15)")
            .prop("opacity", "0")
            .prop("transition", "opacity 0.2s ease, transform 0.2s ease"),
        CssRule::reset(&format!("{container} .lm-inner"))
            .prop("display", "flex")
            .prop("align-items", "center")
            .prop("justify-content", "center")
            .prop("gap", "12px")
            .prop("padding", "12px 44px 12px 16px")
            .prop("font-family", font),
        CssRule::reset(&format!("{container} .lm-text"))
            .prop("display", "inline")
            .prop("font-size", "14px")
            .prop("line-height", "1.4")
            .prop("color", fields.text_color.clone())
            .prop("font-family", font),
        CssRule::reset(&format!("{container} .lm-title"))
            .prop("display", "inline")
            .prop("font-size", "14px")
            .prop("font-weight", "700")
            .prop("color", fields.text_color.clone())
            .prop("font-family", font),
        CssRule::reset(&format!("{container} .lm-action"))
            .prop("display", "inline-block")
            .prop("padding", "6px 16px")
            .prop("border-radius", "4px")
            .prop("font-size", "13px")
            .prop("font-weight", "600")
            .prop("cursor", "pointer")
            .prop("background", fields.button_color.clone())
            .prop("color", "#ffffff")
            .prop("font-family", font),
        CssRule::reset(&format!("{container} .lm-close"))
            .prop("position", "absolute")
            .prop("top", "50%")
            .prop("right", "14px")
            .prop("transform", "translateY(-50%)")
            .prop("font-size", "20px")
            .prop("line-height", "1")
            .prop("cursor", "pointer")
            .prop("color", fields.text_color.clone()),
    ];

    ScriptPlan {
        kind,
        widget_id: widget_id.to_string(),
        css,
        html,
        // A banner never covers the page; background clicks pass through.
        overlay: false,
        button: button_plan(fields),
        trigger: TriggerPlan::from_fields(fields),
        close_transform: "translateY(-100%)",
        track_url: opts.track_url.clone(),
        test_mode: opts.test_mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, RawWidgetFields};

    #[test]
    fn banner_is_not_an_overlay_and_slides_up_on_close() {
        let fields = normalize(RawWidgetFields {
            title: Some("Sale".into()),
            ..Default::default()
        });
        let p = plan("b1", &fields, &ScriptOptions::default());
        assert!(!p.overlay);
        assert_eq!(p.close_transform, "translateY(-100%)");
    }

    #[test]
    fn text_block_renders_title_and_description_inline() {
        let fields = normalize(RawWidgetFields {
            title: Some("Sale".into()),
            description: Some("50% off today".into()),
            ..Default::default()
        });
        let p = plan("b1", &fields, &ScriptOptions::default());
        assert!(p.html.contains("<strong class=\"lm-title\">Sale</strong>"));
        assert!(p.html.contains("50% off today"));
    }
}
