//! Video tutorial: overlay modal with an embedded player.
//!
//! Known providers (YouTube, Vimeo) render inside a 16:9 iframe; any other
//! valid URL renders in a native `<video>` element. No usable video means
//! no media block at all.

use crate::normalize::NormalizedWidget;
use crate::sanitize::escape_html;
use crate::video_url::{classify, VideoEmbed};
use crate::widget::WidgetKind;

use super::css::CssRule;
use super::{button_plan, ScriptOptions, ScriptPlan, TriggerPlan};

pub fn plan(widget_id: &str, fields: &NormalizedWidget, opts: &ScriptOptions) -> ScriptPlan {
    let kind = WidgetKind::VideoTutorial;
    let container = format!("#{}", kind.container_id(widget_id));

    let mut html = String::from("<div class=\"lm-card\">");
    if fields.show_close_button {
        html.push_str("<button class=\"lm-close\" data-lm-close aria-label=\"Close\">&times;</button>");
    }
    if !fields.title.is_empty() {
        html.push_str(&format!("<h2 class=\"lm-title\">{}</h2>", fields.title));
    }
    match classify(&fields.video_url) {
        VideoEmbed::Iframe(embed_url) => {
            html.push_str(&format!(
                "<div class=\"lm-frame\"><iframe src=\"{}\" frameborder=\"0\" \
                 allow=\"autoplay; fullscreen; picture-in-picture\" allowfullscreen></iframe></div>",
                escape_html(&embed_url)
            ));
        }
        VideoEmbed::File(file_url) => {
            html.push_str(&format!(
                "<video class=\"lm-video\" src=\"{}\" controls></video>",
                escape_html(&file_url)
            ));
        }
        VideoEmbed::None => {}
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

    let font = "-apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif";
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
            .prop("background", "rgba(0,0,0,0.6)")
            .prop("z-index", "2147483647")
            .prop("opacity", "0")
            .prop("transition", "opacity 0.2s ease"),
        CssRule::reset(&format!("{container} .lm-card"))
            .prop("position", "relative")
            .prop("display", "block")
            .prop("box-sizing", "border-box")
            .prop("max-width", "640px")
            .prop("width", "92%")
            .prop("padding", "24px")
            .prop("border-radius", "12px")
            .prop("box-shadow", "0 12px 40px rgba(0,0,0,0.3)")
            .prop("background", fields.background_color.clone())
            .prop("color", fields.text_color.clone())
            .prop("font-family", font)
            .prop("transition", "transform 0.2s ease"),
        CssRule::reset(&format!("{container} .lm-close"))
            .prop("position", "absolute")
            .prop("top", "10px")
            .prop("right", "14px")
            .prop("font-size", "22px")
            .prop("line-height", "1")
            .prop("cursor", "pointer")
            .prop("color", fields.text_color.clone()),
        CssRule::reset(&format!("{container} .lm-title"))
            .prop("display", "block")
            .prop("font-size", "18px")
            .prop("font-weight", "700")
            .prop("margin", "0 0 12px")
            .prop("color", fields.text_color.clone())
            .prop("font-family", font),
        // 16:9 letterbox for provider iframes.
        CssRule::reset(&format!("{container} .lm-frame"))
            .prop("position", "relative")
            .prop("display", "block")
            .prop("width", "100%")
            .prop("padding-top", "56.25%")
            .prop("margin", "0 0 12px"),
        CssRule::reset(&format!("{container} .lm-frame iframe"))
            .prop("position", "absolute")
            .prop("top", "0")
            .prop("left", "0")
            .prop("width", "100%")
            .prop("height", "100%")
            .prop("border", "0")
            .prop("border-radius", "8px"),
        CssRule::reset(&format!("{container} .lm-video"))
            .prop("display", "block")
            .prop("width", "100%")
            .prop("border-radius", "8px")
            .prop("margin", "0 0 12px"),
        CssRule::reset(&format!("{container} .lm-desc"))
            .prop("display", "block")
            .prop("font-size", "14px")
            .prop("line-height", "1.5")
            .prop("margin", "0 0 16px")
            .prop("color", fields.text_color.clone())
            .prop("font-family", font),
        CssRule::reset(&format!("{container} .lm-action"))
            .prop("display", "inline-block")
            .prop("padding", "10px 24px")
            .prop("border-radius", "6px")
            .prop("font-size", "14px")
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
        overlay: true,
        button: button_plan(fields),
        trigger: TriggerPlan::from_fields(fields),
        close_transform: "scale(0.95)",
        track_url: opts.track_url.clone(),
        test_mode: opts.test_mode,
    }
}
