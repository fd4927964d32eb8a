//! Embed script generation.
//!
//! A widget script is described first as a [`ScriptPlan`] (structured data:
//! guard flag, scoped CSS, pre-escaped markup, trigger policy, analytics
//! target) and then rendered to JavaScript by a single emitter
//! ([`emit::emit`]) shared by all four widget variants. Escaping happens at
//! each interpolation point, never ad hoc inside templates.

pub mod css;
pub mod emit;
pub mod stub;

mod announcement;
mod banner;
mod spotlight;
mod video_tutorial;

use crate::normalize::NormalizedWidget;
use crate::widget::{ButtonAction, TriggerKind, WidgetKind};

pub use css::CssRule;
pub use stub::{console_error_script, console_warn_script};

/// Fixed close-animation duration; must match the CSS transition.
pub const CLOSE_ANIMATION_MS: u32 = 200;

/// Fixed display delay applied in test mode regardless of trigger policy.
pub const TEST_MODE_DELAY_MS: u32 = 500;

/// Request-scoped options threaded into script generation.
#[derive(Debug, Clone, Default)]
pub struct ScriptOptions {
    /// `test=1`: bypass the reentrancy guard and trigger policy.
    pub test_mode: bool,
    /// Absolute URL of the click-tracking endpoint, if configured.
    pub track_url: Option<String>,
}

/// Action button behavior baked into the generated script.
#[derive(Debug, Clone)]
pub struct ButtonPlan {
    pub action: ButtonAction,
    /// Validated `http(s)` URL; empty means the button falls back to close.
    pub url: String,
}

/// Trigger policy with its typed parameter, resolved from the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerPlan {
    /// `auto_show` / `time_on_page`: show after a fixed delay.
    Delay { ms: u32 },
    /// `scroll_percent`: show once scrolled past a page-height percentage.
    ScrollPercent { threshold: u8 },
    /// `exit_intent`: show when the cursor leaves through the top edge.
    ExitIntent,
}

impl TriggerPlan {
    /// Resolve the typed trigger from normalized fields.
    pub fn from_fields(fields: &NormalizedWidget) -> Self {
        match fields.trigger {
            TriggerKind::AutoShow | TriggerKind::TimeOnPage => TriggerPlan::Delay {
                ms: fields.delay_ms,
            },
            TriggerKind::ScrollPercent => TriggerPlan::ScrollPercent {
                threshold: fields.scroll_threshold,
            },
            TriggerKind::ExitIntent => TriggerPlan::ExitIntent,
        }
    }
}

/// Structured description of one embed script, ready for emission.
#[derive(Debug, Clone)]
pub struct ScriptPlan {
    pub kind: WidgetKind,
    pub widget_id: String,
    /// Scoped stylesheet rules.
    pub css: Vec<CssRule>,
    /// Container inner markup. Already HTML-escaped by the variant builder.
    pub html: String,
    /// Whether the container is a full-page overlay (click-outside closes).
    pub overlay: bool,
    pub button: Option<ButtonPlan>,
    pub trigger: TriggerPlan,
    /// CSS transform applied while dismissing (variant-specific).
    pub close_transform: &'static str,
    pub track_url: Option<String>,
    pub test_mode: bool,
}

impl ScriptPlan {
    pub fn guard_flag(&self) -> String {
        self.kind.guard_flag(&self.widget_id)
    }

    pub fn container_id(&self) -> String {
        self.kind.container_id(&self.widget_id)
    }
}

/// Build the plan for a widget and render it to JavaScript.
pub fn generate(
    kind: WidgetKind,
    widget_id: &str,
    fields: &NormalizedWidget,
    opts: &ScriptOptions,
) -> String {
    let plan = match kind {
        WidgetKind::Announcement => announcement::plan(widget_id, fields, opts),
        WidgetKind::Banner => banner::plan(widget_id, fields, opts),
        WidgetKind::Spotlight => spotlight::plan(widget_id, fields, opts),
        WidgetKind::VideoTutorial => video_tutorial::plan(widget_id, fields, opts),
    };
    emit::emit(&plan)
}

/// Button plan derived from normalized fields; `None` when there is no
/// button text (the button is omitted, not rendered empty).
fn button_plan(fields: &NormalizedWidget) -> Option<ButtonPlan> {
    if fields.button_text.is_empty() {
        return None;
    }
    Some(ButtonPlan {
        action: fields.button_action,
        url: fields.button_url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{normalize, RawWidgetFields};

    fn active_fields(raw: RawWidgetFields) -> NormalizedWidget {
        normalize(raw)
    }

    fn default_opts() -> ScriptOptions {
        ScriptOptions {
            test_mode: false,
            track_url: Some("https://widgets.likemetric.io/api/v1/track".into()),
        }
    }

    #[test]
    fn trigger_plan_resolves_typed_parameters() {
        let fields = active_fields(RawWidgetFields {
            trigger_type: Some("scroll_percent".into()),
            delay: Some(50),
            ..Default::default()
        });
        assert_eq!(
            TriggerPlan::from_fields(&fields),
            TriggerPlan::ScrollPercent { threshold: 50 }
        );

        let fields = active_fields(RawWidgetFields {
            trigger_type: Some("time_on_page".into()),
            delay: Some(3_000),
            ..Default::default()
        });
        assert_eq!(
            TriggerPlan::from_fields(&fields),
            TriggerPlan::Delay { ms: 3_000 }
        );
    }

    #[test]
    fn every_kind_generates_a_guarded_script() {
        let fields = active_fields(RawWidgetFields {
            title: Some("Hello".into()),
            ..Default::default()
        });
        for kind in [
            WidgetKind::Announcement,
            WidgetKind::Banner,
            WidgetKind::Spotlight,
            WidgetKind::VideoTutorial,
        ] {
            let js = generate(kind, "w1", &fields, &default_opts());
            assert!(js.contains(&kind.guard_flag("w1")), "{kind:?}");
            assert!(js.contains(kind.manual_trigger()), "{kind:?}");
            // Exactly one injection site per script.
            assert_eq!(js.matches("document.body.appendChild").count(), 1);
        }
    }

    #[test]
    fn empty_button_text_omits_the_button() {
        let fields = active_fields(RawWidgetFields {
            title: Some("Hello".into()),
            button_url: Some("https://example.com".into()),
            ..Default::default()
        });
        let js = generate(WidgetKind::Announcement, "w1", &fields, &default_opts());
        assert!(!js.contains("data-lm-action"));
    }

    #[test]
    fn hostile_title_is_escaped_in_output() {
        let fields = active_fields(RawWidgetFields {
            title: Some("</script><script>alert(1)</script>".into()),
            ..Default::default()
        });
        let js = generate(WidgetKind::Announcement, "w1", &fields, &default_opts());
        assert!(!js.contains("</script>"));
        assert!(!js.contains("<script>"));
    }
}
