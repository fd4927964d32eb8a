//! The single JS emission core shared by all widget variants.
//!
//! Renders a [`ScriptPlan`](super::ScriptPlan) into one self-executing
//! script. The output contract: it must always parse, never throw on an
//! arbitrary host page, create the widget at most once per page load
//! (outside test mode), and keep every interpolated value escaped.

use crate::sanitize::escape_js;
use crate::widget::ButtonAction;

use super::css::render_sheet;
use super::{ScriptPlan, TriggerPlan, CLOSE_ANIMATION_MS, TEST_MODE_DELAY_MS};

/// Line-oriented JavaScript writer with brace-tracked indentation.
struct JsWriter {
    buf: String,
    indent: usize,
}

impl JsWriter {
    fn new() -> Self {
        JsWriter {
            buf: String::with_capacity(4096),
            indent: 0,
        }
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.buf.push_str("  ");
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn open(&mut self, text: &str) {
        self.line(text);
        self.indent += 1;
    }

    fn close(&mut self, text: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.line(text);
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Quote a value as a single-quoted JS string literal.
fn js_str(value: &str) -> String {
    format!("'{}'", escape_js(value))
}

/// Render the full embed script for a plan.
pub fn emit(plan: &ScriptPlan) -> String {
    let mut w = JsWriter::new();
    let guard = js_str(&plan.guard_flag());
    let container_id = js_str(&plan.container_id());
    let style_id = js_str(&format!("{}-style", plan.container_id()));

    w.open("(function () {");
    w.line("'use strict';");

    // Reentrancy guard. Test mode reloads freely.
    if !plan.test_mode {
        w.line(&format!("if (window[{guard}]) {{ return; }}"));
        w.line(&format!("window[{guard}] = true;"));
    }

    emit_inject_styles(&mut w, plan, &style_id);
    emit_track_click(&mut w, plan);
    emit_close(&mut w, plan, &container_id);
    emit_create(&mut w, plan, &container_id);
    emit_trigger(&mut w, plan);

    // Manual trigger for the admin's debugging console.
    w.line(&format!(
        "window.{} = createWidget;",
        plan.kind.manual_trigger()
    ));
    w.close("})();");
    w.finish()
}

fn emit_inject_styles(w: &mut JsWriter, plan: &ScriptPlan, style_id: &str) {
    let sheet = render_sheet(&plan.css);
    w.open("function injectStyles() {");
    w.line(&format!(
        "if (document.getElementById({style_id})) {{ return; }}"
    ));
    w.line("var style = document.createElement('style');");
    w.line(&format!("style.id = {style_id};"));
    w.line(&format!("style.textContent = {};", js_str(&sheet)));
    w.line("document.head.appendChild(style);");
    w.close("}");
}

fn emit_track_click(w: &mut JsWriter, plan: &ScriptPlan) {
    w.open("function trackClick() {");
    if let Some(track_url) = &plan.track_url {
        let payload = format!(
            "JSON.stringify({{ widgetId: {}, widgetType: {} }})",
            js_str(&plan.widget_id),
            js_str(plan.kind.as_str())
        );
        w.open("try {");
        w.open(&format!("fetch({}, {{", js_str(track_url)));
        w.line("method: 'POST',");
        w.line("headers: { 'Content-Type': 'application/json' },");
        w.line(&format!("body: {payload},"));
        w.line("keepalive: true");
        w.close("}).catch(function (err) { console.warn('Likemetric: click tracking failed', err); });");
        w.close("} catch (err) { console.warn('Likemetric: click tracking failed', err); }");
    }
    w.close("}");
}

fn emit_close(w: &mut JsWriter, plan: &ScriptPlan, container_id: &str) {
    w.open("function onKeydown(ev) {");
    w.line("if (ev.key === 'Escape') { closeWidget(); }");
    w.close("}");

    w.open("function closeWidget() {");
    w.line(&format!(
        "var el = document.getElementById({container_id});"
    ));
    w.line("if (!el) { return; }");
    w.line("document.removeEventListener('keydown', onKeydown);");
    w.line("el.style.opacity = '0';");
    if !plan.close_transform.is_empty() {
        w.line(&format!(
            "el.style.transform = {};",
            js_str(plan.close_transform)
        ));
    }
    // Removal waits out the CSS transition so dismissal does not pop.
    w.open("setTimeout(function () {");
    w.line("if (el.parentNode) { el.parentNode.removeChild(el); }");
    w.close(&format!("}}, {CLOSE_ANIMATION_MS});"));
    w.close("}");
}

fn emit_create(w: &mut JsWriter, plan: &ScriptPlan, container_id: &str) {
    w.open("function createWidget() {");
    w.line(&format!(
        "if (document.getElementById({container_id})) {{ return; }}"
    ));
    w.line("injectStyles();");
    w.line("var container = document.createElement('div');");
    w.line(&format!("container.id = {container_id};"));
    w.line(&format!("container.innerHTML = {};", js_str(&plan.html)));

    // One delegated listener distinguishes close, action, and overlay clicks.
    w.open("container.addEventListener('click', function (ev) {");
    w.line("var target = ev.target;");
    w.line("if (target.closest('[data-lm-close]')) { closeWidget(); return; }");
    if let Some(button) = &plan.button {
        w.open("if (target.closest('[data-lm-action]')) {");
        w.line("trackClick();");
        match (&button.action, button.url.as_str()) {
            (ButtonAction::Url, url) if !url.is_empty() => {
                w.line(&format!(
                    "window.open({}, '_blank', 'noopener');",
                    js_str(url)
                ));
            }
            // No URL to open, or an explicit close action.
            _ => w.line("closeWidget();"),
        }
        w.line("return;");
        w.close("}");
    }
    if plan.overlay {
        w.line("if (target === container) { closeWidget(); }");
    }
    w.close("});");

    w.line("document.addEventListener('keydown', onKeydown);");
    w.line("container.style.opacity = '0';");
    w.line("document.body.appendChild(container);");
    w.line("requestAnimationFrame(function () { container.style.opacity = '1'; });");
    w.close("}");
}

fn emit_trigger(w: &mut JsWriter, plan: &ScriptPlan) {
    if plan.test_mode {
        // Admin preview: show promptly no matter how the widget is configured.
        w.line(&format!("setTimeout(createWidget, {TEST_MODE_DELAY_MS});"));
        return;
    }
    match &plan.trigger {
        TriggerPlan::Delay { ms } => {
            w.line(&format!("setTimeout(createWidget, {ms});"));
        }
        TriggerPlan::ScrollPercent { threshold } => {
            w.open("var onScroll = function () {");
            w.line("var scrollable = document.documentElement.scrollHeight - window.innerHeight;");
            w.line("if (scrollable <= 0) { return; }");
            w.line("var percent = (window.pageYOffset / scrollable) * 100;");
            w.open(&format!("if (percent >= {threshold}) {{"));
            w.line("window.removeEventListener('scroll', onScroll);");
            w.line("createWidget();");
            w.close("}");
            w.close("};");
            w.line("window.addEventListener('scroll', onScroll, { passive: true });");
        }
        TriggerPlan::ExitIntent => {
            w.open("var onExit = function (ev) {");
            w.line("if (ev.clientY > 0) { return; }");
            w.line("document.removeEventListener('mouseleave', onExit);");
            w.line("createWidget();");
            w.close("};");
            w.line("document.addEventListener('mouseleave', onExit);");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::css::CssRule;
    use crate::widget::WidgetKind;

    fn base_plan() -> ScriptPlan {
        ScriptPlan {
            kind: WidgetKind::Announcement,
            widget_id: "w1".into(),
            css: vec![CssRule::reset("#lm-announcement-w1").prop("position", "fixed")],
            html: "<h2 class=\"lm-title\">Hi</h2>".into(),
            overlay: true,
            button: None,
            trigger: TriggerPlan::Delay { ms: 2_000 },
            close_transform: "scale(0.95)",
            track_url: Some("https://example.com/track".into()),
            test_mode: false,
        }
    }

    fn balanced(js: &str) -> bool {
        let mut depth = 0i32;
        for ch in js.chars() {
            match ch {
                '{' | '(' => depth += 1,
                '}' | ')' => depth -= 1,
                _ => {}
            }
        }
        depth == 0
    }

    #[test]
    fn guard_is_checked_and_set_outside_test_mode() {
        let js = emit(&base_plan());
        assert!(js.contains("if (window['aw_w1']) { return; }"));
        assert!(js.contains("window['aw_w1'] = true;"));
    }

    #[test]
    fn test_mode_skips_guard_and_uses_fixed_delay() {
        let mut plan = base_plan();
        plan.test_mode = true;
        plan.trigger = TriggerPlan::ExitIntent;
        let js = emit(&plan);
        assert!(!js.contains("window['aw_w1']"));
        assert!(js.contains("setTimeout(createWidget, 500);"));
        assert!(!js.contains("mouseleave"));
    }

    #[test]
    fn scroll_trigger_detaches_after_firing() {
        let mut plan = base_plan();
        plan.trigger = TriggerPlan::ScrollPercent { threshold: 50 };
        let js = emit(&plan);
        assert!(js.contains("if (percent >= 50) {"));
        assert!(js.contains("window.removeEventListener('scroll', onScroll);"));
    }

    #[test]
    fn exit_intent_checks_top_edge() {
        let mut plan = base_plan();
        plan.trigger = TriggerPlan::ExitIntent;
        let js = emit(&plan);
        assert!(js.contains("if (ev.clientY > 0) { return; }"));
    }

    // Dismissal removes the container, so an exit-intent handler that stays
    // attached would re-create the widget on the next top-edge exit. The
    // handler must detach itself before firing, like the scroll trigger.
    #[test]
    fn exit_intent_detaches_before_firing() {
        let mut plan = base_plan();
        plan.trigger = TriggerPlan::ExitIntent;
        let js = emit(&plan);
        let detach_at = js
            .find("document.removeEventListener('mouseleave', onExit);")
            .unwrap();
        let fire_at = js.find("createWidget();").unwrap();
        assert!(detach_at < fire_at);
        assert!(js.contains("document.addEventListener('mouseleave', onExit);"));
    }

    #[test]
    fn url_button_opens_new_tab_and_tracks_first() {
        let mut plan = base_plan();
        plan.button = Some(super::super::ButtonPlan {
            action: ButtonAction::Url,
            url: "https://example.com/offer".into(),
        });
        let js = emit(&plan);
        let track_at = js.find("trackClick();").unwrap();
        let open_at = js
            .find("window.open('https://example.com/offer', '_blank', 'noopener');")
            .unwrap();
        assert!(track_at < open_at);
    }

    #[test]
    fn close_button_action_dismisses() {
        let mut plan = base_plan();
        plan.button = Some(super::super::ButtonPlan {
            action: ButtonAction::Close,
            url: String::new(),
        });
        let js = emit(&plan);
        assert!(js.contains("trackClick();"));
        assert!(!js.contains("window.open("));
    }

    #[test]
    fn widget_id_is_js_escaped() {
        let mut plan = base_plan();
        plan.widget_id = "x'); alert(1); ('".into();
        let js = emit(&plan);
        // The hostile id only ever appears with its quotes backslash-escaped,
        // so it cannot terminate the surrounding literal.
        assert!(js.contains(r"x\'); alert(1); (\'"));
        assert!(!js.contains("'x'); alert"));
        assert!(balanced(&js));
    }

    #[test]
    fn output_braces_and_parens_are_balanced() {
        for trigger in [
            TriggerPlan::Delay { ms: 0 },
            TriggerPlan::ScrollPercent { threshold: 99 },
            TriggerPlan::ExitIntent,
        ] {
            let mut plan = base_plan();
            plan.trigger = trigger;
            assert!(balanced(&emit(&plan)));
        }
    }

    #[test]
    fn removal_waits_for_the_close_transition() {
        let js = emit(&base_plan());
        assert!(js.contains("}, 200);"));
    }

    #[test]
    fn missing_track_url_emits_a_noop_reporter() {
        let mut plan = base_plan();
        plan.track_url = None;
        let js = emit(&plan);
        assert!(!js.contains("fetch("));
        assert!(js.contains("function trackClick() {"));
    }
}
