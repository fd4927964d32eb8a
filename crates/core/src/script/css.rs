//! Scoped CSS rule construction for generated widget styles.
//!
//! Every rule is id-qualified by the widget container, and widget-facing
//! rules start from `all: initial` so host-page styles cannot leak in.
//! Declarations are emitted with `!important` so the host page cannot
//! override them either.

/// One CSS rule: a selector plus ordered property declarations.
#[derive(Debug, Clone)]
pub struct CssRule {
    selector: String,
    props: Vec<(String, String)>,
}

impl CssRule {
    /// Rule without the `all: initial` reset (for pseudo-selectors like
    /// `:hover` where re-resetting would fight the base rule).
    pub fn new(selector: impl Into<String>) -> Self {
        CssRule {
            selector: selector.into(),
            props: Vec::new(),
        }
    }

    /// Rule opening with `all: initial`, the base for every widget element.
    pub fn reset(selector: impl Into<String>) -> Self {
        CssRule::new(selector).prop("all", "initial")
    }

    pub fn prop(mut self, name: &str, value: impl Into<String>) -> Self {
        self.props.push((name.to_string(), value.into()));
        self
    }

    /// Render as a single minified rule with `!important` on every
    /// declaration.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.selector);
        out.push('{');
        for (name, value) in &self.props {
            out.push_str(name);
            out.push(':');
            out.push_str(value);
            out.push_str(" !important;");
        }
        out.push('}');
        out
    }
}

/// Render a rule set into one stylesheet string.
pub fn render_sheet(rules: &[CssRule]) -> String {
    rules.iter().map(CssRule::render).collect()
}
