//! Escaping and validation helpers for user-authored widget fields.
//!
//! Every string that ends up inside generated markup or script must pass
//! through one of these before interpolation. The embed surface never
//! rejects bad input; invalid values degrade to safe fallbacks upstream
//! (see [`crate::normalize`]).

use url::Url;

/// Escape HTML-special characters with named entities.
///
/// Ampersand is replaced first so already-replaced entities are not
/// double-mangled within a single pass. Calling this twice on the same
/// string *does* double-escape; normalization applies it exactly once.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Whether a string parses as an absolute URL with scheme `http` or `https`.
///
/// Everything else (including `javascript:`, `data:`, relative paths, and
/// unparseable garbage) is rejected. Callers replace rejected values with
/// the empty string rather than erroring.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Escape a string for embedding inside a single-quoted JS string literal.
///
/// Escapes backslash and both quote characters, collapses newlines to `\n`,
/// and hex-escapes `<` so a hostile value can never terminate the
/// surrounding `<script>` element (`</script>` splitting).
pub fn escape_js(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\x3c"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}
