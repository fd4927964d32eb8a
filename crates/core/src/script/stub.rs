//! Warning/error-only script bodies for failure paths.
//!
//! The embed endpoint must always return executable JavaScript, even when
//! the widget is missing, inactive, or the backend failed. These stubs log
//! to the embedding developer's console and do nothing else.

use crate::sanitize::escape_js;

/// Script whose only effect is a `console.error` call.
///
/// Served for missing-parameter (400) and unexpected-failure (500) cases.
pub fn console_error_script(message: &str) -> String {
    format!("console.error('Likemetric: {}');\n", escape_js(message))
}

/// Script whose only effect is a `console.warn` call.
///
/// Served for not-found and inactive widgets; a silent no-op for end users.
pub fn console_warn_script(message: &str) -> String {
    format!("console.warn('Likemetric: {}');\n", escape_js(message))
}
