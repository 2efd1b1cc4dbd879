//! Style constants and message helpers for terminal output
//!
//! Use `cformat!` with HTML-like tags for user-facing messages:
//!
//! ```
//! use color_print::cformat;
//!
//! let branch = "feature";
//! let msg = cformat!("<green>Opened <bold>{branch}</> in the browser</>");
//! ```
//!
//! Semantic mapping: errors `<red>`, hints `<dim>`, success `<green>`,
//! secondary detail `<bright-black>`.

use std::fmt;

use color_print::{cformat, cstr};

/// Success symbol (green ✓)
pub const SUCCESS_SYMBOL: &str = cstr!("<green>✓</>");

/// Error symbol (red ✗)
pub const ERROR_SYMBOL: &str = cstr!("<red>✗</>");

/// Hint symbol (dim ↳)
pub const HINT_SYMBOL: &str = cstr!("<dim>↳</>");

/// Info symbol (dim ○) - for neutral status
pub const INFO_SYMBOL: &str = cstr!("<dim>○</>");

/// Prompt symbol (cyan ❯) - for questions requiring user input
pub const PROMPT_SYMBOL: &str = cstr!("<cyan>❯</>");

/// A message that has already been formatted with symbol and styling.
///
/// Message functions take `impl AsRef<str>` and return `FormattedMessage`.
/// Since `FormattedMessage` does NOT implement `AsRef<str>`, passing one back
/// into a message function is a compile error, which prevents
/// double-formatting.
#[derive(Debug, Clone)]
pub struct FormattedMessage(String);

impl FormattedMessage {
    /// Borrow the inner string for inspection (e.g., in tests).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormattedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FormattedMessage> for String {
    fn from(msg: FormattedMessage) -> String {
        msg.0
    }
}

/// Format an error message with symbol and red styling
///
/// Content can include inner styling like `<bold>`:
/// ```
/// use color_print::cformat;
/// use gitlink::styling::error_message;
///
/// let remote = "origin";
/// eprintln!("{}", error_message(cformat!("Remote <bold>{remote}</> has no URL")));
/// ```
pub fn error_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{ERROR_SYMBOL} <red>{}</>", content.as_ref()))
}

/// Format a hint message with symbol and dim styling
pub fn hint_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{HINT_SYMBOL} <dim>{}</>", content.as_ref()))
}

/// Format a success message with symbol and green styling
pub fn success_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{SUCCESS_SYMBOL} <green>{}</>", content.as_ref()))
}

/// Format an info message with symbol (no color on text - neutral status)
pub fn info_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(format!("{INFO_SYMBOL} {}", content.as_ref()))
}
