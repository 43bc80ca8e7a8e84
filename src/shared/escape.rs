//! Escaping for text shown in terminals and logs
//!
//! Observed values come from the network and may hold anything. Before they
//! are rendered, control characters and non-ASCII characters are replaced by
//! Rust escape sequences so the output stays printable ASCII.

use std::borrow::Cow;

/// Escape control and non-ASCII characters
///
/// Printable ASCII passes through unchanged; the input is borrowed when
/// nothing needs escaping.
///
/// # Examples
///
/// ```
/// use http_harness::shared::escape_for_terminal;
///
/// assert_eq!(escape_for_terminal("plain"), "plain");
/// assert_eq!(escape_for_terminal("a\nb"), "a\\nb");
/// assert_eq!(escape_for_terminal("caf\u{e9}"), "caf\\u{e9}");
/// ```
#[must_use]
pub fn escape_for_terminal(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_safe) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if is_safe(c) {
            out.push(c);
        } else {
            out.extend(c.escape_default());
        }
    }
    Cow::Owned(out)
}

const fn is_safe(c: char) -> bool {
    c.is_ascii() && !c.is_ascii_control()
}
