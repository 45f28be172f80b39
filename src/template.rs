//! Header template rendering.
//!
//! Every artifact uses the same two-line shape:
//!
//! ```text
//! #pragma once
//! #define <MACRO> "<value>"
//! ```
//!
//! The value is emitted as a C string literal, so anything that would end
//! the literal early or break the line is escaped.

use chrono::{DateTime, Local};
use std::fmt::Write;

/// Macro bound to the build date.
pub const GENERATED_TIME: &str = "GENERATED_TIME";

/// Macro bound to `git describe --tags` output.
pub const GIT_VERSION: &str = "GIT_VERSION";

/// Date format used for `GENERATED_TIME`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single-macro header ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderTemplate {
    pub macro_name: &'static str,
    pub value: String,
}

impl HeaderTemplate {
    /// The build date header for the given instant.
    pub fn build_date(now: &DateTime<Local>) -> Self {
        Self {
            macro_name: GENERATED_TIME,
            value: now.format(DATE_FORMAT).to_string(),
        }
    }

    /// The git version header for a `git describe` result.
    pub fn git_version(describe: impl Into<String>) -> Self {
        Self {
            macro_name: GIT_VERSION,
            value: describe.into(),
        }
    }

    /// Render the full header text, LF line endings, trailing newline.
    pub fn render(&self) -> String {
        format!(
            "#pragma once\n#define {} \"{}\"\n",
            self.macro_name,
            escape_c_string(&self.value)
        )
    }
}

/// Escape `value` for use inside a C string literal.
fn escape_c_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_ascii_control() => {
                // Octal escapes stop after three digits; hex ones would swallow
                // a following hex digit. Writing into a String cannot fail.
                let _ = write!(escaped, "\\{:03o}", c as u32);
            }
            c => escaped.push(c),
        }
    }
    escaped
}
