//! Per-line formatting
//!
//! A selected line becomes one entry of the snippet's `"body"` array: trimmed,
//! quote-escaped, wrapped in double quotes, comma-terminated unless it is the
//! last entry, and indented to the body's base depth plus its depth relative
//! to the first selected line.

use crate::escape::escape_quotes;
use crate::indent::{indent, tab_count, BASE_DEPTH};

/// Returns true for lines that pass through formatting untouched.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Depth of `line` relative to `reference_depth`; negative when the line
/// dedents below the reference.
pub fn relative_depth(line: &str, reference_depth: usize) -> isize {
    tab_count(line) as isize - reference_depth as isize
}

/// Format a single selected line as a body-array entry.
///
/// Blank and whitespace-only lines are returned unchanged. A line that sits
/// shallower than `reference_depth` is placed at the base depth.
pub fn format_line(line: &str, reference_depth: usize, is_last: bool) -> String {
    if is_blank(line) {
        return line.to_string();
    }

    let relative = relative_depth(line, reference_depth);
    if relative < 0 {
        log::warn!(
            "line {line:?} is {} tabs shallower than the first line, placing it at the base depth",
            relative.unsigned_abs()
        );
    }
    let depth = BASE_DEPTH + relative.max(0) as usize;
    let content = escape_quotes(line.trim());
    let separator = if is_last { "" } else { "," };

    format!("{}\"{content}\"{separator}", indent(depth))
}
