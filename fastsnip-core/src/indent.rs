//! Tab-depth helpers
//!
//! Indentation is measured in tab characters only. A run of spaces, or a space
//! in front of the first tab, ends the count.

/// Depth of the template's `"body"` array entries.
pub const BASE_DEPTH: usize = 3;

/// Count the unbroken run of tab characters at the start of `line`.
///
/// Stops at the first character that is not a tab, spaces included.
pub fn tab_count(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'\t').count()
}

/// A string of `depth` tab characters.
pub fn indent(depth: usize) -> String {
    "\t".repeat(depth)
}
