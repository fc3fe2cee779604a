//! Snippet generation from selected code
//!
//!     This crate turns a block of code selected in an editor into an entry for a
//!     snippet definition file (the JSON-like files consumed by editor snippet
//!     engines). The selection is re-indented relative to its own first line,
//!     double quotes are escaped, every line becomes a quoted, comma-terminated
//!     entry of the `"body"` array, and the result is wrapped into a fixed
//!     template with placeholder fields.
//!
//!     This is a pure lib: it powers fastsnip-cli but is shell agnostic. No code
//!     here prints, reads env vars or touches the clipboard.
//!
//! Pipeline
//!
//!     indent::tab_count ─┐
//!     escape::escape_quotes ─┴─> line::format_line ─> block::format_block ─> template::SnippetTemplate
//!
//!     The file structure :
//!     .
//!     ├── error.rs       # FormatError
//!     ├── indent.rs      # tab counting and the body base depth
//!     ├── escape.rs      # quote escaping
//!     ├── line.rs        # single body-array entry
//!     ├── block.rs       # whole selection, dedent checks
//!     ├── template.rs    # skeleton and assembly
//!     ├── rules.rs       # FormattingRules
//!     ├── selection.rs   # Document / Selection, the editor side
//!     └── lib.rs
//!
//! Indentation
//!
//!     Indentation is counted in leading tabs only. The first and last selected
//!     lines must share the same depth; the first line is the zero point and every
//!     other line keeps its depth relative to it, on top of the three tabs the
//!     template's body array sits at. Lines that dedent below the first line are
//!     clamped or rejected, see [`DedentPolicy`].

pub mod block;
pub mod error;
pub mod escape;
pub mod indent;
pub mod line;
pub mod rules;
pub mod selection;
pub mod template;

pub use error::FormatError;
pub use rules::{DedentPolicy, FormattingRules, LineEnding};
pub use selection::{Document, Position, Selection};
pub use template::SnippetTemplate;

/// Build a snippet definition from a CRLF-separated selection using the
/// default rules.
///
/// `first_line_indent` and `last_line_indent` are the tab depths of the full
/// first and last selected lines; they must be equal.
pub fn format_snippet_body(
    selected_text: &str,
    first_line_indent: usize,
    last_line_indent: usize,
) -> Result<String, FormatError> {
    format_snippet_body_with_rules(
        selected_text,
        first_line_indent,
        last_line_indent,
        &FormattingRules::default(),
    )
}

/// Build a snippet definition with custom formatting rules.
pub fn format_snippet_body_with_rules(
    selected_text: &str,
    first_line_indent: usize,
    last_line_indent: usize,
    rules: &FormattingRules,
) -> Result<String, FormatError> {
    if first_line_indent != last_line_indent {
        return Err(FormatError::InconsistentIndentation {
            first: first_line_indent,
            last: last_line_indent,
        });
    }

    log::debug!(
        "formatting selection: reference depth {first_line_indent}, {} bytes, dedent {:?}",
        selected_text.len(),
        rules.dedent
    );

    let body = block::format_block_with_rules(selected_text, first_line_indent, rules)?;
    log::debug!("assembled {} body lines", body.len());
    Ok(SnippetTemplate::assemble_with(&body, rules.line_ending))
}

/// Build a snippet definition from a selection inside `document`.
///
/// Indentation is measured on the full document lines under the selection's
/// start and end, so a selection starting after its line's leading tabs is
/// still checked against that line's real depth.
pub fn format_selection(
    document: &Document,
    selection: &Selection,
    rules: &FormattingRules,
) -> Result<String, FormatError> {
    if selection.is_empty() {
        return Err(FormatError::NoActiveSelection);
    }
    let text = document.text_in(selection)?;
    if text.is_empty() {
        return Err(FormatError::NoActiveSelection);
    }

    let first = document.indent_of(selection.start.line).unwrap_or(0);
    let last = document.indent_of(selection.end.line).unwrap_or(0);
    format_snippet_body_with_rules(&text, first, last, rules)
}
