//! Error types for snippet formatting

use thiserror::Error;

/// Errors that can occur while turning a selection into a snippet
///
/// Every variant is raised before any output is built: a failed call never
/// hands back a partial snippet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Nothing is selected, or the input has no content
    #[error("no active selection")]
    NoActiveSelection,

    /// The first and last selected lines do not share the same tab depth
    #[error(
        "first and last selected lines must share the same indentation \
         (first line: {first} tabs, last line: {last} tabs)"
    )]
    InconsistentIndentation { first: usize, last: usize },

    /// A line sits at a shallower depth than the first selected line.
    /// Only raised when the dedent policy is [`DedentPolicy::Reject`].
    ///
    /// [`DedentPolicy::Reject`]: crate::rules::DedentPolicy::Reject
    #[error(
        "line {line} is indented {depth} tabs, below the first selected line ({reference} tabs)"
    )]
    DedentBelowReference {
        line: usize,
        depth: usize,
        reference: usize,
    },

    /// A selection position names a line past the end of the document
    #[error("line {line} is out of range (document has {lines} lines)")]
    PositionOutOfRange { line: usize, lines: usize },
}
