//! The snippet-definition skeleton
//!
//! The body lines produced by [`crate::block::format_block`] are spliced in
//! between the `"body": [` and `],` lines. The remaining fields keep their
//! placeholder values for the user to fill in after pasting.

use crate::rules::LineEnding;

/// Fixed skeleton of a snippet definition entry.
pub struct SnippetTemplate;

impl SnippetTemplate {
    pub const SKELETON: [&'static str; 7] = [
        "\t\"your description\": {",
        "\t\t\"scope\": \"\",",
        "\t\t\"prefix\": \"your prefix\",",
        "\t\t\"body\": [",
        "\t\t],",
        "\t\t\"description\": \"Log output to console\"",
        "\t}",
    ];

    /// Index at which body lines are inserted: right after `"body": [`.
    pub const BODY_INSERT_INDEX: usize = 4;

    /// Splice `body` into the skeleton and join with CRLF.
    pub fn assemble<S: AsRef<str>>(body: &[S]) -> String {
        Self::assemble_with(body, LineEnding::Crlf)
    }

    /// Splice `body` into the skeleton and join with `line_ending`.
    ///
    /// The body is trusted to be indented and quoted already.
    pub fn assemble_with<S: AsRef<str>>(body: &[S], line_ending: LineEnding) -> String {
        let (head, tail) = Self::SKELETON.split_at(Self::BODY_INSERT_INDEX);
        head.iter()
            .copied()
            .chain(body.iter().map(|line| line.as_ref()))
            .chain(tail.iter().copied())
            .collect::<Vec<_>>()
            .join(line_ending.as_str())
    }
}
