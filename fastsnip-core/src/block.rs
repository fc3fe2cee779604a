//! Block formatting
//!
//! Splits a raw selection on CRLF and formats every line against the
//! indentation of the first line. Line order is preserved exactly.

use crate::error::FormatError;
use crate::indent::tab_count;
use crate::line::{format_line, is_blank};
use crate::rules::{DedentPolicy, FormattingRules};

/// Line separator of the host editor's selections.
pub const SELECTION_LINE_BREAK: &str = "\r\n";

/// Split a raw selection into lines. An empty selection has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(SELECTION_LINE_BREAK).collect()
}

/// Format every line of `text` as a body-array entry.
///
/// Every line is indented by its depth relative to `reference_depth`; a first
/// line with fewer tabs than the reference sits at the base depth. Only the last non-blank line
/// loses its trailing comma. Blank lines are kept verbatim.
pub fn format_block(text: &str, reference_depth: usize) -> Vec<String> {
    let lines = split_lines(text);
    let last_content = lines.iter().rposition(|line| !is_blank(line));

    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            // The first line may have lost its leading tabs to a selection
            // that started mid-line.
            let reference = if index == 0 {
                tab_count(line).min(reference_depth)
            } else {
                reference_depth
            };
            let formatted = format_line(line, reference, Some(index) == last_content);
            log::trace!("line {}: {formatted:?}", index + 1);
            formatted
        })
        .collect()
}

/// Fail on the first line after the first one that dedents below
/// `reference_depth`. Blank lines are ignored.
pub fn check_dedent(text: &str, reference_depth: usize) -> Result<(), FormatError> {
    for (index, line) in split_lines(text).iter().enumerate().skip(1) {
        if is_blank(line) {
            continue;
        }
        let depth = tab_count(line);
        if depth < reference_depth {
            return Err(FormatError::DedentBelowReference {
                line: index + 1,
                depth,
                reference: reference_depth,
            });
        }
    }
    Ok(())
}

/// Format a block, honoring the dedent policy in `rules`.
pub fn format_block_with_rules(
    text: &str,
    reference_depth: usize,
    rules: &FormattingRules,
) -> Result<Vec<String>, FormatError> {
    if rules.dedent == DedentPolicy::Reject {
        check_dedent(text, reference_depth)?;
    }
    Ok(format_block(text, reference_depth))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(format_block("", 0).is_empty());
    }

    #[test]
    fn formats_nested_block() {
        let text = "\tconsole.log(\"hi\")\r\n\t\tconsole.log(\"nested\")";
        assert_eq!(
            format_block(text, 1),
            vec![
                "\t\t\t\"console.log(\\\"hi\\\")\",",
                "\t\t\t\t\"console.log(\\\"nested\\\")\"",
            ]
        );
    }

    #[test]
    fn only_last_line_drops_comma() {
        let formatted = format_block("a\r\nb\r\nc", 0);
        assert_eq!(formatted.len(), 3);
        assert!(formatted[0].ends_with(','));
        assert!(formatted[1].ends_with(','));
        assert!(!formatted[2].ends_with(','));
    }

    #[test]
    fn blank_lines_are_preserved_in_order() {
        let formatted = format_block("if (x) {\r\n\r\n\ty();\r\n}", 0);
        assert_eq!(
            formatted,
            vec!["\t\t\t\"if (x) {\",", "", "\t\t\t\t\"y();\",", "\t\t\t\"}\""]
        );
    }

    #[test]
    fn trailing_blank_line_does_not_keep_comma() {
        let formatted = format_block("\ta();\r\n\tb();\r\n", 1);
        assert_eq!(formatted, vec!["\t\t\t\"a();\",", "\t\t\t\"b();\"", ""]);
    }

    #[test]
    fn first_line_without_tabs_sits_at_base_depth() {
        // Selection started after the leading tabs of a depth-2 line.
        let formatted = format_block("foo(() => {\r\n\t\t\tbar();\r\n\t\t});", 2);
        assert_eq!(
            formatted,
            vec![
                "\t\t\t\"foo(() => {\",",
                "\t\t\t\t\"bar();\",",
                "\t\t\t\"});\"",
            ]
        );
    }

    #[test]
    fn first_line_deeper_than_reference_keeps_alignment() {
        let formatted = format_block("\t\ta();\r\n\t\tb();", 1);
        assert_eq!(formatted, vec!["\t\t\t\t\"a();\",", "\t\t\t\t\"b();\""]);
        let depths: Vec<usize> = formatted.iter().map(|line| tab_count(line)).collect();
        assert_eq!(depths[0], depths[1]);
    }

    #[test]
    fn lf_only_text_is_a_single_line() {
        let formatted = format_block("a\nb", 0);
        assert_eq!(formatted.len(), 1);
    }

    #[test]
    fn check_dedent_reports_first_offending_line() {
        let text = "\t\ta\r\n\t\t\tb\r\n\tc\r\n\t\td";
        assert_eq!(
            check_dedent(text, 2),
            Err(FormatError::DedentBelowReference {
                line: 3,
                depth: 1,
                reference: 2,
            })
        );
    }

    #[test]
    fn check_dedent_ignores_first_and_blank_lines() {
        assert_eq!(check_dedent("x\r\n\r\n\t\ty", 2), Ok(()));
    }

    #[test]
    fn reject_policy_fails_before_formatting() {
        let rules = FormattingRules {
            dedent: DedentPolicy::Reject,
            ..FormattingRules::default()
        };
        let result = format_block_with_rules("\t\ta\r\n\tb\r\n\t\tc", 2, &rules);
        assert!(matches!(
            result,
            Err(FormatError::DedentBelowReference { line: 2, .. })
        ));
    }

    #[test]
    fn clamp_policy_formats_dedented_lines() {
        let rules = FormattingRules::default();
        let formatted = format_block_with_rules("\t\ta\r\n\tb\r\n\t\tc", 2, &rules).unwrap();
        assert_eq!(formatted[1], "\t\t\t\"b\",");
    }
}
