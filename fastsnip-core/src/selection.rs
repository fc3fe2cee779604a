//! Selections over a source document
//!
//! This is the editor side of the conversion: it knows the whole document, so
//! it can measure the indentation of the full first and last selected lines
//! even when the selection itself starts or ends mid-line.

use crate::block::SELECTION_LINE_BREAK;
use crate::error::FormatError;
use crate::indent::tab_count;

/// A 0-based line/column position. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A range between two positions, always ordered start <= end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    /// Build a selection from an anchor and an active position in any order.
    pub fn new(anchor: Position, active: Position) -> Self {
        if anchor <= active {
            Self {
                start: anchor,
                end: active,
            }
        } else {
            Self {
                start: active,
                end: anchor,
            }
        }
    }

    /// Select whole lines `first..=last`.
    pub fn lines(first: usize, last: usize) -> Self {
        Self::new(Position::new(first, 0), Position::new(last, usize::MAX))
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A source document split into lines on CRLF, LF or CR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new(text: &str) -> Self {
        Self {
            lines: split_any_line_break(text),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Tab depth of the full document line at `index`.
    pub fn indent_of(&self, index: usize) -> Option<usize> {
        self.line(index).map(tab_count)
    }

    /// Check that `position` is inside the document, clamping its column to
    /// the length of its line.
    pub fn validate(&self, position: Position) -> Result<Position, FormatError> {
        let line = self
            .line(position.line)
            .ok_or(FormatError::PositionOutOfRange {
                line: position.line + 1,
                lines: self.line_count(),
            })?;
        let column = position.column.min(line.chars().count());
        Ok(Position::new(position.line, column))
    }

    /// The selected text, lines joined with CRLF.
    pub fn text_in(&self, selection: &Selection) -> Result<String, FormatError> {
        let start = self.validate(selection.start)?;
        let end = self.validate(selection.end)?;

        let mut parts = Vec::with_capacity(end.line.saturating_sub(start.line) + 1);
        for index in start.line..=end.line {
            let line = &self.lines[index];
            let from = if index == start.line { start.column } else { 0 };
            let to = if index == end.line {
                end.column
            } else {
                usize::MAX
            };
            parts.push(char_slice(line, from, to));
        }
        Ok(parts.join(SELECTION_LINE_BREAK))
    }
}

/// Rewrite every line break (CRLF, LF or a lone CR) as CRLF.
pub fn normalize_line_endings(text: &str) -> String {
    split_any_line_break(text).join(SELECTION_LINE_BREAK)
}

fn split_any_line_break(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            '\n' => lines.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    lines.push(current);
    lines
}

fn char_slice(line: &str, from: usize, to: usize) -> &str {
    let byte_at = |column: usize| {
        line.char_indices()
            .nth(column)
            .map(|(offset, _)| offset)
            .unwrap_or(line.len())
    };
    let start = byte_at(from);
    let end = byte_at(to).max(start);
    &line[start..end]
}
