//! Selection input
//!
//! Positions on the command line are 1-based (`LINE` or `LINE:COL`), the way an
//! editor's status bar shows them. They are converted to the 0-based
//! [`Position`] used by fastsnip-core.

use fastsnip_core::block::split_lines;
use fastsnip_core::indent::tab_count;
use fastsnip_core::{Position, Selection};
use std::fs;
use std::io::{self, Read};

/// A 1-based position as typed by the user. A missing column means "start of
/// line" for selection starts and "end of line" for selection ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePosition {
    pub line: usize,
    pub column: Option<usize>,
}

/// Parse `LINE` or `LINE:COL`. Both numbers are 1-based.
pub fn parse_line_position(raw: &str) -> Result<LinePosition, String> {
    let (line, column) = match raw.split_once(':') {
        Some((line, column)) => (line, Some(column)),
        None => (raw, None),
    };
    let line = parse_one_based("line", line)?;
    let column = column
        .map(|column| parse_one_based("column", column))
        .transpose()?;
    Ok(LinePosition { line, column })
}

fn parse_one_based(what: &str, raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(format!("{what} numbers start at 1")),
        Ok(value) => Ok(value),
        Err(_) => Err(format!("invalid {what} number '{raw}'")),
    }
}

/// Turn user-supplied ends into a selection.
///
/// A missing end selects to the end of the start line; a missing start
/// selects from the beginning of the document.
pub fn resolve_selection(start: Option<LinePosition>, end: Option<LinePosition>) -> Selection {
    let start_line = start.map(|p| p.line).unwrap_or(1);
    let start = Position::new(
        start_line - 1,
        start
            .and_then(|p| p.column)
            .map(|c| c - 1)
            .unwrap_or(0),
    );
    let end = match end {
        Some(p) => Position::new(p.line - 1, p.column.map(|c| c - 1).unwrap_or(usize::MAX)),
        None => Position::new(start.line, usize::MAX),
    };
    Selection::new(start, end)
}

/// Selection text and end-line depths for a whole input treated as the
/// selection. Trailing line breaks are not part of the selection.
pub fn whole_input(text: &str) -> (&str, usize, usize) {
    let text = text.trim_end_matches(['\r', '\n']);
    let lines = split_lines(text);
    let first = lines.first().map(|line| tab_count(line)).unwrap_or(0);
    let last = lines.last().map(|line| tab_count(line)).unwrap_or(0);
    (text, first, last)
}

/// Read `path`, or stdin when `path` is `-`.
pub fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        fs::read_to_string(path)
    }
}
