use serde::{Deserialize, Serialize};

/// What to do with a line indented less than the first selected line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DedentPolicy {
    /// Place the line at the body's base depth
    #[default]
    Clamp,
    /// Fail the whole conversion
    Reject,
}

/// Separator used to join the assembled snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// Configuration for the snippet formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormattingRules {
    /// Handling of lines that dedent below the first selected line
    pub dedent: DedentPolicy,

    /// Line separator for the assembled snippet
    pub line_ending: LineEnding,
}
