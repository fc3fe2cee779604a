//! Snippet delivery: stdout, a file, or the system clipboard.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Where a finished snippet is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
    Clipboard,
}

impl Sink {
    /// Pick a sink: an explicit output file wins over the clipboard.
    pub fn choose(output: Option<&str>, clipboard: bool) -> Self {
        match output {
            Some(path) => Sink::File(PathBuf::from(path)),
            None if clipboard => Sink::Clipboard,
            None => Sink::Stdout,
        }
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Error writing file '{}': {source}", .path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("Error writing to stdout: {0}")]
    Stdout(#[from] io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("clipboard support is not available in this build")]
    ClipboardUnavailable,
}

/// Write `text` to `sink`.
pub fn deliver(sink: &Sink, text: &str) -> Result<(), OutputError> {
    match sink {
        Sink::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
        Sink::File(path) => fs::write(path, text).map_err(|source| OutputError::File {
            path: path.clone(),
            source,
        }),
        Sink::Clipboard => write_clipboard(text),
    }
}

#[cfg(feature = "clipboard")]
fn write_clipboard(text: &str) -> Result<(), OutputError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| OutputError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| OutputError::Clipboard(e.to_string()))?;
    log::debug!("wrote {} bytes to the clipboard", text.len());
    Ok(())
}

#[cfg(not(feature = "clipboard"))]
fn write_clipboard(_text: &str) -> Result<(), OutputError> {
    Err(OutputError::ClipboardUnavailable)
}
