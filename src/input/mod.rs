mod editor;
mod stream;

pub use editor::EditorReader;
pub use stream::StreamReader;

use std::collections::TryReserveError;
use std::fmt;

/// Characters stripped by [`trim`] and treated as word separators by the
/// tokenizer.
pub const WHITESPACE: &[char] = &[' ', '\t', '\r', '\n', '\x0b', '\x0c'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C at the prompt. The line typed so far is discarded.
    Interrupted,
    /// End of input with nothing read.
    Eof,
}

#[derive(Debug)]
pub enum ReadError {
    Alloc(TryReserveError),
    Overflow,
    /// The line is not valid UTF-8. The line is consumed; the next read
    /// starts after it.
    InvalidUtf8(std::str::Utf8Error),
    Io(std::io::Error),
    Readline(rustyline::error::ReadlineError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Alloc(e) => write!(f, "allocation error: {}", e),
            ReadError::Overflow => write!(f, "allocation error: line too long"),
            ReadError::InvalidUtf8(e) => write!(f, "input is not valid UTF-8: {}", e),
            ReadError::Io(e) => write!(f, "read error: {}", e),
            ReadError::Readline(e) => write!(f, "readline error: {}", e),
        }
    }
}

impl std::error::Error for ReadError {}

impl From<TryReserveError> for ReadError {
    fn from(e: TryReserveError) -> Self {
        ReadError::Alloc(e)
    }
}

impl From<std::io::Error> for ReadError {
    fn from(e: std::io::Error) -> Self {
        ReadError::Io(e)
    }
}

impl From<rustyline::error::ReadlineError> for ReadError {
    fn from(e: rustyline::error::ReadlineError) -> Self {
        ReadError::Readline(e)
    }
}

/// A source of command lines.
pub trait LineReader {
    /// Blocks until a full line is available. `prompt` is shown first when the
    /// source is interactive.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ReadError>;
}

/// Strips leading and trailing [`WHITESPACE`]. `None` means there is no
/// command on this line.
pub fn trim(line: &str) -> Option<&str> {
    let trimmed = line.trim_matches(WHITESPACE);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
