mod command;
mod tokenizer;

pub use command::{CommandLine, MAX_ARGS};
pub use tokenizer::{split_search_path, Tokenizer};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing but whitespace on the line.
    EmptyCommand,
    /// The first token was a quoted empty string.
    EmptyName,
    UnterminatedQuote(char),
    ArgumentLimitExceeded { count: usize, max: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyCommand => write!(f, "empty command"),
            ParseError::EmptyName => write!(f, "empty command name"),
            ParseError::UnterminatedQuote(q) => {
                write!(f, "syntax error: unterminated quote {}", q)
            }
            ParseError::ArgumentLimitExceeded { count, max } => {
                write!(f, "too many arguments: {} (limit {})", count, max)
            }
        }
    }
}

impl std::error::Error for ParseError {}
