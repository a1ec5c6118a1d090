mod expander;
mod resolver;

pub use expander::PathExpander;
pub use resolver::PathResolver;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A bare name was not found in any `PATH` directory.
    NotFound(String),
    HomeDirNotFound,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound(name) => write!(f, "command not found: {}", name),
            ResolveError::HomeDirNotFound => write!(f, "home directory not found"),
        }
    }
}

impl std::error::Error for ResolveError {}
