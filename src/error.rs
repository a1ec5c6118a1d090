use crate::core::commands::CommandError;
use crate::input::ReadError;
use crate::parse::ParseError;
use crate::path::ResolveError;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum ShellError {
    Read(ReadError),
    Io(std::io::Error),
    Parse(ParseError),
    Resolve(ResolveError),
    Command(String, CommandError),
    Process(ProcessError),
    FlagError(String),
}

impl ShellError {
    /// Failures that are part of normal input handling and never shown.
    pub fn is_silent(&self) -> bool {
        matches!(self, ShellError::Parse(ParseError::EmptyCommand))
    }

    /// Status recorded for a command that failed before or instead of running.
    pub fn exit_status(&self) -> i32 {
        match self {
            ShellError::Resolve(ResolveError::NotFound(_)) => 127,
            _ => 1,
        }
    }
}

impl From<ReadError> for ShellError {
    fn from(err: ReadError) -> Self {
        ShellError::Read(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ParseError> for ShellError {
    fn from(err: ParseError) -> Self {
        ShellError::Parse(err)
    }
}

impl From<ResolveError> for ShellError {
    fn from(err: ResolveError) -> Self {
        ShellError::Resolve(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::Process(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Read(e) => write!(f, "{}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::Parse(e) => write!(f, "{}", e),
            ShellError::Resolve(e) => write!(f, "{}", e),
            ShellError::Command(name, e) => write!(f, "{}: {}", name, e),
            ShellError::Process(e) => write!(f, "{}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}
