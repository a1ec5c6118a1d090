use std::io::Write;

mod cd;
mod exit;
mod help;
mod ls;
mod touch;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use ls::LsCommand;
pub use touch::TouchCommand;

use crate::highlight::Palette;

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments(String),
    ExecutionError(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// What the loop should do after a built-in returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Status(i32),
    /// Stop the shell and exit the process with this code.
    Exit(i32),
}

/// A command implemented inside the shell.
///
/// `argv[0]` is the command name, exactly as an external program would see it.
pub trait Command {
    fn execute(&self, argv: &[String], out: &mut dyn Write) -> Result<Outcome, CommandError>;
}

#[derive(Clone)]
pub enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    Help(HelpCommand),
    Ls(LsCommand),
    Touch(TouchCommand),
}

impl Command for CommandType {
    fn execute(&self, argv: &[String], out: &mut dyn Write) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(argv, out),
            CommandType::Exit(cmd) => cmd.execute(argv, out),
            CommandType::Help(cmd) => cmd.execute(argv, out),
            CommandType::Ls(cmd) => cmd.execute(argv, out),
            CommandType::Touch(cmd) => cmd.execute(argv, out),
        }
    }
}

/// Name to built-in lookup. Fixed once built; matching is exact and
/// case-sensitive.
#[derive(Clone)]
pub struct DispatchTable {
    entries: Vec<(&'static str, CommandType)>,
}

impl DispatchTable {
    pub fn new(palette: Palette) -> Self {
        let mut table = Self {
            entries: vec![
                ("cd", CommandType::Cd(CdCommand::new())),
                ("exit", CommandType::Exit(ExitCommand::new())),
                ("help", CommandType::Help(HelpCommand::new(palette))),
                ("ls", CommandType::Ls(LsCommand::new(palette))),
                ("touch", CommandType::Touch(TouchCommand::new(palette))),
            ],
        };

        // The help page lists the finished table, itself included.
        let names: Vec<&'static str> = table.names().collect();
        for (_, command) in &mut table.entries {
            if let CommandType::Help(help) = command {
                help.set_names(names.clone());
            }
        }
        table
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandType> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, command)| command)
    }

    /// Built-in names in dispatch order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}
