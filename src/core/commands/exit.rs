use std::io::Write;

use super::{Command, CommandError, Outcome};

#[derive(Clone, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(&self, _argv: &[String], _out: &mut dyn Write) -> Result<Outcome, CommandError> {
        Ok(Outcome::Exit(0))
    }
}
