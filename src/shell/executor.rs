use std::env;
use std::io::{self, Write};

use tracing::debug;

use crate::core::commands::{Command, Outcome};
use crate::error::ShellError;
use crate::input::trim;
use crate::parse::CommandLine;

impl super::Shell {
    /// Trim, tokenize, then dispatch one line: built-ins first, PATH second.
    pub(crate) fn execute_line(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let command = CommandLine::parse(trim(line).unwrap_or_default())?;
        debug!(name = command.name(), args = ?command.args(), "parsed command");

        if let Some(builtin) = self.builtins.lookup(command.name()) {
            let mut out = io::stdout().lock();
            let outcome = builtin
                .execute(command.argv(), &mut out)
                .map_err(|e| ShellError::Command(command.name().to_string(), e))?;
            out.flush()?;
            drop(out);

            if let Ok(dir) = env::current_dir() {
                self.current_dir = dir;
            }
            return Ok(outcome);
        }

        let program = self.resolver.resolve(command.name())?;
        let status = self.executor.execute(&program, command.argv())?;
        if !status.success() && !self.quiet {
            eprintln!("{}: {}: {}", self.palette.error("microsh"), command.name(), status);
        }
        Ok(Outcome::Status(status.code()))
    }
}
