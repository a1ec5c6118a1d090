use std::io::Write;

use super::{Command, CommandError, Outcome};
use crate::highlight::Palette;

#[derive(Clone)]
pub struct HelpCommand {
    palette: Palette,
    names: Vec<&'static str>,
}

impl HelpCommand {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            names: Vec::new(),
        }
    }

    pub fn set_names(&mut self, names: Vec<&'static str>) {
        self.names = names;
    }
}

impl Command for HelpCommand {
    fn execute(&self, _argv: &[String], out: &mut dyn Write) -> Result<Outcome, CommandError> {
        let p = &self.palette;
        writeln!(
            out,
            "{} {}",
            p.important("microsh"),
            p.hidden(&format!("version {}", env!("CARGO_PKG_VERSION")))
        )?;
        writeln!(out, "A small Unix shell. Type a program name to run it from PATH.")?;
        writeln!(
            out,
            "Arguments can be quoted in {} or {}. Type {} to leave.",
            p.bold("\"\""),
            p.bold("''"),
            p.bold("exit")
        )?;
        writeln!(out)?;
        writeln!(out, "{}", p.bold("Built-in commands:"))?;
        for name in &self.names {
            writeln!(out, "  {}", name)?;
        }
        Ok(Outcome::Status(0))
    }
}
