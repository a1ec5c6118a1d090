use std::fs::OpenOptions;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;

use super::{Command, CommandError, Outcome};
use crate::highlight::Palette;

/// `touch path [content]`: creates a new file, optionally with content.
#[derive(Clone)]
pub struct TouchCommand {
    palette: Palette,
}

impl TouchCommand {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    fn print_help(&self, out: &mut dyn Write) -> Result<(), CommandError> {
        let p = &self.palette;
        writeln!(out, "{}", p.bold("touch help"))?;
        writeln!(out, "{}\n\ttouch path [-h] [content]", p.important("Command:"))?;
        writeln!(out, "{}", p.bold("Options:"))?;
        writeln!(out, "\t-h | display this help")?;
        writeln!(out, "{}", p.bold("Path:"))?;
        writeln!(out, "\tA bare file name is created in the current directory,")?;
        writeln!(out, "\totherwise the file is created at the given path.")?;
        writeln!(out, "{}", p.bold("Content:"))?;
        writeln!(out, "\tOptional text written to the new file. Quote it in \"\" or ''")?;
        writeln!(out, "\tto include spaces, e.g. \"My 'new' text\".")?;
        Ok(())
    }
}

impl Command for TouchCommand {
    fn execute(&self, argv: &[String], out: &mut dyn Write) -> Result<Outcome, CommandError> {
        let path = match argv.get(1).map(String::as_str) {
            None => {
                return Err(CommandError::InvalidArguments(
                    "missing file name".to_string(),
                ))
            }
            Some("-h") => {
                self.print_help(out)?;
                return Ok(Outcome::Status(0));
            }
            Some(path) => path,
        };

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .mode(0o666)
            .open(path)
            .map_err(|e| CommandError::ExecutionError(format!("cannot create {}: {}", path, e)))?;

        if let Some(content) = argv.get(2) {
            file.write_all(content.as_bytes())?;
        }
        Ok(Outcome::Status(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn run(args: &[&str]) -> Result<Outcome, CommandError> {
        let argv: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        TouchCommand::new(Palette::plain()).execute(&argv, &mut out)
    }

    #[test]
    fn test_creates_file_with_content() -> Result<(), Box<dyn std::error::Error>> {
        let path = env::temp_dir().join(format!("microsh_touch_{}", std::process::id()));
        let _ = fs::remove_file(&path);
        let path_str = path.to_str().unwrap();

        assert_eq!(run(&["touch", path_str, "My 'new' text"])?, Outcome::Status(0));
        assert_eq!(fs::read_to_string(&path)?, "My 'new' text");

        fs::remove_file(path)?;
        Ok(())
    }

    #[test]
    fn test_refuses_existing_file() -> Result<(), Box<dyn std::error::Error>> {
        let path = env::temp_dir().join(format!("microsh_touch_exists_{}", std::process::id()));
        fs::write(&path, "keep")?;

        assert!(matches!(
            run(&["touch", path.to_str().unwrap(), "new"]),
            Err(CommandError::ExecutionError(_))
        ));
        assert_eq!(fs::read_to_string(&path)?, "keep");

        fs::remove_file(path)?;
        Ok(())
    }

    #[test]
    fn test_missing_name_and_help() {
        assert!(matches!(run(&["touch"]), Err(CommandError::InvalidArguments(_))));
        assert!(matches!(run(&["touch", "-h"]), Ok(Outcome::Status(0))));
    }
}
