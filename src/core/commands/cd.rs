use std::env;
use std::io::Write;

use super::{Command, CommandError, Outcome};
use crate::path::PathExpander;

/// `cd [dir]`. Without an argument, goes to the home directory.
#[derive(Clone, Default)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, argv: &[String], _out: &mut dyn Write) -> Result<Outcome, CommandError> {
        let target = argv.get(1).map(String::as_str).unwrap_or("~");
        let path = self
            .path_expander
            .expand(target)
            .map_err(|e| CommandError::ExecutionError(e.to_string()))?;

        env::set_current_dir(&path)
            .map_err(|e| CommandError::ExecutionError(format!("{}: {}", path.display(), e)))?;
        Ok(Outcome::Status(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_cd_temp() {
        let original = env::current_dir().unwrap();
        let temp_dir = env::temp_dir().canonicalize().unwrap();
        let cmd = CdCommand::new();
        let mut out = Vec::new();

        let result = cmd.execute(&argv(&["cd", temp_dir.to_str().unwrap()]), &mut out);
        let landed = env::current_dir().unwrap();
        env::set_current_dir(original).unwrap();

        assert_eq!(result.unwrap(), Outcome::Status(0));
        assert_eq!(landed, temp_dir);
    }

    #[test]
    fn test_cd_invalid() {
        let cmd = CdCommand::new();
        let mut out = Vec::new();

        let result = cmd.execute(&argv(&["cd", "/microsh/nonexistent/path"]), &mut out);
        assert!(matches!(result, Err(CommandError::ExecutionError(_))));
    }
}
