use super::{ParseError, Tokenizer};

/// Upper bound on the argument vector, command name included.
pub const MAX_ARGS: usize = 255;

/// One parsed command: a name and its argument vector.
///
/// The vector follows the `execv` convention: `argv()[0]` is the command
/// name and [`CommandLine::args`] are the remaining words. Built-ins receive
/// the same shape as external programs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    argv: Vec<String>,
}

impl CommandLine {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let tokens = Tokenizer::shell().tokenize(line)?;
        Self::from_tokens(tokens)
    }

    pub fn from_tokens(tokens: Vec<String>) -> Result<Self, ParseError> {
        match tokens.first() {
            None => return Err(ParseError::EmptyCommand),
            Some(name) if name.is_empty() => return Err(ParseError::EmptyName),
            Some(_) => {}
        }

        if tokens.len() > MAX_ARGS {
            return Err(ParseError::ArgumentLimitExceeded {
                count: tokens.len(),
                max: MAX_ARGS,
            });
        }

        Ok(Self { argv: tokens })
    }

    pub fn name(&self) -> &str {
        &self.argv[0]
    }

    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}
