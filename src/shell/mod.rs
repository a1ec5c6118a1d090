use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use tracing::debug;

mod executor;
mod prompt;

use crate::{
    core::commands::{DispatchTable, Outcome},
    error::ShellError,
    flags::Flags,
    highlight::Palette,
    input::{EditorReader, LineReader, ReadError, ReadOutcome, StreamReader},
    path::PathResolver,
    process::{signal::InterruptFlag, ProcessExecutor},
};

use prompt::Prompt;

pub struct Shell {
    pub(crate) reader: Box<dyn LineReader>,
    pub(crate) builtins: DispatchTable,
    pub(crate) resolver: PathResolver,
    pub(crate) executor: ProcessExecutor,
    pub(crate) prompt: Prompt,
    pub(crate) palette: Palette,
    pub(crate) interrupts: InterruptFlag,
    pub(crate) current_dir: PathBuf,
    pub(crate) last_status: i32,
    pub(crate) quiet: bool,
}

impl Shell {
    /// Reads from the line editor on a terminal, otherwise straight from stdin
    /// without a prompt.
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        let reader: Box<dyn LineReader> = if io::stdin().is_terminal() {
            Box::new(EditorReader::new()?)
        } else {
            Box::new(StreamReader::silent(io::stdin().lock()))
        };
        Self::with_reader(reader, flags)
    }

    pub fn with_reader(reader: Box<dyn LineReader>, flags: &Flags) -> Result<Self, ShellError> {
        let palette = Palette::detect(flags.is_set("no-color"));
        let interrupts = InterruptFlag::install()?;
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

        Ok(Shell {
            reader,
            builtins: DispatchTable::new(palette),
            resolver: PathResolver::new(),
            executor: ProcessExecutor::new(),
            prompt: Prompt::new(palette),
            palette,
            interrupts,
            current_dir,
            last_status: 0,
            quiet: flags.is_set("quiet"),
        })
    }

    /// Runs until `exit` or end of input and returns the process exit code.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            let prompt = self.prompt.render(&self.current_dir);
            match self.reader.read_line(&prompt) {
                Ok(ReadOutcome::Line(line)) => {
                    if let Some(code) = self.run_line(&line) {
                        return Ok(code);
                    }
                }
                Ok(ReadOutcome::Interrupted) => continue,
                Ok(ReadOutcome::Eof) => break,
                Err(
                    e @ (ReadError::Alloc(_) | ReadError::Overflow | ReadError::InvalidUtf8(_)),
                ) => {
                    self.report(&ShellError::from(e));
                    self.last_status = 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
        debug!("end of input");
        Ok(0)
    }

    /// Runs a single line and returns its status, for `--command`.
    pub fn run_command(&mut self, line: &str) -> i32 {
        self.run_line(line).unwrap_or(self.last_status)
    }

    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    /// Returns the exit code when the line asked the shell to stop.
    fn run_line(&mut self, line: &str) -> Option<i32> {
        let result = self.execute_line(line);
        if self.interrupts.take() {
            // Ctrl-C or Ctrl-\ hit the foreground child; start the next
            // prompt on a fresh line.
            debug!("interrupt received while running a command");
            println!();
        }

        match result {
            Ok(Outcome::Exit(code)) => Some(code),
            Ok(Outcome::Status(code)) => {
                self.last_status = code;
                None
            }
            Err(e) if e.is_silent() => None,
            Err(e) => {
                self.last_status = e.exit_status();
                self.report(&e);
                None
            }
        }
    }

    fn report(&self, err: &ShellError) {
        if !self.quiet {
            eprintln!("{}: {}", self.palette.error("microsh"), err);
        }
    }
}
