use std::fmt;

pub mod executor;
pub mod signal;

pub use executor::ProcessExecutor;

/// How a child process ended (or paused).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Exited(i32),
    Signaled(i32),
    Stopped(i32),
}

impl ProcessStatus {
    pub fn success(&self) -> bool {
        matches!(self, ProcessStatus::Exited(0))
    }

    /// Shell-style numeric status: the exit code, or 128 plus the signal.
    pub fn code(&self) -> i32 {
        match *self {
            ProcessStatus::Exited(code) => code,
            ProcessStatus::Signaled(sig) | ProcessStatus::Stopped(sig) => 128 + sig,
        }
    }

    pub(crate) fn from_wait_status(status: libc::c_int) -> Option<Self> {
        if libc::WIFEXITED(status) {
            Some(ProcessStatus::Exited(libc::WEXITSTATUS(status)))
        } else if libc::WIFSIGNALED(status) {
            Some(ProcessStatus::Signaled(libc::WTERMSIG(status)))
        } else if libc::WIFSTOPPED(status) {
            Some(ProcessStatus::Stopped(libc::WSTOPSIG(status)))
        } else {
            None
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ProcessStatus::Exited(code) => write!(f, "exited with status {}", code),
            ProcessStatus::Signaled(sig) => {
                write!(f, "terminated by signal {}", signal::describe(sig))
            }
            ProcessStatus::Stopped(sig) => write!(f, "stopped by signal {}", signal::describe(sig)),
        }
    }
}

#[derive(Debug)]
pub enum ProcessError {
    Fork(std::io::Error),
    Wait(std::io::Error),
    InvalidArgument(String),
    Signal(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Fork(e) => write!(f, "fork failed: {}", e),
            ProcessError::Wait(e) => write!(f, "wait failed: {}", e),
            ProcessError::InvalidArgument(arg) => {
                write!(f, "argument contains a NUL byte: {:?}", arg)
            }
            ProcessError::Signal(e) => write!(f, "signal setup failed: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
