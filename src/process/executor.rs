use std::ffi::CString;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use tracing::debug;

use super::{signal, ProcessError, ProcessStatus};

/// Exit status of a child whose `execv` failed.
pub const EXEC_FAILURE: libc::c_int = 127;

/// Runs external programs in the foreground: fork, exec in the child,
/// and block in the parent until the child exits or stops.
#[derive(Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// `argv[0]` is passed through as the program's own name.
    pub fn execute(&self, program: &Path, argv: &[String]) -> Result<ProcessStatus, ProcessError> {
        let c_program = CString::new(program.as_os_str().as_bytes())
            .map_err(|_| ProcessError::InvalidArgument(program.display().to_string()))?;
        let c_args = argv
            .iter()
            .map(|arg| {
                CString::new(arg.as_bytes()).map_err(|_| ProcessError::InvalidArgument(arg.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let mut c_argv: Vec<*const libc::c_char> = c_args.iter().map(|a| a.as_ptr()).collect();
        c_argv.push(std::ptr::null());

        // Prepared up front: the child may only make async-signal-safe calls.
        let failure_prefix = CString::new(format!("microsh: {}", program.display()))
            .map_err(|_| ProcessError::InvalidArgument(program.display().to_string()))?;

        let _ = io::stdout().flush();
        let _ = io::stderr().flush();

        let pid = unsafe { libc::fork() };
        match pid {
            -1 => Err(ProcessError::Fork(io::Error::last_os_error())),
            0 => {
                signal::restore_defaults();
                unsafe {
                    libc::execv(c_program.as_ptr(), c_argv.as_ptr());
                    libc::perror(failure_prefix.as_ptr());
                    libc::_exit(EXEC_FAILURE)
                }
            }
            child => {
                debug!(pid = child, program = %program.display(), "spawned");
                let status = wait_for(child)?;
                debug!(pid = child, ?status, "child finished");
                Ok(status)
            }
        }
    }
}

fn wait_for(pid: libc::pid_t) -> Result<ProcessStatus, ProcessError> {
    let mut raw: libc::c_int = 0;
    loop {
        let rc = unsafe { libc::waitpid(pid, &mut raw, libc::WUNTRACED) };
        if rc == -1 {
            let err = io::Error::last_os_error();
            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }
            return Err(ProcessError::Wait(err));
        }
        if let Some(status) = ProcessStatus::from_wait_status(raw) {
            return Ok(status);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{Duration, Instant};

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exit_status_returned() -> Result<(), ProcessError> {
        let executor = ProcessExecutor::new();
        let status = executor.execute(Path::new("/bin/sh"), &argv(&["sh", "-c", "exit 3"]))?;
        assert_eq!(status, ProcessStatus::Exited(3));

        let status = executor.execute(Path::new("/bin/sh"), &argv(&["sh", "-c", "true"]))?;
        assert!(status.success());
        Ok(())
    }

    #[test]
    fn test_arguments_passed_verbatim() -> Result<(), Box<dyn std::error::Error>> {
        let out = std::env::temp_dir().join(format!("microsh_exec_args_{}", std::process::id()));
        let script = format!(r#"printf '%s|' "$0" "$@" > {}"#, out.display());

        let executor = ProcessExecutor::new();
        let status = executor.execute(
            Path::new("/bin/sh"),
            &argv(&["sh", "-c", &script, "argv0", "hi there", ""]),
        )?;
        assert!(status.success());
        assert_eq!(fs::read_to_string(&out)?, "argv0|hi there||");

        fs::remove_file(out)?;
        Ok(())
    }

    #[test]
    fn test_parent_blocks_until_child_exits() -> Result<(), Box<dyn std::error::Error>> {
        let marker = std::env::temp_dir().join(format!("microsh_exec_wait_{}", std::process::id()));
        let _ = fs::remove_file(&marker);
        let script = format!("sleep 0.3; touch {}", marker.display());

        let start = Instant::now();
        let status = ProcessExecutor::new().execute(Path::new("/bin/sh"), &argv(&["sh", "-c", &script]))?;

        assert!(status.success());
        assert!(start.elapsed() >= Duration::from_millis(300));
        assert!(marker.exists());

        fs::remove_file(marker)?;
        Ok(())
    }

    #[test]
    fn test_exec_failure_exits_child() -> Result<(), ProcessError> {
        let status = ProcessExecutor::new()
            .execute(Path::new("/microsh/no/such/binary"), &argv(&["binary"]))?;
        assert_eq!(status, ProcessStatus::Exited(EXEC_FAILURE));
        Ok(())
    }

    #[test]
    fn test_signal_termination() -> Result<(), ProcessError> {
        let status = ProcessExecutor::new()
            .execute(Path::new("/bin/sh"), &argv(&["sh", "-c", "kill -TERM $$"]))?;
        assert_eq!(status, ProcessStatus::Signaled(libc::SIGTERM));
        Ok(())
    }

    #[test]
    fn test_nul_byte_rejected() {
        let result = ProcessExecutor::new().execute(Path::new("/bin/echo"), &argv(&["echo", "a\0b"]));
        assert!(matches!(result, Err(ProcessError::InvalidArgument(_))));
    }
}
