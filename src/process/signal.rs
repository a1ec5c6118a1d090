use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use signal_hook::consts::{SIGINT, SIGQUIT};

use crate::process::ProcessError;

/// Keyboard interrupts aimed at the shell itself.
///
/// Installing flag handlers keeps the shell alive on Ctrl-C and Ctrl-\ while
/// a child runs in the foreground. Handled dispositions revert to the default
/// across `execv`, so children still die on those signals.
#[derive(Clone)]
pub struct InterruptFlag {
    raised: Arc<AtomicBool>,
}

impl InterruptFlag {
    pub fn install() -> Result<Self, ProcessError> {
        let raised = Arc::new(AtomicBool::new(false));
        for sig in [SIGINT, SIGQUIT] {
            signal_hook::flag::register(sig, Arc::clone(&raised)).map_err(ProcessError::Signal)?;
        }
        Ok(Self { raised })
    }

    /// Returns whether an interrupt arrived since the last call.
    pub fn take(&self) -> bool {
        self.raised.swap(false, Ordering::Relaxed)
    }
}

/// Puts SIGINT and SIGQUIT back to their defaults. Runs in the forked child
/// before `execv`, so it only makes async-signal-safe calls.
pub(crate) fn restore_defaults() {
    unsafe {
        libc::signal(SIGINT, libc::SIG_DFL);
        libc::signal(SIGQUIT, libc::SIG_DFL);
    }
}

pub fn describe(sig: libc::c_int) -> String {
    match signal_hook::low_level::signal_name(sig) {
        Some(name) => name.to_string(),
        None => sig.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_raised_once() -> Result<(), ProcessError> {
        let flag = InterruptFlag::install()?;
        flag.take();

        assert_eq!(unsafe { libc::raise(SIGINT) }, 0);
        assert!(flag.take());
        assert!(!flag.take());
        Ok(())
    }

    #[test]
    fn test_describe_known_and_unknown() {
        assert_eq!(describe(libc::SIGTERM), "SIGTERM");
        assert_eq!(describe(9999), "9999");
    }
}
