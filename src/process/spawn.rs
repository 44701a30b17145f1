/*!
 * Process Spawning
 * Safe wrapper over the OS fork primitive
 */

use super::types::{SpawnError, SpawnResult};
use crate::core::types::Pid;
use nix::unistd::{self, ForkResult};

/// Handle to a freshly created child process
///
/// Carries the child's PID for reporting only. There is intentionally no
/// wait operation on this handle: nothing in this crate ever collects a
/// child's exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildHandle {
    pid: Pid,
}

impl ChildHandle {
    pub fn pid(&self) -> Pid {
        self.pid
    }
}

/// Role taken by the current thread of execution after a successful fork
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkOutcome {
    /// The process that called `spawn_duplicate`, holding the new child
    Originator(ChildHandle),
    /// The freshly created process
    Spawned,
}

/// Duplicate the current process.
///
/// Both resulting processes return from this call: the originator gets a
/// handle to the new child, the new child gets `Spawned`. Callers are
/// expected to be effectively single-threaded at the fork point; the child
/// only inherits the calling thread.
pub fn spawn_duplicate() -> SpawnResult<ForkOutcome> {
    // SAFETY: the child branch returns straight to the caller, which only
    // sleeps, emits log lines, and exits.
    match unsafe { unistd::fork() } {
        Ok(ForkResult::Parent { child }) => Ok(ForkOutcome::Originator(ChildHandle {
            pid: child.as_raw() as Pid,
        })),
        Ok(ForkResult::Child) => Ok(ForkOutcome::Spawned),
        Err(errno) => Err(SpawnError::CreationFailed(errno.to_string())),
    }
}

/// PID of the current process
pub fn current_pid() -> Pid {
    unistd::getpid().as_raw() as Pid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_pid_is_nonzero() {
        assert!(current_pid() > 0);
    }

    #[test]
    fn test_child_handle_reports_pid() {
        let handle = ChildHandle { pid: 4321 };
        assert_eq!(handle.pid(), 4321);
        assert_eq!(ForkOutcome::Originator(handle), ForkOutcome::Originator(handle));
    }
}
