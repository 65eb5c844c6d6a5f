//! Scoped ownership of spawned timer tasks.

use std::future::Future;

use tokio::task::JoinHandle;

/// Owned handle to a spawned timer task; the task is aborted when the
/// handle drops.
///
/// Timers in the shell are always scoped to a piece of state (the autoplay
/// cadence to the armed scheduler, the unlock to its lock generation), so
/// revoking the handle on every state transition that invalidates it is
/// what keeps a timer from firing into a state that no longer exists.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Spawn `future` onto the current runtime and own its lifetime.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            task: tokio::spawn(future),
        }
    }

    /// Whether the task has already run to completion or been aborted.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Abort explicitly; equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
