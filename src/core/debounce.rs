//! Debounced evaluation scheduling.
//!
//! A [`Debouncer`] owns at most one pending evaluation. Scheduling a new one
//! revokes the previous handle, so an evaluation only ever runs for the most
//! recent input. The scheduler is driven cooperatively: the host's event loop
//! calls [`Debouncer::poll`] with the current time and runs the evaluation
//! when a handle is returned. No threads are involved.
//!
//! With the `async` feature, [`DebouncedTask`] offers the same contract on
//! top of a tokio timer for hosts that already run a runtime.

use std::time::{Duration, Instant};

/// Identifies one scheduled evaluation. Revoked handles never fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Pending {
    handle: DebounceHandle,
    deadline: Instant,
}

#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    next_id: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            next_id: 0,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule an evaluation `window` after `now`, replacing any pending one
    pub fn schedule(&mut self, now: Instant) -> DebounceHandle {
        if let Some(previous) = self.pending.take() {
            tracing::trace!(handle = previous.handle.0, "Superseded pending evaluation");
        }

        self.next_id += 1;
        let handle = DebounceHandle(self.next_id);
        self.pending = Some(Pending {
            handle,
            deadline: now + self.window,
        });
        tracing::trace!(handle = handle.0, window_ms = self.window.as_millis() as u64, "Scheduled evaluation");
        handle
    }

    /// Cancel whatever is pending. Returns true if something was cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(pending) => {
                tracing::trace!(handle = pending.handle.0, "Cancelled pending evaluation");
                true
            }
            None => false,
        }
    }

    /// Cancel `handle` if it is still the pending evaluation
    pub fn revoke(&mut self, handle: DebounceHandle) -> bool {
        if self.pending.map(|p| p.handle) == Some(handle) {
            self.cancel()
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.deadline)
    }

    /// Fire the pending evaluation if its window has elapsed.
    ///
    /// A handle is returned at most once; afterwards nothing is pending.
    pub fn poll(&mut self, now: Instant) -> Option<DebounceHandle> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        Some(pending.handle)
    }
}

#[cfg(feature = "async")]
pub use self::task::DebouncedTask;

#[cfg(feature = "async")]
mod task {
    use std::time::Duration;

    use tokio::task::JoinHandle;

    /// A unit of work that runs after a delay unless cancelled first.
    ///
    /// Dropping the task aborts it.
    pub struct DebouncedTask {
        handle: JoinHandle<()>,
    }

    impl DebouncedTask {
        /// Spawn `work` on the current tokio runtime after `window`
        pub fn spawn<F>(window: Duration, work: F) -> Self
        where
            F: FnOnce() + Send + 'static,
        {
            let handle = tokio::spawn(async move {
                tokio::time::sleep(window).await;
                work();
            });
            Self { handle }
        }

        pub fn cancel(&self) {
            self.handle.abort();
        }

        pub fn is_finished(&self) -> bool {
            self.handle.is_finished()
        }
    }

    impl Drop for DebouncedTask {
        fn drop(&mut self) {
            self.handle.abort();
        }
    }
}
