//! Debounced write scheduler
//!
//! An explicit timer task with cancel-and-reschedule semantics: each
//! `schedule` call aborts any pending write and starts a new quiet-period
//! timer, so a burst of mutations produces a single write. `cancel` is the
//! flush path's way of making sure the last scheduled write does not race
//! an immediate one.

use parking_lot::Mutex;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct DebouncedWriter {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl DebouncedWriter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `write` to run after the quiet period, superseding any
    /// write that is still pending. The future must capture handles to
    /// live state so it serializes what is current at fire time, not at
    /// schedule time.
    pub fn schedule<F>(&self, write: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            write.await;
        });

        if let Some(previous) = self.pending.lock().replace(handle) {
            previous.abort();
        }
    }

    /// Abort the pending write, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for DebouncedWriter {
    fn drop(&mut self) {
        self.cancel();
    }
}
