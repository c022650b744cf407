//! Cancellation flag shared between a background loop and its owner.
//!
//! Leptos cleanup callbacks must be `Send + Sync`, so liveness is an
//! `Arc<AtomicBool>` even though the loops themselves run on the browser's
//! single thread.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle to a cancellable periodic task. Clones share one flag.
#[derive(Clone, Debug)]
pub struct TaskHandle {
    live: Arc<AtomicBool>,
}

impl TaskHandle {
    /// A live handle.
    #[must_use]
    pub fn new() -> Self {
        Self { live: Arc::new(AtomicBool::new(true)) }
    }

    /// Stop the task. Safe to call more than once.
    pub fn cancel(&self) {
        self.live.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Relaxed)
    }
}

impl Default for TaskHandle {
    fn default() -> Self {
        Self::new()
    }
}
