//! Counting of outstanding backend requests.

use super::ProgressReporter;
use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct RequestCounter {
    issued: AtomicU64,
    completed: AtomicU64,
}

/// Tracks issued and completed backend requests and mirrors them on a progress indicator
/// as "completed/issued requests".
#[derive(Debug, Clone)]
pub struct RequestTracker {
    counter: Arc<RequestCounter>,
    progress: ProgressReporter,
}

impl RequestTracker {
    #[must_use]
    pub fn new(progress: ProgressReporter) -> Self {
        Self {
            counter: Arc::new(RequestCounter::default()),
            progress,
        }
    }

    /// Mark a request as issued until the returned guard is dropped.
    ///
    /// The request counts as completed even when its future is dropped before finishing,
    /// as happens to the reads still in flight when another read fails.
    #[must_use]
    pub fn track(&self) -> TrackedRequest<'_> {
        self.add_request();
        TrackedRequest(self)
    }

    /// Mark that a request has been issued.
    pub fn add_request(&self) {
        let _ = self.counter.issued.fetch_add(1, Ordering::Relaxed);
        self.update_progress();
    }

    /// Mark that a request has finished, successfully or not.
    pub fn complete_request(&self) {
        let _ = self.counter.completed.fetch_add(1, Ordering::Relaxed);
        self.update_progress();
    }

    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter.issued.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn completed(&self) -> u64 {
        self.counter.completed.load(Ordering::Relaxed)
    }

    fn update_progress(&self) {
        let issued = self.issued();
        let completed = self.completed();

        if issued == 0 {
            return;
        }

        // A spinner stays a spinner; only its message follows the counts.
        if !self.progress.is_indeterminate() {
            self.progress.enable_determinate_mode(issued);
            self.progress.set_position(completed);
        }
        self.progress.set_message(format!("{completed}/{issued} requests"));
    }
}

/// An issued request, completed on drop.
#[derive(Debug)]
pub struct TrackedRequest<'a>(&'a RequestTracker);

impl Drop for TrackedRequest<'_> {
    fn drop(&mut self) {
        self.0.complete_request();
    }
}
