//! Loading the dashboard's metrics and reporting progress while doing so.

mod load_handle;
mod metrics_loader;
mod progress_reporter;
mod request_tracker;

pub use load_handle::LoadHandle;
pub use metrics_loader::{MetricsLoader, load};
pub use progress_reporter::{ProgressReporter, VisibilityTaskGuard};
pub use request_tracker::{RequestTracker, TrackedRequest};

/// Log target for the metrics loader
pub(crate) const LOG_TARGET: &str = "loading";
