//! Loading indicator shown while the dashboard's metrics are in flight.

use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::time::Instant;

const BAR_TEMPLATE: &str = "{prefix:>10.bold.cyan} [{bar:25}] {msg}";
const SPINNER_TEMPLATE: &str = "{prefix:>10.bold.cyan} [{spinner}] {msg}";
const SPINNER_FRAMES: &[&str] = &[
    "===                      ",
    "   ===                   ",
    "      ===                ",
    "         ===             ",
    "            ===          ",
    "               ===       ",
    "                  ===    ",
    "                     === ",
    "                  ===    ",
    "               ===       ",
    "            ===          ",
    "         ===             ",
    "      ===                ",
    "   ===                   ",
];

#[derive(Debug)]
struct DelayedProgressState {
    start_time: Instant,
    delay: Duration,
    visible: AtomicBool,
    has_content: AtomicBool,
    is_indeterminate: AtomicBool,
}

/// A progress indicator on stderr that stays hidden until an operation has run for longer
/// than `delay`, so fast loads never flash a spinner.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    bar: ProgressBar,
    state: Arc<DelayedProgressState>,
}

impl ProgressReporter {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_style(bar_style());
        bar.set_length(0);

        Self {
            bar,
            state: Arc::new(DelayedProgressState {
                start_time: Instant::now(),
                delay,
                visible: AtomicBool::new(false),
                has_content: AtomicBool::new(false),
                is_indeterminate: AtomicBool::new(false),
            }),
        }
    }

    fn ensure_visible(&self) {
        if !self.state.visible.load(Ordering::Relaxed)
            && self.state.has_content.load(Ordering::Relaxed)
            && self.state.start_time.elapsed() >= self.state.delay
        {
            self.state.visible.store(true, Ordering::Relaxed);
            self.bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(10));
        }
    }

    /// Whether the indicator has been drawn.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.visible.load(Ordering::Relaxed)
    }

    /// Whether the spinner is showing rather than a bar.
    #[must_use]
    pub fn is_indeterminate(&self) -> bool {
        self.state.is_indeterminate.load(Ordering::Relaxed)
    }

    #[cfg(test)]
    pub(crate) fn message(&self) -> String {
        self.bar.message()
    }

    pub fn set_prefix(&self, prefix: &str) {
        self.bar.set_prefix(prefix.to_string());
    }

    pub fn set_message(&self, msg: impl AsRef<str>) {
        let msg = msg.as_ref();
        if !msg.is_empty() {
            self.state.has_content.store(true, Ordering::Relaxed);
        }
        self.ensure_visible();
        self.bar.set_message(msg.to_string());
    }

    /// Show a bouncing spinner for work of unknown size.
    pub fn enable_indeterminate_mode(&self) {
        self.state.is_indeterminate.store(true, Ordering::Relaxed);
        self.state.has_content.store(true, Ordering::Relaxed);
        self.ensure_visible();

        self.bar.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("spinner template must be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    /// Switch to a bar of `len` steps, leaving spinner mode if needed.
    pub fn enable_determinate_mode(&self, len: u64) {
        if self.state.is_indeterminate.swap(false, Ordering::Relaxed) {
            self.bar.disable_steady_tick();
            self.bar.set_style(bar_style());
        }

        if len > 0 {
            self.state.has_content.store(true, Ordering::Relaxed);
        }
        self.ensure_visible();
        self.bar.set_length(len);
    }

    pub fn set_position(&self, pos: u64) {
        self.ensure_visible();
        self.bar.set_position(pos);
    }

    pub fn finish_and_clear(&self) {
        if self.state.visible.load(Ordering::Relaxed) {
            self.bar.finish_and_clear();
        }
    }

    /// Start a background task that reveals the indicator once the delay has elapsed, even
    /// while the caller is blocked on an await.
    ///
    /// Returns a guard that aborts the task when dropped.
    #[must_use]
    pub fn start_visibility_checking(&self) -> VisibilityTaskGuard {
        let progress = self.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(250));
            loop {
                let _ = interval.tick().await;
                if !progress.is_visible() {
                    progress.ensure_visible();
                }
            }
        });
        VisibilityTaskGuard(task)
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(BAR_TEMPLATE)
        .expect("progress bar template must be valid")
        .progress_chars("=> ")
}

/// Guard that aborts the visibility checking task when dropped.
#[derive(Debug)]
pub struct VisibilityTaskGuard(tokio::task::JoinHandle<()>);

impl Drop for VisibilityTaskGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}
