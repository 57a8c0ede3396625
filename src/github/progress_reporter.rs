//! Progress display for fetches.

use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::time::Instant;

const BAR_TEMPLATE: &str = "{prefix:>12.bold.cyan} [{bar:25}] {pos}/{len} {msg}";
const SPINNER_TEMPLATE: &str = "{prefix:>12.bold.cyan} {spinner} {msg}";

#[derive(Debug)]
struct DelayState {
    start_time: Instant,
    delay: Duration,
    visible: AtomicBool,
    enabled: bool,
}

/// A progress bar that stays hidden until an operation has run for longer than a delay.
///
/// Quick updates finish without ever drawing anything; long fetches show a bar on stderr.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    bar: ProgressBar,
    state: Arc<DelayState>,
}

impl ProgressReporter {
    /// Create a reporter. A disabled reporter never draws.
    #[must_use]
    pub fn new(delay: Duration, enabled: bool) -> Self {
        let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden());

        Self {
            bar,
            state: Arc::new(DelayState {
                start_time: Instant::now(),
                delay,
                visible: AtomicBool::new(false),
                enabled,
            }),
        }
    }

    /// A reporter that never draws.
    #[must_use]
    pub fn hidden() -> Self {
        Self::new(Duration::ZERO, false)
    }

    fn ensure_visible(&self) {
        if self.state.enabled && !self.state.visible.load(Ordering::Relaxed) && self.state.start_time.elapsed() >= self.state.delay {
            self.state.visible.store(true, Ordering::Relaxed);
            self.bar.set_draw_target(ProgressDrawTarget::stderr_with_hz(10));
        }
    }

    /// Show a spinner for work of unknown size, such as paging through an issue listing.
    pub fn start_indeterminate(&self, prefix: &str, msg: impl Into<String>) {
        if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            self.bar.set_style(style);
        }
        self.bar.set_prefix(prefix.to_string());
        self.bar.set_message(msg.into());
        self.bar.enable_steady_tick(Duration::from_millis(100));
        self.ensure_visible();
    }

    /// Switch to a bar counting up to `len`.
    pub fn start_determinate(&self, prefix: &str, len: u64) {
        self.bar.disable_steady_tick();
        if let Ok(style) = ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            self.bar.set_style(style.progress_chars("=> "));
        }
        self.bar.set_prefix(prefix.to_string());
        self.bar.set_message(String::new());
        self.bar.set_length(len);
        self.bar.set_position(0);
        self.ensure_visible();
    }

    pub fn inc(&self) {
        self.ensure_visible();
        self.bar.inc(1);
    }

    pub fn finish_and_clear(&self) {
        self.bar.disable_steady_tick();
        if self.state.visible.load(Ordering::Relaxed) {
            self.bar.finish_and_clear();
        }
    }

    /// Poll in the background so the bar appears once the delay passes, even while a single
    /// request is still outstanding.
    ///
    /// Returns a guard that stops the polling when dropped.
    #[must_use]
    pub fn start_visibility_checking(&self) -> VisibilityTaskGuard {
        let progress = self.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(250));
            loop {
                let _ = interval.tick().await;
                progress.ensure_visible();
            }
        });
        VisibilityTaskGuard(task)
    }
}

/// Stops background visibility polling when dropped.
#[derive(Debug)]
pub struct VisibilityTaskGuard(tokio::task::JoinHandle<()>);

impl Drop for VisibilityTaskGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}
