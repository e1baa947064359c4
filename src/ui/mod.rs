//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while the application scan runs
//! - Rendering associations for the terminal ([`formatter`])
//!
//! Progress goes through the [`ScanProgress`] trait so JSON output and tests
//! can run without a spinner.

pub mod formatter;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

pub use formatter::{OutputMode, format, format_lookup};

/// Progress reporter for the application scan
pub trait ScanProgress {
    /// The scan was submitted
    fn start(&mut self);

    /// Still waiting for the scan
    fn tick(&mut self);

    /// The scan delivered `records` applications
    fn finish(&mut self, records: usize);

    /// The scan failed or timed out
    fn abandon(&mut self);
}

/// Spinner on stderr; hidden automatically when stderr is not a terminal
pub struct SpinnerProgress {
    pb: ProgressBar,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        pb.set_style(style);

        Self { pb }
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanProgress for SpinnerProgress {
    fn start(&mut self) {
        self.pb.set_message("Scanning installed applications...");
        self.pb.enable_steady_tick(Duration::from_millis(120));
    }

    fn tick(&mut self) {
        self.pb.tick();
    }

    fn finish(&mut self, _records: usize) {
        self.pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.pb.abandon();
    }
}

/// No-op reporter
#[derive(Default)]
pub struct SilentProgress;

impl ScanProgress for SilentProgress {
    fn start(&mut self) {}

    fn tick(&mut self) {}

    fn finish(&mut self, _records: usize) {}

    fn abandon(&mut self) {}
}
