//! Thinking indicator shown while a dispatch is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner displayed between submitting a question and rendering the
/// answer (or the error notice). Always resolved by [`stop`](Self::stop).
pub struct ThinkingSpinner {
    bar: ProgressBar,
}

impl ThinkingSpinner {
    pub fn start() -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message("Samvaad is thinking...");
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    pub fn stop(self) {
        self.bar.finish_and_clear();
    }
}
