//! Progress reporting for the bounded retry loop

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Attempts: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Progress display for a multi-attempt generation request
pub struct AttemptProgress {
    bar: Option<ProgressBar>,
}

impl AttemptProgress {
    /// Create a display for `attempts` attempts; `quiet` suppresses it
    pub fn new(attempts: usize, quiet: bool) -> Self {
        let bar = (!quiet).then(|| {
            let bar = ProgressBar::new(attempts as u64);
            bar.set_style(ATTEMPT_STYLE.clone());
            bar
        });
        Self { bar }
    }

    /// Record an attempt that ended in contradiction
    pub fn attempt_failed(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Close out the display
    pub fn finish(&self, succeeded: bool) {
        if let Some(bar) = &self.bar {
            if succeeded {
                bar.finish_with_message("solved");
            } else {
                bar.finish_with_message("attempt budget exhausted");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_mode_creates_no_bar() {
        let progress = AttemptProgress::new(10, true);
        assert!(progress.bar.is_none());
        // all operations are no-ops without a bar
        progress.attempt_failed();
        progress.finish(false);
    }
}
