//! Progress reporting
//!
//! Traversals report through an explicit `ProgressSink` handle passed in by
//! the caller. The sink is purely observational; it has no control over the
//! walk.

use indicatif::{ProgressBar, ProgressStyle};

/// Observer for per-file traversal progress
pub trait ProgressSink {
    /// Record one completed file (successful or skipped) with its relative path
    fn advance(&self, description: &str);

    /// Close out the display once the traversal is done
    fn finish(&self);
}

/// Terminal progress bar backed by indicatif
pub struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    /// Create a bar expecting `total` ticks, one per file under the source root.
    ///
    /// The total is counted once before traversal begins; if another process
    /// mutates the tree mid-run the final tick count may not match the bar.
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} {msg} [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap()
                .progress_chars("=> "),
        );
        Self { bar }
    }
}

impl ProgressSink for TerminalProgress {
    fn advance(&self, description: &str) {
        self.bar.set_message(format!("Processing: {}", description));
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// No-op sink for quiet mode and tests
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn advance(&self, _description: &str) {}

    fn finish(&self) {}
}
