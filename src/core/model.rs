//! Run accounting
//!
//! Aggregate results produced by one full traversal, consumed by the
//! reporting layer once the walk finishes.

/// Aggregate counts for one traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files read and written/appended successfully
    pub processed: usize,

    /// Files where an Excalidraw section was removed
    pub excalidraw_found: usize,
}

impl RunSummary {
    /// Count one successfully processed file.
    ///
    /// `excalidraw_found` can only grow together with `processed`, so
    /// `excalidraw_found <= processed` holds for every summary built
    /// through this method.
    pub fn record(&mut self, excalidraw_removed: bool) {
        self.processed += 1;
        if excalidraw_removed {
            self.excalidraw_found += 1;
        }
    }
}

/// Concat-mode result: the clipboard payload plus the run counts
#[derive(Debug, Clone)]
pub struct ConcatOutput {
    /// All cleaned file bodies, each prefixed with a `# File:` header
    pub text: String,

    /// Aggregate counts for the run
    pub summary: RunSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_found_below_processed() {
        let mut summary = RunSummary::default();
        summary.record(true);
        summary.record(false);
        summary.record(true);

        assert_eq!(summary.processed, 3);
        assert_eq!(summary.excalidraw_found, 2);
        assert!(summary.excalidraw_found <= summary.processed);
    }

    #[test]
    fn test_default_summary_is_empty() {
        let summary = RunSummary::default();
        assert_eq!(summary.processed, 0);
        assert_eq!(summary.excalidraw_found, 0);
    }
}
