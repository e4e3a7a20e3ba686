//! Per-file processing
//!
//! Provides consistent handling for:
//! - Markdown notes (filtered)
//! - Everything else (passed through as-is)
//! - Unreadable or non-UTF-8 files (skipped, never fatal)

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::filter::strip_excalidraw;

/// Result of processing a single file
#[derive(Debug, Clone)]
pub struct ProcessedFile {
    /// The (possibly filtered) content, if the file could be read
    pub content: Option<String>,

    /// Whether an Excalidraw section was removed
    pub excalidraw_removed: bool,

    /// Reason for skipping (if skipped)
    pub skip_reason: Option<String>,
}

impl ProcessedFile {
    /// A file whose content goes through untouched
    fn passthrough(content: String) -> Self {
        Self {
            content: Some(content),
            excalidraw_removed: false,
            skip_reason: None,
        }
    }

    /// A markdown note that went through the filter
    fn filtered(content: String, excalidraw_removed: bool) -> Self {
        Self {
            content: Some(content),
            excalidraw_removed,
            skip_reason: None,
        }
    }

    /// A file that could not be read or decoded
    fn skipped(reason: impl Into<String>) -> Self {
        Self {
            content: None,
            excalidraw_removed: false,
            skip_reason: Some(reason.into()),
        }
    }

    /// Whether the file was skipped
    pub fn is_skipped(&self) -> bool {
        self.content.is_none()
    }
}

/// Check whether a path names a markdown file
pub fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("md")
}

/// Read one file and filter it if it is a markdown note.
///
/// Non-markdown files pass through unmodified. Read and decode failures
/// become a skip reason; the caller reports them and moves on, and skipped
/// files count toward neither the processed nor the found totals.
pub fn process_file(path: &Path) -> ProcessedFile {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return ProcessedFile::skipped(format!("Cannot read file: {}", e)),
    };

    if !is_markdown(path) {
        return ProcessedFile::passthrough(content);
    }

    let (filtered, changed) = strip_excalidraw(&content);
    ProcessedFile::filtered(filtered, changed)
}

/// Strip Excalidraw data from a single note, rewriting it in place.
///
/// The file is only written when the filter actually changed it. Returns
/// whether a rewrite happened. Intended for embedding callers that clean
/// notes one at a time instead of mirroring a whole tree.
pub fn clean_file_in_place(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Cannot read note: {}", path.display()))?;

    let (filtered, changed) = strip_excalidraw(&content);
    if changed {
        fs::write(path, filtered)
            .with_context(|| format!("Cannot write note: {}", path.display()))?;
    }
    Ok(changed)
}
