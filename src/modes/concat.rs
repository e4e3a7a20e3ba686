//! Concat mode - flatten all cleaned files into one clipboard payload
//!
//! Each successfully processed file contributes a `# File:` section in
//! traversal order; the walker itself has no clipboard dependency, the
//! runner delivers the finished payload.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use walkdir::WalkDir;

use crate::clipboard;
use crate::core::file_reader::process_file;
use crate::core::model::{ConcatOutput, RunSummary};
use crate::core::paths::make_relative;
use crate::core::progress::ProgressSink;

/// Walk the source tree and build the concatenated payload.
///
/// Sections are appended in sorted traversal order and joined with a
/// single newline, so the payload is deterministic for a given tree.
pub fn concatenate(source: &Path, progress: &dyn ProgressSink) -> Result<ConcatOutput> {
    let mut sections = Vec::new();
    let mut summary = RunSummary::default();

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();

        let relative = match make_relative(path, source) {
            Some(r) => r,
            None => continue,
        };

        let processed = process_file(path);
        match processed.content {
            Some(content) => {
                sections.push(format!("\n\n# File: {}\n\n{}", relative, content));
                summary.record(processed.excalidraw_removed);
            }
            None => {
                if let Some(reason) = processed.skip_reason {
                    eprintln!(
                        "{}",
                        format!("Error processing {}: {}", path.display(), reason).red()
                    );
                }
            }
        }
        progress.advance(&relative);
    }

    Ok(ConcatOutput {
        text: sections.join("\n"),
        summary,
    })
}

/// Run concat mode end to end: build the payload, place it on the
/// clipboard, print the summary
pub fn run_concat(source: &Path, progress: &dyn ProgressSink) -> Result<()> {
    let output = concatenate(source, progress)?;
    progress.finish();

    clipboard::copy_to_clipboard(output.text)?;

    super::print_counts(&output.summary);
    println!("{}", "📋 Concatenated content copied to clipboard".blue());

    Ok(())
}
