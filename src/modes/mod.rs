//! Processing modes
//!
//! Three output modes share one walk-and-filter core: two mirror modes that
//! write a cleaned sibling tree, and a concat mode that flattens everything
//! into a single clipboard payload.

pub mod concat;
pub mod mirror;

use colored::Colorize;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::model::RunSummary;

/// Processing mode selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Mirror the tree into a `<source>-clean` sibling
    #[default]
    Duplicate,
    /// Mirror the tree into a `<source>-NoXK` sibling
    NoXk,
    /// Concatenate all cleaned files for the clipboard
    Concat,
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "duplicate" => Ok(Mode::Duplicate),
            "noxk" => Ok(Mode::NoXk),
            "concat" => Ok(Mode::Concat),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

impl Mode {
    /// Suffix appended to the source directory name in mirror modes
    pub fn dest_suffix(&self) -> Option<&'static str> {
        match self {
            Mode::Duplicate => Some("-clean"),
            Mode::NoXk => Some("-NoXK"),
            Mode::Concat => None,
        }
    }
}

/// Count files under the source root before traversal begins.
///
/// Fixes the progress bar total up front; the total is not recomputed if
/// another process mutates the tree mid-run.
pub fn count_files(source: &Path) -> u64 {
    WalkDir::new(source)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count() as u64
}

/// Print the processed/found counts shared by all modes
pub(crate) fn print_counts(summary: &RunSummary) {
    println!("\n{} Processed {} files", "✓".green(), summary.processed);
    if summary.excalidraw_found > 0 {
        println!(
            "{}",
            format!(
                "🎨 Removed Excalidraw data from {} files",
                summary.excalidraw_found
            )
            .yellow()
        );
    }
}
