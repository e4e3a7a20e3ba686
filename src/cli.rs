//! CLI module - Command-line interface definitions and handlers

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::core::progress::{NoProgress, ProgressSink, TerminalProgress};
use crate::modes::{self, Mode};

/// excaclean - strip trailing Excalidraw data from markdown note trees.
#[derive(Parser, Debug)]
#[command(name = "excaclean")]
#[command(
    author,
    version,
    about,
    long_about = r##"excaclean walks a directory of notes, removes the trailing
"# Excalidraw Data" section from every markdown file, and copies everything
else through untouched.

Modes:
- duplicate (default): write a cleaned mirror of the tree to <SOURCE_DIR>-clean
- noxk: write a cleaned mirror of the tree to <SOURCE_DIR>-NoXK
- concat: concatenate all cleaned files into one blob and copy it to the clipboard

Examples:
    excaclean ~/my-notes
    excaclean ~/my-notes --mode noxk
    excaclean ~/my-notes -m concat
"##
)]
pub struct Cli {
    /// Directory containing the markdown notes to process.
    #[arg(
        value_name = "SOURCE_DIR",
        long_help = "Directory containing the markdown notes to process.\n\n\
The directory must exist; it is never modified. Mirror modes write a\n\
cleaned copy next to it."
    )]
    pub source_dir: PathBuf,

    /// Processing mode (duplicate/noxk/concat).
    #[arg(
        short,
        long,
        default_value = "duplicate",
        value_name = "MODE",
        value_parser = ["duplicate", "noxk", "concat"],
        long_help = "Select the processing mode.\n\n\
Supported values:\n\
- duplicate (default): cleaned mirror at <SOURCE_DIR>-clean\n\
- noxk: cleaned mirror at <SOURCE_DIR>-NoXK\n\
- concat: one concatenated blob copied to the clipboard"
    )]
    pub mode: String,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. This is useful when piping to files or when your\n\
terminal does not support ANSI colors."
    )]
    pub no_color: bool,

    /// Quiet mode (no progress bar).
    #[arg(
        short,
        long,
        long_help = "Suppress the progress bar. The final summary is still printed."
    )]
    pub quiet: bool,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    // clap has already validated the mode value
    let mode: Mode = cli.mode.parse().unwrap_or_default();

    let source = cli.source_dir.canonicalize().with_context(|| {
        format!(
            "Source directory not found: {}",
            cli.source_dir.display()
        )
    })?;
    if !source.is_dir() {
        bail!("Source path is not a directory: {}", source.display());
    }

    // Count total files for the progress bar before traversal begins
    let total = modes::count_files(&source);
    let progress: Box<dyn ProgressSink> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(TerminalProgress::new(total))
    };

    match mode {
        Mode::Duplicate | Mode::NoXk => {
            modes::mirror::run_mirror(&source, mode, progress.as_ref())
        }
        Mode::Concat => modes::concat::run_concat(&source, progress.as_ref()),
    }
}
