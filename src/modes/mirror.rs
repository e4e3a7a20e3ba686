//! Mirror modes - write a cleaned copy of the source tree
//!
//! `duplicate` and `noxk` differ only in the destination directory name;
//! both reproduce the source structure exactly, including empty
//! directories, with filtered markdown and untouched copies of everything
//! else.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::Mode;
use crate::core::file_reader::process_file;
use crate::core::model::RunSummary;
use crate::core::paths::{join_normalized, make_relative};
use crate::core::progress::ProgressSink;

/// Compute the destination directory as a sibling of the source
pub fn dest_dir(source: &Path, mode: Mode) -> Result<PathBuf> {
    let suffix = match mode.dest_suffix() {
        Some(s) => s,
        None => bail!("Mode has no destination directory"),
    };
    let name = source
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("Source directory has no usable name: {}", source.display()))?;
    Ok(source.with_file_name(format!("{}{}", name, suffix)))
}

/// Walk the source tree and write a cleaned mirror under `dest`.
///
/// Every directory is recreated even when empty, and every readable file is
/// written to the mirrored path, overwriting whatever is already there.
/// Files that cannot be read, decoded, or written are reported on stderr
/// and skipped; a subtree that cannot be enumerated is skipped the same
/// way. Only successful writes count toward the summary.
pub fn mirror_tree(source: &Path, dest: &Path, progress: &dyn ProgressSink) -> Result<RunSummary> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Cannot create destination directory: {}", dest.display()))?;

    let mut summary = RunSummary::default();

    for entry in WalkDir::new(source).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        let path = entry.path();

        if path == source {
            continue;
        }

        let relative = match make_relative(path, source) {
            Some(r) => r,
            None => continue,
        };
        let target = join_normalized(dest, &relative);

        if entry.file_type().is_dir() {
            if let Err(e) = fs::create_dir_all(&target) {
                eprintln!(
                    "{}",
                    format!("Error creating {}: {}", target.display(), e).red()
                );
            }
            continue;
        }

        let processed = process_file(path);
        match processed.content {
            Some(content) => match fs::write(&target, content) {
                Ok(()) => summary.record(processed.excalidraw_removed),
                Err(e) => eprintln!(
                    "{}",
                    format!("Error writing {}: {}", target.display(), e).red()
                ),
            },
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

    Ok(summary)
}

/// Run a mirror mode end to end and print the summary
pub fn run_mirror(source: &Path, mode: Mode, progress: &dyn ProgressSink) -> Result<()> {
    let dest = dest_dir(source, mode)?;
    let summary = mirror_tree(source, &dest, progress)?;
    progress.finish();

    super::print_counts(&summary);
    println!(
        "{}",
        format!("📁 Output directory: {}", dest.display()).blue()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::progress::NoProgress;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_dest_dir_naming() {
        let source = Path::new("/vault/notes");
        assert_eq!(
            dest_dir(source, Mode::Duplicate).unwrap(),
            PathBuf::from("/vault/notes-clean")
        );
        assert_eq!(
            dest_dir(source, Mode::NoXk).unwrap(),
            PathBuf::from("/vault/notes-NoXK")
        );
    }

    #[test]
    fn test_dest_dir_rejects_concat() {
        assert!(dest_dir(Path::new("/vault/notes"), Mode::Concat).is_err());
    }

    #[test]
    fn test_mirror_filters_markdown_and_copies_the_rest() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("notes");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("a.md"), "Hello\n# Excalidraw Data\n{json}").unwrap();
        fs::write(source.join("b.txt"), "raw").unwrap();

        let dest = temp.path().join("notes-clean");
        let summary = mirror_tree(&source, &dest, &NoProgress).unwrap();

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.excalidraw_found, 1);
        assert_eq!(fs::read_to_string(dest.join("a.md")).unwrap(), "Hello\n");
        assert_eq!(fs::read_to_string(dest.join("b.txt")).unwrap(), "raw");
    }

    #[test]
    fn test_mirror_preserves_nested_structure() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("notes");
        fs::create_dir_all(source.join("daily/2024")).unwrap();
        fs::write(
            source.join("daily/2024/jan.md"),
            "entry\n# Excalidraw Data\nx",
        )
        .unwrap();

        let dest = temp.path().join("out");
        let summary = mirror_tree(&source, &dest, &NoProgress).unwrap();

        assert_eq!(summary.processed, 1);
        assert_eq!(
            fs::read_to_string(dest.join("daily/2024/jan.md")).unwrap(),
            "entry\n"
        );
    }

    #[test]
    fn test_mirror_creates_empty_directories() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("notes");
        fs::create_dir_all(source.join("attic")).unwrap();

        let dest = temp.path().join("out");
        let summary = mirror_tree(&source, &dest, &NoProgress).unwrap();

        assert_eq!(summary.processed, 0);
        assert!(dest.join("attic").is_dir());
    }

    #[test]
    fn test_mirror_skips_undecodable_files() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("notes");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("good.md"), "fine\n").unwrap();
        let mut bad = fs::File::create(source.join("bad.bin")).unwrap();
        bad.write_all(&[0xFF, 0xFE, 0x00]).unwrap();

        let dest = temp.path().join("out");
        let summary = mirror_tree(&source, &dest, &NoProgress).unwrap();

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.excalidraw_found, 0);
        assert!(dest.join("good.md").exists());
        assert!(!dest.join("bad.bin").exists());
    }

    #[test]
    fn test_mirror_overwrites_existing_destination_files() {
        let temp = tempdir().unwrap();
        let source = temp.path().join("notes");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("a.md"), "new\n").unwrap();

        let dest = temp.path().join("out");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("a.md"), "stale\n").unwrap();

        mirror_tree(&source, &dest, &NoProgress).unwrap();
        assert_eq!(fs::read_to_string(dest.join("a.md")).unwrap(), "new\n");
    }
}
