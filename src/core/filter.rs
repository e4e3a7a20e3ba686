//! Excalidraw section filter
//!
//! Removes a trailing "Excalidraw Data" block from note text: everything
//! from the first heading line naming it down to the end of the document.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a heading line introducing an Excalidraw data block: optional
/// leading indentation, a literal `#`, optional whitespace, then exactly
/// `Excalidraw Data`. Case-sensitive.
static EXCALIDRAW_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*#\s*Excalidraw Data").expect("Invalid EXCALIDRAW_HEADING regex")
});

/// Remove the Excalidraw data section from note text.
///
/// Cuts at the leftmost heading match; later occurrences are discarded with
/// the rest of the tail. Returns the (possibly shortened) text and whether
/// anything was removed. The cut is a single find followed by truncation,
/// so arbitrary input cannot trigger regex backtracking blowups.
pub fn strip_excalidraw(text: &str) -> (String, bool) {
    match EXCALIDRAW_HEADING.find(text) {
        Some(m) => (text[..m.start()].to_string(), true),
        None => (text.to_string(), false),
    }
}
