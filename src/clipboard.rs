//! System clipboard delivery

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Place text on the system clipboard
pub fn copy_to_clipboard(text: String) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Cannot access the system clipboard")?;
    clipboard
        .set_text(text)
        .context("Cannot write to the system clipboard")?;
    Ok(())
}
