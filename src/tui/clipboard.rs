// Clipboard support for sharing the current position
//
// arboard needs a display connection on Linux; headless terminals (ssh
// without X forwarding) fail at construction. Errors surface as a toast
// rather than tearing down the TUI.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to write to clipboard")?;
    Ok(())
}
