//! Best-effort clipboard collaborator.
//!
//! A missing or broken clipboard must never abort a flow, so failures are
//! logged and swallowed.

use tracing::warn;

/// Copy `text` to the system clipboard. Returns whether the copy succeeded.
pub fn copy_best_effort(text: &str) -> bool {
    match try_copy(text) {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "clipboard copy failed");
            false
        }
    }
}

fn try_copy(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}
