//! Best-effort clipboard collaborator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(arboard::Error),
    #[error("clipboard write failed: {0}")]
    Write(arboard::Error),
}

/// Offers `text` to the system clipboard.
///
/// Fire-and-forget by contract: callers may discard the result, and a failure
/// must never reach the user or touch session state.
pub fn copy_text(text: &str) -> Result<(), CopyError> {
    let mut clipboard = arboard::Clipboard::new().map_err(CopyError::Unavailable)?;
    clipboard.set_text(text).map_err(CopyError::Write)
}
