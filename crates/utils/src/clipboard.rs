//! Copying the processed header text to the system clipboard.
//!
//! Backed by `arboard` when the `clipboard` feature is enabled, otherwise
//! every copy reports [`ClipboardError::Unsupported`].

use std::fmt::Display;

/// Errors that can occur while copying to the clipboard.
#[derive(Debug)]
pub enum ClipboardError {
    /// This build carries no clipboard support.
    Unsupported,
    /// The platform clipboard could not be reached or written.
    Backend(String),
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Unsupported => {
                write!(f, "Clipboard support is not available in this build")
            }
            ClipboardError::Backend(msg) => write!(f, "Clipboard error: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// Copies the text to the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ClipboardError::Backend(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| ClipboardError::Backend(e.to_string()))?;
    tracing::debug!(bytes = text.len(), "Copied to clipboard");
    Ok(())
}

/// Copies the text to the system clipboard.
#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_text: &str) -> Result<(), ClipboardError> {
    Err(ClipboardError::Unsupported)
}
