//! Copy-to-clipboard with a boolean outcome.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is unavailable")]
    Unavailable,
    #[error("clipboard rejected the write: {0}")]
    Rejected(String),
}

/// A system clipboard, or anything that stands in for one.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes `text` to the clipboard, returning whether it succeeded.
///
/// Copy buttons only need to flip their label, so errors are logged and
/// reduced to `false`.
///
/// ```rust
/// use httpzen_site::{copy_to_clipboard, MemoryClipboard};
///
/// let mut clipboard = MemoryClipboard::new();
/// assert!(copy_to_clipboard(&mut clipboard, "httpzen get example.com"));
/// assert_eq!(clipboard.contents(), Some("httpzen get example.com"));
///
/// assert!(!copy_to_clipboard(&mut MemoryClipboard::unavailable(), "x"));
/// ```
pub fn copy_to_clipboard<C: Clipboard + ?Sized>(clipboard: &mut C, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "clipboard copy failed");
            false
        }
    }
}

/// A clipboard held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
    available: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self {
            contents: None,
            available: true,
        }
    }

    /// A clipboard that refuses every write.
    pub fn unavailable() -> Self {
        Self {
            contents: None,
            available: false,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.available {
            return Err(ClipboardError::Unavailable);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
