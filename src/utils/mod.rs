//! Small helpers used by the site's interactive components.

mod clipboard;
mod debounce;

pub use clipboard::{copy_to_clipboard, Clipboard, ClipboardError, MemoryClipboard};
pub use debounce::Debouncer;
