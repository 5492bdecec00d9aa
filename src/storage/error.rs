//! Storage errors.

use thiserror::Error;

/// Failure reading or writing a cookie store.
///
/// The theme preference never returns these to its caller. They are logged
/// and kept in its diagnostics slot instead.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Cookies are turned off for this host.
    #[error("cookie storage is disabled")]
    Disabled,
    /// The backing file could not be read or written.
    #[error("cookie storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// A stored value is not one of the known themes.
    #[error("stored value '{0}' is not a recognised theme")]
    InvalidValue(String),
}
