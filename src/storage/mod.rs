//! Durable cookie storage.
//!
//! This module provides:
//!
//! - [`CookieStore`]: the read/write seam the theme preference persists through
//! - [`theme_cookie`]: builds the `theme` cookie with its 365-day max-age
//! - [`MemoryStore`]: a jar that lives as long as the process
//! - [`FileStore`]: a jar persisted as `Set-Cookie` lines on disk
//! - [`StorageError`]: what can go wrong underneath
//!
//! Both stores turn a relative `Max-Age` into an absolute expiry at write
//! time and treat expired entries as absent on read.

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

use cookie::Cookie;
use time::{Duration, OffsetDateTime};

use crate::config::PreferenceConfig;
use crate::theme::ThemeValue;

/// Source of "now" for expiry checks.
pub type Clock = fn() -> OffsetDateTime;

/// A key-value cookie jar.
pub trait CookieStore {
    /// Returns the live value for `name`, or `None` if missing or expired.
    fn get(&self, name: &str) -> Result<Option<String>, StorageError>;

    /// Stores `cookie`, replacing any cookie of the same name.
    ///
    /// A non-positive `Max-Age` or a past `Expires` removes it.
    fn set(&mut self, cookie: Cookie<'static>) -> Result<(), StorageError>;
}

/// Builds the persisted preference cookie.
///
/// ```rust
/// use httpzen_site::{theme_cookie, PreferenceConfig, ThemeValue};
///
/// let cookie = theme_cookie(&PreferenceConfig::default(), ThemeValue::Light);
/// assert_eq!(cookie.to_string(), "theme=light; Max-Age=31536000");
/// ```
pub fn theme_cookie(config: &PreferenceConfig, theme: ThemeValue) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), theme.as_str()))
        .max_age(config.max_age())
        .build()
}

/// Absolute expiry for a cookie written at `now`. `None` means it never
/// expires on its own.
///
/// A non-positive max-age expires immediately; one past the end of the
/// calendar never expires.
pub(crate) fn expiry_of(cookie: &Cookie<'_>, now: OffsetDateTime) -> Option<OffsetDateTime> {
    match cookie.max_age() {
        Some(age) if age <= Duration::ZERO => Some(now),
        Some(age) => now.checked_add(age),
        None => cookie.expires_datetime(),
    }
}

pub(crate) fn is_live(expires: Option<OffsetDateTime>, now: OffsetDateTime) -> bool {
    expires.map_or(true, |at| at > now)
}
