//! In-process cookie jar.

use std::collections::HashMap;

use cookie::Cookie;
use time::OffsetDateTime;

use super::{expiry_of, is_live, Clock, CookieStore, StorageError};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires: Option<OffsetDateTime>,
}

/// A cookie jar held in memory.
///
/// Useful for tests and for hosts that persist the jar themselves. A
/// [`disabled`](Self::disabled) jar fails every operation, mimicking a
/// browser with cookies turned off.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, Entry>,
    disabled: bool,
    clock: Clock,
}

impl MemoryStore {
    /// Creates an empty, enabled jar using the system clock.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            disabled: false,
            clock: OffsetDateTime::now_utc,
        }
    }

    /// Creates a jar that rejects every read and write.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::new()
        }
    }

    /// Replaces the clock used for expiry checks.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Seeds a raw value with no expiry, bypassing validation.
    pub fn with_raw(mut self, name: &str, value: &str) -> Self {
        self.entries.insert(
            name.to_string(),
            Entry {
                value: value.to_string(),
                expires: None,
            },
        );
        self
    }

    /// Reads a live value, folding errors into `None`.
    pub fn value(&self, name: &str) -> Option<String> {
        self.get(name).ok().flatten()
    }

    /// Absolute expiry recorded for `name`, if any.
    pub fn expires(&self, name: &str) -> Option<OffsetDateTime> {
        self.entries.get(name).and_then(|e| e.expires)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CookieStore for MemoryStore {
    fn get(&self, name: &str) -> Result<Option<String>, StorageError> {
        if self.disabled {
            return Err(StorageError::Disabled);
        }
        let now = (self.clock)();
        Ok(self
            .entries
            .get(name)
            .filter(|e| is_live(e.expires, now))
            .map(|e| e.value.clone()))
    }

    fn set(&mut self, cookie: Cookie<'static>) -> Result<(), StorageError> {
        if self.disabled {
            return Err(StorageError::Disabled);
        }
        let now = (self.clock)();
        let expires = expiry_of(&cookie, now);
        if !is_live(expires, now) {
            self.entries.remove(cookie.name());
            return Ok(());
        }
        self.entries.insert(
            cookie.name().to_string(),
            Entry {
                value: cookie.value().to_string(),
                expires,
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PreferenceConfig;
    use crate::storage::theme_cookie;
    use crate::theme::ThemeValue;
    use time::Duration;

    fn epoch() -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH
    }

    fn a_year_later() -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH + Duration::days(365)
    }

    fn just_before_a_year() -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH + Duration::days(365) - Duration::seconds(1)
    }

    #[test]
    fn test_empty_get() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut store = MemoryStore::new();
        store
            .set(theme_cookie(&PreferenceConfig::default(), ThemeValue::Light))
            .unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_overwrite_replaces() {
        let mut store = MemoryStore::new();
        let config = PreferenceConfig::default();
        store.set(theme_cookie(&config, ThemeValue::Light)).unwrap();
        store.set(theme_cookie(&config, ThemeValue::Dark)).unwrap();
        assert_eq!(store.value("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_expires_after_max_age() {
        let mut store = MemoryStore::new().with_clock(epoch);
        store
            .set(theme_cookie(&PreferenceConfig::default(), ThemeValue::Light))
            .unwrap();
        assert_eq!(store.expires("theme"), Some(a_year_later()));

        let store = store.with_clock(just_before_a_year);
        assert_eq!(store.value("theme").as_deref(), Some("light"));

        let store = store.with_clock(a_year_later);
        assert_eq!(store.value("theme"), None);
    }

    #[test]
    fn test_zero_max_age_removes() {
        let mut store = MemoryStore::new().with_raw("theme", "dark");
        let cookie = Cookie::build(("theme", "")).max_age(Duration::ZERO).build();
        store.set(cookie).unwrap();
        assert_eq!(store.value("theme"), None);
    }

    #[test]
    fn test_far_future_max_age_is_kept_without_expiry() {
        let mut store = MemoryStore::new();
        let cookie = Cookie::build(("theme", "light"))
            .max_age(Duration::seconds(400_000_000_000))
            .build();
        store.set(cookie).unwrap();
        assert_eq!(store.value("theme").as_deref(), Some("light"));
        assert_eq!(store.expires("theme"), None);
    }

    #[test]
    fn test_disabled_fails_both_ways() {
        let mut store = MemoryStore::disabled();
        assert!(matches!(store.get("theme"), Err(StorageError::Disabled)));
        let cookie = theme_cookie(&PreferenceConfig::default(), ThemeValue::Dark);
        assert!(matches!(store.set(cookie), Err(StorageError::Disabled)));
    }

    #[test]
    fn test_with_raw_bypasses_validation() {
        let store = MemoryStore::new().with_raw("theme", "sepia");
        assert_eq!(store.value("theme").as_deref(), Some("sepia"));
    }
}
