//! The theme preference: one value kept in step across state, cookie and DOM.

use tracing::{debug, warn};

use super::observable::{Observable, SubscriptionId};
use super::value::{ParseThemeError, ThemeValue};
use crate::config::PreferenceConfig;
use crate::dom::{reflect, DocumentRoot};
use crate::site::ConfigError;
use crate::storage::{theme_cookie, CookieStore, StorageError};

/// Reconciles the active theme between an observable value, a persisted
/// cookie and the document root attribute.
///
/// Construct one per page session and hand it to whatever needs the theme.
/// [`mount`](Self::mount) seeds the value from the cookie (or the default);
/// [`set`](Self::set) is the only way to change it afterwards.
///
/// Storage failures never reach the caller. State and DOM still update, the
/// failure is logged with `tracing`, and the most recent one is available
/// from [`last_error`](Self::last_error).
///
/// # Example
///
/// ```rust
/// use httpzen_site::{MemoryStore, RootElement, ThemePreference, ThemeValue};
///
/// let store = MemoryStore::new().with_raw("theme", "light");
/// let mut pref = ThemePreference::new(store, RootElement::new());
/// assert_eq!(pref.current(), None);
///
/// assert_eq!(pref.mount(), ThemeValue::Light);
/// assert_eq!(pref.toggle(), ThemeValue::Dark);
/// assert_eq!(pref.root().open_tag(), r#"<html data-theme="dark">"#);
/// ```
pub struct ThemePreference<S, D> {
    store: S,
    root: D,
    config: PreferenceConfig,
    state: Observable<Option<ThemeValue>>,
    mounted: bool,
    last_error: Option<StorageError>,
}

impl<S: CookieStore, D: DocumentRoot> ThemePreference<S, D> {
    /// Creates an unmounted preference with the default configuration.
    pub fn new(store: S, root: D) -> Self {
        Self::from_parts(store, root, PreferenceConfig::default())
    }

    /// Creates an unmounted preference with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the cookie name is empty or its max-age is not
    /// a positive lifetime a browser would keep.
    pub fn with_config(store: S, root: D, config: PreferenceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(store, root, config))
    }

    fn from_parts(store: S, root: D, config: PreferenceConfig) -> Self {
        Self {
            store,
            root,
            config,
            state: Observable::new(None),
            mounted: false,
            last_error: None,
        }
    }

    /// Runs the initialization hook and returns the seeded theme.
    ///
    /// Reads the cookie once. A valid stored value seeds the state; an
    /// absent, empty, unreadable or unrecognised one seeds the configured
    /// default. The seeded value is reflected into the document root. The
    /// cookie is never written here.
    ///
    /// If a value was already [`set`](Self::set), it is kept and only
    /// reflected. Calling it again on a mounted preference changes nothing.
    pub fn mount(&mut self) -> ThemeValue {
        if let Some(theme) = self.current() {
            if !self.mounted {
                reflect(&mut self.root, &self.config.attribute, theme);
                self.mounted = true;
            }
            return theme;
        }

        let theme = match self.read_stored() {
            Some(theme) => theme,
            None => self.config.default_theme,
        };

        reflect(&mut self.root, &self.config.attribute, theme);
        self.mounted = true;
        self.state.set(Some(theme));
        debug!(theme = %theme, "theme preference mounted");
        theme
    }

    /// The active theme, or `None` before the first mount or set.
    pub fn current(&self) -> Option<ThemeValue> {
        *self.state.get()
    }

    /// Whether [`mount`](Self::mount) has run.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Switches to `theme`: persists the cookie, reflects the value into the
    /// document root, then publishes it to subscribers.
    ///
    /// Subscribers always observe the cookie and root already updated.
    pub fn set(&mut self, theme: ThemeValue) {
        if let Err(e) = self.store.set(theme_cookie(&self.config, theme)) {
            warn!(error = %e, theme = %theme, "failed to persist theme preference");
            self.last_error = Some(e);
        }

        reflect(&mut self.root, &self.config.attribute, theme);
        self.state.set(Some(theme));
        debug!(theme = %theme, "theme changed");
    }

    /// Parses `raw` and sets it. Unknown names are rejected and nothing
    /// changes.
    pub fn set_str(&mut self, raw: &str) -> Result<ThemeValue, ParseThemeError> {
        let theme: ThemeValue = raw.parse()?;
        self.set(theme);
        Ok(theme)
    }

    /// Sets the opposite of the current theme and returns it.
    ///
    /// Before any value exists the configured default is treated as current.
    pub fn toggle(&mut self) -> ThemeValue {
        let next = self.current().unwrap_or(self.config.default_theme).opposite();
        self.set(next);
        next
    }

    /// Registers a callback run whenever the theme changes.
    pub fn subscribe<F>(&mut self, mut f: F) -> SubscriptionId
    where
        F: FnMut(ThemeValue) + 'static,
    {
        self.state.subscribe(move |theme| {
            if let Some(theme) = theme {
                f(*theme);
            }
        })
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.state.unsubscribe(id)
    }

    /// The most recent storage failure, if any.
    pub fn last_error(&self) -> Option<&StorageError> {
        self.last_error.as_ref()
    }

    /// Takes the most recent storage failure, clearing it.
    pub fn take_error(&mut self) -> Option<StorageError> {
        self.last_error.take()
    }

    pub fn config(&self) -> &PreferenceConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &D {
        &self.root
    }

    /// Tears the preference down, returning the store and root.
    pub fn into_parts(self) -> (S, D) {
        (self.store, self.root)
    }

    /// Reads and validates the stored preference, recording any failure.
    fn read_stored(&mut self) -> Option<ThemeValue> {
        let raw = match self.store.get(&self.config.cookie_name) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "failed to read theme preference, using default");
                self.last_error = Some(e);
                return None;
            }
        };

        if raw.is_empty() {
            return None;
        }

        match raw.parse() {
            Ok(theme) => Some(theme),
            Err(_) => {
                warn!(value = %raw, "ignoring unrecognised stored theme");
                self.last_error = Some(StorageError::InvalidValue(raw));
                None
            }
        }
    }
}

impl<S: std::fmt::Debug, D: std::fmt::Debug> std::fmt::Debug for ThemePreference<S, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemePreference")
            .field("current", self.state.get())
            .field("mounted", &self.mounted)
            .field("config", &self.config)
            .field("store", &self.store)
            .field("root", &self.root)
            .field("last_error", &self.last_error)
            .finish()
    }
}
