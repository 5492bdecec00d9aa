//! # Httpzen Site - theme persistence and front-end helpers
//!
//! The documentation site keeps a single visual preference, dark or light, in
//! three places at once: an observable in-memory value, a long-lived `theme`
//! cookie, and the `data-theme` attribute on the document root. This crate
//! owns that reconciliation and the handful of helpers the site leans on.
//!
//! ## Quick Start
//!
//! ```rust
//! use httpzen_site::{DocumentRoot, MemoryStore, RootElement, ThemePreference, ThemeValue};
//!
//! let mut pref = ThemePreference::new(MemoryStore::new(), RootElement::new());
//!
//! // Nothing stored yet: the hook seeds the default.
//! assert_eq!(pref.mount(), ThemeValue::Dark);
//! assert_eq!(pref.root().attribute("data-theme"), Some("dark"));
//!
//! pref.set(ThemeValue::Light);
//! assert_eq!(pref.current(), Some(ThemeValue::Light));
//! assert_eq!(pref.store().value("theme").as_deref(), Some("light"));
//! ```
//!
//! ## Modules
//!
//! - [`theme`]: [`ThemeValue`], [`ThemePreference`], the [`Observable`] holder
//!   and the adaptive terminal [`Palette`]
//! - [`storage`]: the [`CookieStore`] seam with memory and file backends
//! - [`dom`]: the [`DocumentRoot`] seam and the explicit [`reflect`] step
//! - [`config`] and [`site`]: preference settings and the declarative site layout
//! - [`mock`]: fake request records for the interactive demo
//! - [`utils`]: clipboard copy and debounce helpers

pub mod config;
pub mod dom;
pub mod mock;
pub mod site;
pub mod storage;
pub mod theme;
pub mod utils;

pub use config::PreferenceConfig;
pub use dom::{reflect, DocumentRoot, RootElement, DATA_THEME_ATTR};
pub use mock::{mock_request, mock_request_with, MockRequest};
pub use site::{ConfigError, SiteConfig};
pub use storage::{theme_cookie, CookieStore, FileStore, MemoryStore, StorageError};
pub use theme::{
    palette, AdaptiveColor, Observable, Palette, ParseThemeError, SubscriptionId,
    ThemePreference, ThemeValue,
};
pub use utils::{copy_to_clipboard, Clipboard, ClipboardError, Debouncer, MemoryClipboard};
