//! Theme selection and persistence.
//!
//! This module provides:
//!
//! - [`ThemeValue`]: the `dark` / `light` enum
//! - [`ThemePreference`]: keeps state, cookie and document attribute in step
//! - [`Observable`]: the reactive holder behind the current theme
//! - [`Palette`] and [`AdaptiveColor`]: terminal colors resolved per theme

mod observable;
mod palette;
mod preference;
mod value;

pub use observable::{Observable, SubscriptionId};
pub use palette::{palette, AdaptiveColor, Palette};
pub use preference::ThemePreference;
pub use value::{ParseThemeError, ThemeValue};
