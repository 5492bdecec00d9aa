//! Adaptive terminal colors shared by the CLI and the site's terminal demo.

use console::Style;
use once_cell::sync::Lazy;

use super::value::ThemeValue;

/// A color with separate ANSI-256 codes for light and dark themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveColor {
    pub light: u8,
    pub dark: u8,
}

impl AdaptiveColor {
    /// Creates a color with distinct light and dark codes.
    pub const fn new(light: u8, dark: u8) -> Self {
        Self { light, dark }
    }

    /// Creates a color that uses the same code in both themes.
    pub const fn fixed(code: u8) -> Self {
        Self::new(code, code)
    }

    /// Picks the code for the given theme.
    pub fn resolve(self, theme: ThemeValue) -> u8 {
        match theme {
            ThemeValue::Light => self.light,
            ThemeValue::Dark => self.dark,
        }
    }

    /// Builds a foreground style for the given theme.
    pub fn style(self, theme: ThemeValue) -> Style {
        Style::new().color256(self.resolve(theme))
    }
}

/// Named adaptive colors.
///
/// # Example
///
/// ```rust
/// use httpzen_site::{palette, ThemeValue};
///
/// let warn = palette().color("warn").unwrap();
/// assert_eq!(warn.resolve(ThemeValue::Dark), 11);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<(&'static str, AdaptiveColor)>,
}

impl Palette {
    /// Creates a palette from `(name, color)` pairs.
    pub fn new(entries: Vec<(&'static str, AdaptiveColor)>) -> Self {
        Self { entries }
    }

    /// Looks up a color by name.
    pub fn color(&self, name: &str) -> Option<AdaptiveColor> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| *c)
    }

    /// Resolves a named color to a style for the given theme.
    pub fn style(&self, name: &str, theme: ThemeValue) -> Option<Style> {
        self.color(name).map(|c| c.style(theme))
    }

    /// Styles `text` with the named color, or returns it unchanged if the
    /// name is unknown.
    pub fn paint(&self, name: &str, text: &str, theme: ThemeValue) -> String {
        match self.style(name, theme) {
            Some(style) => style.apply_to(text).to_string(),
            None => text.to_string(),
        }
    }

    /// Names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }
}

static PALETTE: Lazy<Palette> = Lazy::new(|| {
    Palette::new(vec![
        ("primary", AdaptiveColor::fixed(3)),
        ("secondary", AdaptiveColor::fixed(6)),
        ("light_text", AdaptiveColor::fixed(7)),
        ("darken_text", AdaptiveColor::fixed(8)),
        ("error", AdaptiveColor::fixed(1)),
        ("warn", AdaptiveColor::fixed(11)),
        ("success", AdaptiveColor::fixed(2)),
    ])
});

/// Returns the built-in Httpzen palette.
pub fn palette() -> &'static Palette {
    &PALETTE
}
