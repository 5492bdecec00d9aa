//! The two visual themes the site understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A visual appearance mode.
///
/// Stylesheets key off the lowercase name, so [`as_str`](Self::as_str) is
/// also the value written to the cookie and the `data-theme` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeValue {
    #[default]
    Dark,
    Light,
}

impl ThemeValue {
    /// All valid themes, in declaration order.
    pub const ALL: [ThemeValue; 2] = [ThemeValue::Dark, ThemeValue::Light];

    /// Returns the lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeValue::Dark => "dark",
            ThemeValue::Light => "light",
        }
    }

    /// Returns the other theme.
    pub fn opposite(self) -> Self {
        match self {
            ThemeValue::Dark => ThemeValue::Light,
            ThemeValue::Light => ThemeValue::Dark,
        }
    }
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names neither `dark` nor `light`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}', expected 'dark' or 'light'")]
pub struct ParseThemeError(pub String);

impl FromStr for ThemeValue {
    type Err = ParseThemeError;

    /// Parses the exact lowercase name. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeValue::Dark),
            "light" => Ok(ThemeValue::Light),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!("dark".parse::<ThemeValue>(), Ok(ThemeValue::Dark));
        assert_eq!("light".parse::<ThemeValue>(), Ok(ThemeValue::Light));
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Dark".parse::<ThemeValue>().is_err());
        assert!(" light".parse::<ThemeValue>().is_err());
        assert!("".parse::<ThemeValue>().is_err());
    }

    #[test]
    fn test_parse_error_names_value() {
        let err = "sepia".parse::<ThemeValue>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_display_matches_as_str() {
        for theme in ThemeValue::ALL {
            assert_eq!(theme.to_string(), theme.as_str());
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(ThemeValue::Dark.opposite(), ThemeValue::Light);
        assert_eq!(ThemeValue::Light.opposite(), ThemeValue::Dark);
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeValue::default(), ThemeValue::Dark);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ThemeValue::Light).unwrap();
        assert_eq!(json, "\"light\"");
        let back: ThemeValue = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(back, ThemeValue::Dark);
    }
}
