//! Settings for the theme preference.

use serde::{Deserialize, Serialize};
use time::Duration;

use crate::dom::DATA_THEME_ATTR;
use crate::site::ConfigError;
use crate::theme::ThemeValue;

/// Cookie lifetime: 365 days.
pub const DEFAULT_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365;

/// Longest lifetime browsers honour: 400 days.
pub const MAX_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 400;

/// Cookie key holding the preference.
pub const DEFAULT_COOKIE_NAME: &str = "theme";

/// How the theme preference is persisted and reflected.
///
/// Every field has a default, so a `theme:` section in the site YAML may
/// override only what it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceConfig {
    pub cookie_name: String,
    pub max_age_secs: i64,
    pub default_theme: ThemeValue,
    pub attribute: String,
}

impl PreferenceConfig {
    /// Cookie lifetime as a `time::Duration`.
    pub fn max_age(&self) -> Duration {
        Duration::seconds(self.max_age_secs)
    }

    /// Checks that the cookie has a name and a lifetime in
    /// `1..=MAX_MAX_AGE_SECS`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cookie_name.is_empty() {
            return Err(ConfigError::EmptyCookieName);
        }
        if !(1..=MAX_MAX_AGE_SECS).contains(&self.max_age_secs) {
            return Err(ConfigError::InvalidMaxAge(self.max_age_secs));
        }
        Ok(())
    }
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            max_age_secs: DEFAULT_MAX_AGE_SECS,
            default_theme: ThemeValue::Dark,
            attribute: DATA_THEME_ATTR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = PreferenceConfig::default();
        assert_eq!(cfg.cookie_name, "theme");
        assert_eq!(cfg.max_age_secs, 31_536_000);
        assert_eq!(cfg.max_age(), Duration::days(365));
        assert_eq!(cfg.default_theme, ThemeValue::Dark);
        assert_eq!(cfg.attribute, "data-theme");
    }

    #[test]
    fn test_default_validates() {
        assert!(PreferenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_max_age() {
        for secs in [0, -1, MAX_MAX_AGE_SECS + 1, 400_000_000_000] {
            let cfg = PreferenceConfig {
                max_age_secs: secs,
                ..PreferenceConfig::default()
            };
            assert!(
                matches!(cfg.validate(), Err(ConfigError::InvalidMaxAge(v)) if v == secs),
                "{} should be rejected",
                secs
            );
        }
    }

    #[test]
    fn test_rejects_empty_cookie_name() {
        let cfg = PreferenceConfig {
            cookie_name: String::new(),
            ..PreferenceConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyCookieName)));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let cfg: PreferenceConfig = serde_yaml::from_str("defaultTheme: light\n").unwrap();
        assert_eq!(cfg.default_theme, ThemeValue::Light);
        assert_eq!(cfg.cookie_name, "theme");
        assert_eq!(cfg.max_age_secs, DEFAULT_MAX_AGE_SECS);
    }
}
