//! Declarative site configuration.
//!
//! Describes which framework modules the docs site loads, which locales it
//! ships, which stylesheets are entry points, and how the theme preference
//! is persisted. Nothing here runs; it is loaded, validated and handed to
//! the build.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::PreferenceConfig;

/// Failure loading or validating a [`SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read site config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid site config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("default locale '{0}' is not in the locale list")]
    UnknownDefaultLocale(String),
    #[error("locale '{0}' is declared more than once")]
    DuplicateLocale(String),
    #[error("theme cookie max-age {0}s is outside 1..=34560000")]
    InvalidMaxAge(i64),
    #[error("theme cookie name is empty")]
    EmptyCookieName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub compatibility_date: String,
    #[serde(default)]
    pub devtools: Devtools,
    #[serde(default)]
    pub modules: Vec<String>,
    pub i18n: I18nConfig,
    #[serde(default)]
    pub css: Vec<String>,
    #[serde(default)]
    pub theme: PreferenceConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Devtools {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nConfig {
    pub default_locale: String,
    #[serde(default)]
    pub restructure_dir: String,
    pub lang_dir: String,
    pub locales: Vec<Locale>,
}

/// A translated UI language and the message file that backs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub code: String,
    pub name: String,
    pub file: String,
}

impl Locale {
    fn new(code: &str, name: &str, file: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            file: file.to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses and validates a YAML document.
    ///
    /// ```rust
    /// use httpzen_site::SiteConfig;
    ///
    /// let yaml = r#"
    /// compatibilityDate: "2025-07-15"
    /// i18n:
    ///   defaultLocale: en
    ///   langDir: app/locales/
    ///   locales:
    ///     - { code: en, name: English, file: en.json }
    /// theme:
    ///   defaultTheme: light
    /// "#;
    /// let config = SiteConfig::from_yaml_str(yaml).unwrap();
    /// assert_eq!(config.theme.default_theme, httpzen_site::ThemeValue::Light);
    /// assert_eq!(config.theme.cookie_name, "theme");
    /// ```
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }

    /// Serializes back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks that locale codes are unique, the default is declared and the
    /// theme section is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.theme.validate()?;
        let mut seen = HashSet::new();
        for locale in &self.i18n.locales {
            if !seen.insert(locale.code.as_str()) {
                return Err(ConfigError::DuplicateLocale(locale.code.clone()));
            }
        }
        if !seen.contains(self.i18n.default_locale.as_str()) {
            return Err(ConfigError::UnknownDefaultLocale(
                self.i18n.default_locale.clone(),
            ));
        }
        Ok(())
    }

    pub fn locale(&self, code: &str) -> Option<&Locale> {
        self.i18n.locales.iter().find(|l| l.code == code)
    }

    pub fn default_locale(&self) -> Option<&Locale> {
        self.locale(&self.i18n.default_locale)
    }

    /// Path of a locale's message file, joined onto the language directory.
    pub fn locale_file(&self, code: &str) -> Option<String> {
        let locale = self.locale(code)?;
        let dir = self.i18n.lang_dir.trim_end_matches('/');
        if dir.is_empty() {
            Some(locale.file.clone())
        } else {
            Some(format!("{}/{}", dir, locale.file))
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            compatibility_date: "2025-07-15".to_string(),
            devtools: Devtools { enabled: true },
            modules: ["@nuxt/icon", "@nuxt/fonts", "@nuxt/eslint", "@nuxt/image", "@nuxtjs/i18n"]
                .into_iter()
                .map(String::from)
                .collect(),
            i18n: I18nConfig {
                default_locale: "en".to_string(),
                restructure_dir: String::new(),
                lang_dir: "app/locales/".to_string(),
                locales: vec![
                    Locale::new("en", "English", "en.json"),
                    Locale::new("pt", "Português", "pt.json"),
                ],
            },
            css: vec!["./app/assets/styles/global.scss".to_string()],
            theme: PreferenceConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeValue;

    #[test]
    fn test_default_validates() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.modules.len(), 5);
        assert_eq!(config.default_locale().unwrap().name, "English");
        assert_eq!(config.theme.default_theme, ThemeValue::Dark);
    }

    #[test]
    fn test_locale_file() {
        let config = SiteConfig::default();
        assert_eq!(config.locale_file("pt").as_deref(), Some("app/locales/pt.json"));
        assert_eq!(config.locale_file("fr"), None);
    }

    #[test]
    fn test_unknown_default_locale() {
        let mut config = SiteConfig::default();
        config.i18n.default_locale = "fr".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownDefaultLocale(code)) if code == "fr"
        ));
    }

    #[test]
    fn test_duplicate_locale() {
        let mut config = SiteConfig::default();
        config.i18n.locales.push(Locale::new("en", "English (again)", "en2.json"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateLocale(code)) if code == "en"
        ));
    }

    #[test]
    fn test_yaml_round_trip_of_default() {
        let config = SiteConfig::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("compatibilityDate"));
        assert!(yaml.contains("defaultLocale"));
        assert_eq!(SiteConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_huge_theme_max_age_is_rejected() {
        let yaml = r#"
compatibilityDate: "2025-07-15"
i18n:
  defaultLocale: en
  langDir: app/locales/
  locales:
    - { code: en, name: English, file: en.json }
theme:
  maxAgeSecs: 400000000000
"#;
        assert!(matches!(
            SiteConfig::from_yaml_str(yaml),
            Err(ConfigError::InvalidMaxAge(400_000_000_000))
        ));
    }

    #[test]
    fn test_non_positive_theme_max_age_is_rejected() {
        let mut config = SiteConfig::default();
        config.theme.max_age_secs = -1;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidMaxAge(-1))));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = SiteConfig::from_yaml_str("compatibilityDate: [").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yaml");
        fs::write(&path, SiteConfig::default().to_yaml().unwrap()).unwrap();
        assert_eq!(SiteConfig::from_path(&path).unwrap(), SiteConfig::default());

        let missing = SiteConfig::from_path(dir.path().join("nope.yaml"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
