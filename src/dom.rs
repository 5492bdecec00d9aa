//! The document root and its theme attribute.

use std::collections::BTreeMap;

use crate::theme::ThemeValue;

/// Attribute that stylesheets key off.
pub const DATA_THEME_ATTR: &str = "data-theme";

/// The root element of a rendered page.
///
/// Implement this for whatever owns the real document (a webview handle, a
/// server-side shell) and pass it to [`ThemePreference`](crate::ThemePreference).
pub trait DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str);

    fn attribute(&self, name: &str) -> Option<&str>;
}

/// Writes `theme` into the root's `attribute`.
///
/// The theme preference calls this at mount and after every change. It is
/// public so consumers can reflect a value onto a different surface.
pub fn reflect<D: DocumentRoot + ?Sized>(root: &mut D, attribute: &str, theme: ThemeValue) {
    root.set_attribute(attribute, theme.as_str());
}

/// An in-memory `<html>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootElement {
    attributes: BTreeMap<String, String>,
}

impl RootElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Renders the opening `<html>` tag with attributes sorted by name.
    ///
    /// ```rust
    /// use httpzen_site::{DocumentRoot, RootElement};
    ///
    /// let mut root = RootElement::new();
    /// root.set_attribute("lang", "en");
    /// root.set_attribute("data-theme", "dark");
    /// assert_eq!(root.open_tag(), r#"<html data-theme="dark" lang="en">"#);
    /// ```
    pub fn open_tag(&self) -> String {
        let mut tag = String::from("<html");
        for (name, value) in &self.attributes {
            tag.push(' ');
            tag.push_str(name);
            tag.push_str("=\"");
            tag.push_str(&escape_attr(value));
            tag.push('"');
        }
        tag.push('>');
        tag
    }
}

impl DocumentRoot for RootElement {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
