//! Cookie jar persisted to a file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use cookie::Cookie;
use time::OffsetDateTime;

use super::{expiry_of, is_live, Clock, CookieStore, StorageError};

/// A cookie jar stored on disk, one `Set-Cookie` line per cookie.
///
/// Relative `Max-Age` values are converted to an absolute `Expires` when
/// written, so the file survives restarts without drifting. Lines that fail
/// to parse and expired cookies are skipped on read and dropped on the next
/// write.
///
/// # Example
///
/// ```rust
/// use httpzen_site::{theme_cookie, CookieStore, FileStore, PreferenceConfig, ThemeValue};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut jar = FileStore::new(dir.path().join("cookies.txt"));
/// jar.set(theme_cookie(&PreferenceConfig::default(), ThemeValue::Light)).unwrap();
///
/// let reopened = FileStore::new(dir.path().join("cookies.txt"));
/// assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("light"));
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    clock: Clock,
}

impl FileStore {
    /// Creates a jar backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            clock: OffsetDateTime::now_utc,
        }
    }

    /// Replaces the clock used for expiry checks.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every live cookie in file order.
    fn load(&self, now: OffsetDateTime) -> Result<Vec<Cookie<'static>>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut cookies = Vec::new();
        for (lineno, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match Cookie::parse(line.to_string()) {
                Ok(cookie) if is_live(cookie.expires_datetime(), now) => cookies.push(cookie),
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(
                        path = %self.path.display(),
                        line = lineno + 1,
                        error = %e,
                        "skipping malformed cookie line"
                    );
                }
            }
        }
        Ok(cookies)
    }

    fn save(&self, cookies: &[Cookie<'static>]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut out = String::new();
        for cookie in cookies {
            out.push_str(&cookie.to_string());
            out.push('\n');
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, out)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl CookieStore for FileStore {
    fn get(&self, name: &str) -> Result<Option<String>, StorageError> {
        let now = (self.clock)();
        Ok(self
            .load(now)?
            .into_iter()
            .find(|c| c.name() == name)
            .map(|c| c.value().to_string()))
    }

    fn set(&mut self, cookie: Cookie<'static>) -> Result<(), StorageError> {
        let now = (self.clock)();
        let mut cookies = self.load(now)?;
        cookies.retain(|c| c.name() != cookie.name());

        let expires = expiry_of(&cookie, now);
        if is_live(expires, now) {
            let mut stored = Cookie::new(cookie.name().to_string(), cookie.value().to_string());
            if let Some(at) = expires {
                stored.set_expires(at);
            }
            cookies.push(stored);
        }

        self.save(&cookies)
    }
}
