//! Cookie codec and the jar abstraction the store persists through.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashMap;

use crate::constants::COOKIE_PATH;

/// `SameSite` attribute values the panel writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
}

impl SameSite {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
        }
    }
}

/// A cookie write, value held unencoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub expires: DateTime<Utc>,
    pub path: String,
    pub same_site: Option<SameSite>,
}

impl Cookie {
    /// A persistent, same-site-strict cookie living `days` from `now`.
    #[must_use]
    pub fn persistent(name: &str, value: String, now: DateTime<Utc>, days: i64) -> Self {
        Self {
            name: name.to_string(),
            value,
            expires: now + Duration::days(days),
            path: COOKIE_PATH.to_string(),
            same_site: Some(SameSite::Strict),
        }
    }

    /// An empty cookie dated at the epoch, which makes the browser drop it.
    #[must_use]
    pub fn expired(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: String::new(),
            expires: DateTime::<Utc>::UNIX_EPOCH,
            path: COOKIE_PATH.to_string(),
            same_site: None,
        }
    }

    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }

    /// Render as a `document.cookie` assignment. `encode` is applied to the value only.
    #[must_use]
    pub fn to_assignment(&self, encode: impl Fn(&str) -> String) -> String {
        let mut out = format!(
            "{}={}; expires={}; path={}",
            self.name,
            encode(&self.value),
            http_date(self.expires),
            self.path
        );
        if let Some(same_site) = self.same_site {
            out.push_str("; SameSite=");
            out.push_str(same_site.as_str());
        }
        out
    }
}

/// IMF-fixdate, the form `Date.prototype.toUTCString` produces.
#[must_use]
pub fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Find the raw (still encoded) value of `name` in a `document.cookie` string.
#[must_use]
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').map(str::trim_start).find_map(|pair| {
        pair.strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
    })
}

/// Where preferences are persisted. The browser implementation sits on
/// `document.cookie`; tests use [`MemoryJar`].
pub trait CookieJar {
    /// Decoded value of the named cookie, if present.
    ///
    /// # Errors
    /// Returns the decode failure message when the stored value is not valid
    /// percent-encoding.
    fn get(&self, name: &str) -> Result<Option<String>, String>;

    fn set(&mut self, cookie: Cookie);

    /// Wall clock used to compute expiry dates.
    fn now(&self) -> DateTime<Utc>;
}

/// In-memory jar honouring expiry against a fixed clock.
#[derive(Debug, Clone)]
pub struct MemoryJar {
    now: DateTime<Utc>,
    values: HashMap<String, String>,
    writes: Vec<Cookie>,
}

impl Default for MemoryJar {
    fn default() -> Self {
        Self::new(
            Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
                .single()
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        )
    }
}

impl MemoryJar {
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            values: HashMap::new(),
            writes: Vec::new(),
        }
    }

    /// Seed a raw value, as if a previous session had written it.
    #[must_use]
    pub fn with_value(mut self, name: &str, value: &str) -> Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Every cookie written so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[Cookie] {
        &self.writes
    }
}

impl CookieJar for MemoryJar {
    fn get(&self, name: &str) -> Result<Option<String>, String> {
        Ok(self.values.get(name).cloned())
    }

    fn set(&mut self, cookie: Cookie) {
        if cookie.is_expired_at(self.now) {
            self.values.remove(&cookie.name);
        } else {
            self.values.insert(cookie.name.clone(), cookie.value.clone());
        }
        self.writes.push(cookie);
    }

    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
