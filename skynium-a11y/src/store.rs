//! Settings store: the single owner of the preference mapping and its cookie.

use crate::cookie::{Cookie, CookieJar};
use crate::error::PrefsError;
use crate::settings::{Contrast, Mode, Scalar, Settings, TextAlign};

/// Preference mapping bound to the jar it is persisted in.
#[derive(Debug)]
pub struct SettingsStore<J> {
    settings: Settings,
    jar: J,
    cookie_name: String,
    lifetime_days: i64,
}

impl<J: CookieJar> SettingsStore<J> {
    #[must_use]
    pub fn new(jar: J, cookie_name: impl Into<String>, lifetime_days: i64) -> Self {
        Self {
            settings: Settings::default(),
            jar,
            cookie_name: cookie_name.into(),
            lifetime_days,
        }
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn jar(&self) -> &J {
        &self.jar
    }

    #[must_use]
    pub fn mode(&self, mode: Mode) -> bool {
        self.settings.mode(mode)
    }

    pub fn set_mode(&mut self, mode: Mode, on: bool) {
        self.settings.set_mode(mode, on);
    }

    /// Flip a mode in memory and return the new value. Does not persist.
    pub fn toggle(&mut self, mode: Mode) -> bool {
        self.settings.toggle(mode)
    }

    #[must_use]
    pub fn scalar(&self, scalar: Scalar) -> f64 {
        self.settings.scalar(scalar)
    }

    pub fn set_scalar(&mut self, scalar: Scalar, value: f64) {
        self.settings.set_scalar(scalar, value);
    }

    pub const fn set_text_align(&mut self, align: TextAlign) {
        self.settings.text_align = align;
    }

    pub const fn set_contrast(&mut self, contrast: Contrast) {
        self.settings.contrast = contrast;
    }

    /// Merge a saved JSON object over the current values.
    pub fn merge(&mut self, saved: serde_json::Map<String, serde_json::Value>) {
        self.settings.merge(saved);
    }

    /// Reset every recognized key to its default, in memory only.
    pub fn reset(&mut self) {
        self.settings.reset();
    }

    /// Write the whole mapping to the cookie, expiring a year from now.
    pub fn save(&mut self) {
        let json = match self.settings.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("accessibility preferences not saved: {err}");
                return;
            }
        };
        let now = self.jar.now();
        self.jar.set(Cookie::persistent(
            &self.cookie_name,
            json,
            now,
            self.lifetime_days,
        ));
        log::info!("accessibility preferences saved");
    }

    /// Merge the saved cookie over the current values.
    ///
    /// Returns `true` only when a cookie was found and parsed. A broken cookie is
    /// logged and leaves the current values untouched.
    pub fn load(&mut self) -> bool {
        match self.read_saved() {
            Ok(Some(saved)) => {
                self.settings.merge(saved);
                log::info!("accessibility preferences loaded");
                true
            }
            Ok(None) => false,
            Err(err) => {
                log::error!("failed to load accessibility preferences: {err}");
                false
            }
        }
    }

    fn read_saved(&self) -> Result<Option<serde_json::Map<String, serde_json::Value>>, PrefsError> {
        let Some(raw) = self
            .jar
            .get(&self.cookie_name)
            .map_err(PrefsError::Decode)?
        else {
            return Ok(None);
        };
        Settings::parse_saved(&raw).map(Some)
    }

    /// Expire the cookie. In-memory values are not touched.
    pub fn clear(&mut self) {
        self.jar.set(Cookie::expired(&self.cookie_name));
        log::info!("accessibility preferences deleted");
    }
}
