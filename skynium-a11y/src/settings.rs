//! Accessibility settings model
//!
//! A flat mapping of option name to value. Boolean modes become body classes,
//! scalars become inline styles. Keys that are not recognized (usually left
//! behind by an older cookie layout) are kept verbatim so a save never drops
//! them, but nothing in the UI reads them.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_FONT_SIZE, DEFAULT_LETTER_SPACING, DEFAULT_LINE_HEIGHT, KEY_CONTRAST, KEY_FONT_SIZE,
    KEY_LETTER_SPACING, KEY_LINE_HEIGHT, KEY_TEXT_ALIGN,
};
use crate::error::PrefsError;

/// Boolean accessibility modes. Each one maps to a same-named CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    EpilepsySafe,
    VisuallyImpaired,
    CognitiveDisability,
    AdhdFriendly,
    ScreenReader,
    DyslexiaFont,
    HighlightHeadings,
    HighlightLinks,
    HighSaturation,
    LowSaturation,
    Monochrome,
    HighlightCursor,
    BigCursorDark,
    BigCursorLight,
}

impl Mode {
    pub const ALL: [Self; 14] = [
        Self::EpilepsySafe,
        Self::VisuallyImpaired,
        Self::CognitiveDisability,
        Self::AdhdFriendly,
        Self::ScreenReader,
        Self::DyslexiaFont,
        Self::HighlightHeadings,
        Self::HighlightLinks,
        Self::HighSaturation,
        Self::LowSaturation,
        Self::Monochrome,
        Self::HighlightCursor,
        Self::BigCursorDark,
        Self::BigCursorLight,
    ];

    /// Cookie key, `data-mode` value and body class for this mode.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::EpilepsySafe => "epilepsy-safe",
            Self::VisuallyImpaired => "visually-impaired",
            Self::CognitiveDisability => "cognitive-disability",
            Self::AdhdFriendly => "adhd-friendly",
            Self::ScreenReader => "screen-reader",
            Self::DyslexiaFont => "dyslexia-font",
            Self::HighlightHeadings => "highlight-headings",
            Self::HighlightLinks => "highlight-links",
            Self::HighSaturation => "high-saturation",
            Self::LowSaturation => "low-saturation",
            Self::Monochrome => "monochrome",
            Self::HighlightCursor => "highlight-cursor",
            Self::BigCursorDark => "big-cursor-dark",
            Self::BigCursorLight => "big-cursor-light",
        }
    }

    /// Human readable name used in announcements (`dyslexia-font` -> `dyslexia font`).
    #[must_use]
    pub fn spoken_name(self) -> String {
        self.key().replace('-', " ")
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.key() == key)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Value of the `text-align` setting, also the `data-align` attribute of its buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub const ALL: [Self; 4] = [Self::Left, Self::Center, Self::Right, Self::Justify];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

impl FromStr for TextAlign {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|align| align.as_str() == s)
            .ok_or_else(|| PrefsError::UnknownValue {
                key: KEY_TEXT_ALIGN,
                value: s.to_string(),
            })
    }
}

/// Value of the `contrast` setting, also the `data-contrast` attribute of its buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contrast {
    #[default]
    Normal,
    Dark,
    High,
    Light,
}

impl Contrast {
    pub const ALL: [Self; 4] = [Self::Normal, Self::Dark, Self::High, Self::Light];

    /// Every class a contrast value can put on the body.
    pub const CLASSES: [&'static str; 3] = ["dark-mode", "high-contrast", "light-mode"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Dark => "dark",
            Self::High => "high",
            Self::Light => "light",
        }
    }

    /// Body class for this contrast, `None` for `normal`.
    #[must_use]
    pub const fn class(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Dark => Some("dark-mode"),
            Self::High => Some("high-contrast"),
            Self::Light => Some("light-mode"),
        }
    }
}

impl FromStr for Contrast {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|contrast| contrast.as_str() == s)
            .ok_or_else(|| PrefsError::UnknownValue {
                key: KEY_CONTRAST,
                value: s.to_string(),
            })
    }
}

/// The three slider-driven scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    FontSize,
    LineHeight,
    LetterSpacing,
}

impl Scalar {
    pub const ALL: [Self; 3] = [Self::FontSize, Self::LineHeight, Self::LetterSpacing];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FontSize => KEY_FONT_SIZE,
            Self::LineHeight => KEY_LINE_HEIGHT,
            Self::LetterSpacing => KEY_LETTER_SPACING,
        }
    }

    /// Parse a raw slider value. Font size is an integer percentage, the rest are floats.
    #[must_use]
    pub fn parse(self, raw: &str) -> Option<f64> {
        let raw = raw.trim();
        match self {
            Self::FontSize => parse_int_prefix(raw).map(f64::from),
            Self::LineHeight | Self::LetterSpacing => {
                raw.parse::<f64>().ok().filter(|v| v.is_finite())
            }
        }
    }

    /// Text shown next to the slider.
    #[must_use]
    pub fn label(self, value: f64) -> String {
        match self {
            Self::FontSize => format!("{}%", without_negative_zero(value)),
            Self::LineHeight => format!("{}", without_negative_zero(value)),
            Self::LetterSpacing => format!("{}px", without_negative_zero(value)),
        }
    }
}

/// `-0.0` reads and serializes as `0`.
#[must_use]
pub(crate) fn without_negative_zero(value: f64) -> f64 {
    value + 0.0
}

// Slider values like "120.0" still resolve to 120.
fn parse_int_prefix(raw: &str) -> Option<i32> {
    let end = raw
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(raw.len(), |(i, _)| i);
    raw[..end].parse().ok()
}

/// Full accessibility preference mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    modes: BTreeMap<Mode, bool>,
    pub font_size: u32,
    pub line_height: f64,
    pub letter_spacing: f64,
    pub text_align: TextAlign,
    pub contrast: Contrast,
    extra: Map<String, Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            modes: Mode::ALL.into_iter().map(|mode| (mode, false)).collect(),
            font_size: DEFAULT_FONT_SIZE,
            line_height: DEFAULT_LINE_HEIGHT,
            letter_spacing: DEFAULT_LETTER_SPACING,
            text_align: TextAlign::default(),
            contrast: Contrast::default(),
            extra: Map::new(),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn mode(&self, mode: Mode) -> bool {
        self.modes.get(&mode).copied().unwrap_or(false)
    }

    pub fn set_mode(&mut self, mode: Mode, on: bool) {
        self.modes.insert(mode, on);
    }

    /// Flip a mode and return its new value.
    pub fn toggle(&mut self, mode: Mode) -> bool {
        let next = !self.mode(mode);
        self.set_mode(mode, next);
        next
    }

    /// Modes paired with their current value, in declaration order.
    pub fn modes(&self) -> impl Iterator<Item = (Mode, bool)> + '_ {
        Mode::ALL.into_iter().map(|mode| (mode, self.mode(mode)))
    }

    #[must_use]
    pub fn active_mode_count(&self) -> usize {
        self.modes.values().filter(|on| **on).count()
    }

    #[must_use]
    pub fn scalar(&self, scalar: Scalar) -> f64 {
        match scalar {
            Scalar::FontSize => f64::from(self.font_size),
            Scalar::LineHeight => self.line_height,
            Scalar::LetterSpacing => self.letter_spacing,
        }
    }

    pub fn set_scalar(&mut self, scalar: Scalar, value: f64) {
        match scalar {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Scalar::FontSize => self.font_size = value.round().max(0.0) as u32,
            Scalar::LineHeight => self.line_height = without_negative_zero(value),
            Scalar::LetterSpacing => self.letter_spacing = without_negative_zero(value),
        }
    }

    /// Keys carried over from a saved cookie that this version does not know.
    #[must_use]
    pub const fn unknown_keys(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Put every recognized key back to its default. Unknown keys are left alone.
    pub fn reset(&mut self) {
        let extra = std::mem::take(&mut self.extra);
        *self = Self {
            extra,
            ..Self::default()
        };
    }

    /// Merge saved values over the current ones, key by key.
    ///
    /// Recognized keys with a value of the wrong shape are skipped and keep their
    /// current value. Unknown keys are retained.
    pub fn merge(&mut self, saved: Map<String, Value>) {
        for (key, value) in saved {
            if let Err(err) = self.merge_entry(&key, value) {
                log::warn!("ignoring saved accessibility value: {err}");
            }
        }
    }

    fn merge_entry(&mut self, key: &str, value: Value) -> Result<(), PrefsError> {
        if let Some(mode) = Mode::from_key(key) {
            let on = value.as_bool().ok_or_else(|| mistyped(mode.key(), &value))?;
            self.set_mode(mode, on);
            return Ok(());
        }
        match key {
            KEY_FONT_SIZE => {
                let size = value
                    .as_f64()
                    .filter(|v| (0.0..=f64::from(u32::MAX)).contains(v))
                    .ok_or_else(|| mistyped(KEY_FONT_SIZE, &value))?;
                self.set_scalar(Scalar::FontSize, size);
            }
            KEY_LINE_HEIGHT => {
                let height = value
                    .as_f64()
                    .ok_or_else(|| mistyped(KEY_LINE_HEIGHT, &value))?;
                self.set_scalar(Scalar::LineHeight, height);
            }
            KEY_LETTER_SPACING => {
                let spacing = value
                    .as_f64()
                    .ok_or_else(|| mistyped(KEY_LETTER_SPACING, &value))?;
                self.set_scalar(Scalar::LetterSpacing, spacing);
            }
            KEY_TEXT_ALIGN => {
                let raw = value
                    .as_str()
                    .ok_or_else(|| mistyped(KEY_TEXT_ALIGN, &value))?;
                self.text_align = raw.parse()?;
            }
            KEY_CONTRAST => {
                let raw = value.as_str().ok_or_else(|| mistyped(KEY_CONTRAST, &value))?;
                self.contrast = raw.parse()?;
            }
            _ => {
                self.extra.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    /// Parse a decoded cookie payload into a JSON object ready for [`Settings::merge`].
    ///
    /// # Errors
    /// Returns an error when the payload is not valid JSON or not a JSON object.
    pub fn parse_saved(json: &str) -> Result<Map<String, Value>, PrefsError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(map),
            _ => Err(PrefsError::NotAnObject),
        }
    }

    /// Serialize the whole mapping, unknown keys included.
    ///
    /// # Errors
    /// Returns an error if a value cannot be represented as JSON (a non-finite float).
    pub fn to_json(&self) -> Result<String, PrefsError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn mistyped(key: &'static str, value: &Value) -> PrefsError {
    PrefsError::Mistyped {
        key,
        value: value.to_string(),
    }
}

impl Serialize for Settings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Mode::ALL.len() + 5 + self.extra.len()))?;
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        for (mode, on) in self.modes() {
            map.serialize_entry(mode.key(), &on)?;
        }
        map.serialize_entry(KEY_FONT_SIZE, &self.font_size)?;
        map.serialize_entry(KEY_LINE_HEIGHT, &without_negative_zero(self.line_height))?;
        map.serialize_entry(
            KEY_LETTER_SPACING,
            &without_negative_zero(self.letter_spacing),
        )?;
        map.serialize_entry(KEY_TEXT_ALIGN, &self.text_align)?;
        map.serialize_entry(KEY_CONTRAST, &self.contrast)?;
        map.end()
    }
}
