//! Panel configuration: the element contract and timings.
//!
//! Defaults match the site's markup. Any subset of fields can be overridden
//! from JSON; missing fields keep their default.

use serde::{Deserialize, Serialize};

use crate::constants::{ANNOUNCE_LIFETIME_MS, COOKIE_LIFETIME_DAYS, COOKIE_NAME, FOCUS_DELAY_MS};
use crate::settings::Scalar;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub cookie_name: String,
    pub cookie_lifetime_days: i64,
    pub announce_lifetime_ms: i32,
    pub focus_delay_ms: i32,
    pub debug: bool,
    pub panel_id: String,
    pub open_button_id: String,
    pub close_button_id: String,
    pub reset_button_id: String,
    pub active_count_id: String,
    pub toggle_selector: String,
    pub toggle_switch_selector: String,
    pub align_selector: String,
    pub contrast_selector: String,
    pub focusable_selector: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            cookie_name: COOKIE_NAME.to_string(),
            cookie_lifetime_days: COOKIE_LIFETIME_DAYS,
            announce_lifetime_ms: ANNOUNCE_LIFETIME_MS,
            focus_delay_ms: FOCUS_DELAY_MS,
            debug: false,
            panel_id: "accessibility-panel".to_string(),
            open_button_id: "accessibility-button".to_string(),
            close_button_id: "close-panel-btn".to_string(),
            reset_button_id: "reset-accessibility-btn".to_string(),
            active_count_id: "active-modes-count".to_string(),
            toggle_selector: ".accessibility-option[data-mode]".to_string(),
            toggle_switch_selector: ".toggle-switch".to_string(),
            align_selector: ".align-btn".to_string(),
            contrast_selector: ".contrast-btn".to_string(),
            focusable_selector:
                "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])"
                    .to_string(),
        }
    }
}

impl PanelConfig {
    /// Parse a (possibly partial) JSON override.
    ///
    /// # Errors
    /// Returns an error when the text is not valid JSON for this shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Ids of a slider and its value readout, e.g. `font-size-slider` / `font-size-value`.
    #[must_use]
    pub fn slider_ids(&self, scalar: Scalar) -> (String, String) {
        let key = scalar.key();
        (format!("{key}-slider"), format!("{key}-value"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let cfg = PanelConfig::from_json(r#"{"panel_id":"a11y","focus_delay_ms":0}"#).unwrap();
        assert_eq!(cfg.panel_id, "a11y");
        assert_eq!(cfg.focus_delay_ms, 0);
        assert_eq!(cfg.cookie_name, "skynium_accessibility_prefs");
        assert_eq!(cfg.announce_lifetime_ms, 3_000);
    }

    #[test]
    fn slider_ids_follow_setting_keys() {
        let cfg = PanelConfig::default();
        assert_eq!(
            cfg.slider_ids(Scalar::LetterSpacing),
            (
                "letter-spacing-slider".to_string(),
                "letter-spacing-value".to_string()
            )
        );
    }
}
