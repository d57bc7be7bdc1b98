//! Fixed names and defaults shared by the store, the cookie codec and the panel.
//!
//! Element ids and selectors live in [`crate::config::PanelConfig`] because the
//! markup owns them; the values here are part of the persisted format.

// Cookie -------------------------------------------------------------------
pub const COOKIE_NAME: &str = "skynium_accessibility_prefs";
pub const COOKIE_LIFETIME_DAYS: i64 = 365;
pub const COOKIE_PATH: &str = "/";

// Setting keys ---------------------------------------------------------------
pub const KEY_FONT_SIZE: &str = "font-size";
pub const KEY_LINE_HEIGHT: &str = "line-height";
pub const KEY_LETTER_SPACING: &str = "letter-spacing";
pub const KEY_TEXT_ALIGN: &str = "text-align";
pub const KEY_CONTRAST: &str = "contrast";

// Defaults -------------------------------------------------------------------
pub const DEFAULT_FONT_SIZE: u32 = 100;
pub const DEFAULT_LINE_HEIGHT: f64 = 1.6;
pub const DEFAULT_LETTER_SPACING: f64 = 0.0;

// Timing (milliseconds) ------------------------------------------------------
pub const ANNOUNCE_LIFETIME_MS: i32 = 3_000;
pub const FOCUS_DELAY_MS: i32 = 100;

// UI text --------------------------------------------------------------------
pub const ACTIVE_NONE_LABEL: &str = "None";
pub const ACTIVE_NONE_COLOR: &str = "#666";
pub const ACTIVE_SOME_COLOR: &str = "var(--secondary-dark)";
pub const RESET_CONFIRM_PROMPT: &str =
    "Are you sure you want to reset all accessibility settings?";
pub const RESET_DONE_ALERT: &str = "All accessibility settings have been reset.";
pub const RESET_ANNOUNCEMENT: &str = "All settings have been reset";

// CSS classes ----------------------------------------------------------------
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_SR_ONLY: &str = "sr-only";
