//! Skynium accessibility core
//!
//! Platform-agnostic preference model and panel logic for the Skynium site's
//! accessibility menu. Everything that touches the browser goes through the
//! [`Surface`] and [`CookieJar`] traits, so the controller runs headless in tests.

#![forbid(unsafe_code)]

pub mod announce;
pub mod apply;
pub mod config;
pub mod constants;
pub mod cookie;
pub mod error;
pub mod focus;
pub mod panel;
pub mod settings;
pub mod store;
pub mod surface;

pub use announce::{ActiveSummary, mode_changed};
pub use apply::{apply_settings, sync_controls};
pub use config::PanelConfig;
pub use cookie::{Cookie, CookieJar, MemoryJar, SameSite, find_cookie, http_date};
pub use error::PrefsError;
pub use focus::{FocusTrap, TrapAction};
pub use panel::{Panel, PanelState};
pub use settings::{Contrast, Mode, Scalar, Settings, TextAlign};
pub use store::SettingsStore;
pub use surface::{Choice, Focus, MemorySurface, Surface};
