//! Panel controller: one method per user intent.
//!
//! The controller owns the settings store and the page surface for the
//! lifetime of the page. Event wiring lives in the web crate and only ever
//! calls into these methods.

use crate::announce::mode_changed;
use crate::apply::{apply_settings, sync_alignment, sync_contrast, sync_controls};
use crate::config::PanelConfig;
use crate::constants::{RESET_ANNOUNCEMENT, RESET_CONFIRM_PROMPT, RESET_DONE_ALERT};
use crate::cookie::CookieJar;
use crate::focus::{FocusTrap, TrapAction};
use crate::settings::{Contrast, Mode, Scalar, Settings, TextAlign};
use crate::store::SettingsStore;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug)]
pub struct Panel<S, J> {
    store: SettingsStore<J>,
    surface: S,
    config: PanelConfig,
    state: PanelState,
}

impl<S: Surface, J: CookieJar> Panel<S, J> {
    #[must_use]
    pub fn new(surface: S, jar: J, config: PanelConfig) -> Self {
        let store = SettingsStore::new(jar, config.cookie_name.clone(), config.cookie_lifetime_days);
        Self {
            store,
            surface,
            config,
            state: PanelState::Closed,
        }
    }

    /// Load saved preferences, paint them and sync every control.
    ///
    /// Returns whether a saved cookie was found.
    pub fn init(&mut self) -> bool {
        let loaded = self.store.load();
        self.apply();
        sync_controls(self.store.settings(), &mut self.surface);
        loaded
    }

    pub fn apply(&mut self) {
        apply_settings(self.store.settings(), &mut self.surface);
    }

    /// Flip a mode, reflect it on its control, persist and announce it.
    pub fn toggle(&mut self, mode: Mode) -> bool {
        let on = self.store.toggle(mode);
        self.surface.set_toggle_state(mode, on);
        self.apply();
        self.store.save();
        self.surface
            .announce(&mode_changed(mode, on), self.config.announce_lifetime_ms);
        on
    }

    /// Live preview while a slider moves. Nothing is saved until [`Panel::slider_commit`].
    ///
    /// Unparseable input is ignored and returns `None`.
    pub fn slider_input(&mut self, scalar: Scalar, raw: &str) -> Option<f64> {
        let Some(value) = scalar.parse(raw) else {
            log::debug!("ignoring {} slider input {raw:?}", scalar.key());
            return None;
        };
        self.store.set_scalar(scalar, value);
        let stored = self.store.scalar(scalar);
        self.surface
            .set_slider_readout(scalar, stored, &scalar.label(stored));
        self.apply();
        Some(stored)
    }

    /// Slider released: persist the current value.
    pub fn slider_commit(&mut self, _scalar: Scalar) {
        self.store.save();
    }

    pub fn choose_alignment(&mut self, align: TextAlign) {
        self.store.set_text_align(align);
        sync_alignment(self.store.settings(), &mut self.surface);
        self.apply();
        self.store.save();
    }

    pub fn choose_contrast(&mut self, contrast: Contrast) {
        self.store.set_contrast(contrast);
        sync_contrast(self.store.settings(), &mut self.surface);
        self.apply();
        self.store.save();
    }

    /// `Closed -> Open`. Does nothing when already open.
    pub fn open(&mut self) {
        if self.state == PanelState::Open {
            return;
        }
        self.state = PanelState::Open;
        self.surface.set_panel_open(true);
        self.surface.focus_close_button(self.config.focus_delay_ms);
        self.surface.install_focus_trap();
    }

    /// `Open -> Closed`. Does nothing when already closed.
    pub fn close(&mut self) {
        if self.state == PanelState::Closed {
            return;
        }
        self.state = PanelState::Closed;
        self.surface.set_panel_open(false);
        self.surface.focus_trigger();
        self.surface.release_focus_trap();
    }

    /// Route a keydown seen by the focus trap.
    ///
    /// Returns the element focus has to wrap to (the caller prevents the
    /// default). Escape closes the panel.
    pub fn handle_trap_key<H: PartialEq + Clone>(
        &mut self,
        trap: &FocusTrap<H>,
        key: &str,
        shift: bool,
        active: Option<&H>,
    ) -> Option<H> {
        match trap.on_key(key, shift, active) {
            TrapAction::Pass => None,
            TrapAction::Wrap(target) => Some(target),
            TrapAction::Close => {
                self.close();
                None
            }
        }
    }

    /// Ask for confirmation, then reset. Returns whether the reset happened.
    pub fn request_reset(&mut self) -> bool {
        if !self.surface.confirm(RESET_CONFIRM_PROMPT) {
            return false;
        }
        self.reset();
        true
    }

    /// Back to defaults: cookie deleted, page repainted, controls re-synced.
    pub fn reset(&mut self) {
        self.store.reset();
        self.store.clear();
        self.apply();
        sync_controls(self.store.settings(), &mut self.surface);
        self.surface
            .announce(RESET_ANNOUNCEMENT, self.config.announce_lifetime_ms);
        self.surface.alert(RESET_DONE_ALERT);
    }

    #[must_use]
    pub const fn state(&self) -> PanelState {
        self.state
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        self.store.settings()
    }

    #[must_use]
    pub const fn store(&self) -> &SettingsStore<J> {
        &self.store
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
