//! The page as the panel sees it.
//!
//! [`Surface`] is everything the controller is allowed to do to the document.
//! Implementations must tolerate missing elements by doing nothing.

use std::collections::{BTreeMap, BTreeSet};

use crate::announce::ActiveSummary;
use crate::settings::{Contrast, Mode, Scalar, TextAlign};

/// A button in one of the exclusive-choice groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    Align(TextAlign),
    Contrast(Contrast),
}

impl Choice {
    /// Value carried in the button's `data-align` / `data-contrast` attribute.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Align(align) => align.as_str(),
            Self::Contrast(contrast) => contrast.as_str(),
        }
    }
}

pub trait Surface {
    /// Add or remove a class on the content root (`<body>`).
    fn set_body_class(&mut self, class: &str, on: bool);
    /// Inline `font-size` on the document element, so `rem` units follow.
    fn set_root_font_size(&mut self, value: &str);
    /// Inline style property on the content root.
    fn set_body_style(&mut self, property: &str, value: &str);
    fn show_active_summary(&mut self, summary: &ActiveSummary);

    /// `active` class and `aria-checked` on a toggle option and its switch.
    fn set_toggle_state(&mut self, mode: Mode, active: bool);
    /// Move the slider thumb.
    fn set_slider_position(&mut self, scalar: Scalar, value: f64);
    /// Update the value label and `aria-valuenow` of a slider.
    fn set_slider_readout(&mut self, scalar: Scalar, value: f64, label: &str);
    /// `active` class and `aria-checked` on a choice button.
    fn set_choice_state(&mut self, choice: Choice, active: bool);

    /// Show or hide the panel and update the trigger's `aria-expanded`.
    fn set_panel_open(&mut self, open: bool);
    fn focus_close_button(&mut self, delay_ms: i32);
    fn focus_trigger(&mut self);
    /// Confine tabbing to the panel. Replaces any trap already installed.
    fn install_focus_trap(&mut self);
    fn release_focus_trap(&mut self);

    /// Politely announce `message`, dropping the live node after `lifetime_ms`.
    fn announce(&mut self, message: &str, lifetime_ms: i32);
    /// Blocking yes/no prompt.
    fn confirm(&mut self, message: &str) -> bool;
    /// Blocking acknowledgement.
    fn alert(&mut self, message: &str);
}

/// Which control currently holds focus on a [`MemorySurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    CloseButton,
    Trigger,
}

/// Headless surface that records the resulting page state.
///
/// Every call is also appended to [`MemorySurface::journal`] so ordering can be
/// asserted.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    pub body_classes: BTreeSet<String>,
    pub root_font_size: Option<String>,
    pub body_styles: BTreeMap<String, String>,
    pub active_summary: Option<ActiveSummary>,
    pub toggles: BTreeMap<Mode, bool>,
    pub slider_positions: BTreeMap<&'static str, f64>,
    pub slider_labels: BTreeMap<&'static str, String>,
    pub choices: BTreeMap<Choice, bool>,
    pub panel_open: bool,
    pub focus: Option<Focus>,
    pub traps_installed: usize,
    pub announcements: Vec<String>,
    pub alerts: Vec<String>,
    pub confirm_answer: bool,
    pub journal: Vec<String>,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self {
            body_classes: BTreeSet::new(),
            root_font_size: None,
            body_styles: BTreeMap::new(),
            active_summary: None,
            toggles: BTreeMap::new(),
            slider_positions: BTreeMap::new(),
            slider_labels: BTreeMap::new(),
            choices: BTreeMap::new(),
            panel_open: false,
            focus: None,
            traps_installed: 0,
            announcements: Vec::new(),
            alerts: Vec::new(),
            confirm_answer: true,
            journal: Vec::new(),
        }
    }
}

impl MemorySurface {
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.body_styles.get(property).map(String::as_str)
    }

    /// Position of the first journal entry starting with `prefix`.
    #[must_use]
    pub fn journal_index(&self, prefix: &str) -> Option<usize> {
        self.journal.iter().position(|entry| entry.starts_with(prefix))
    }
}

impl Surface for MemorySurface {
    fn set_body_class(&mut self, class: &str, on: bool) {
        self.journal.push(format!("class {class} {on}"));
        if on {
            self.body_classes.insert(class.to_string());
        } else {
            self.body_classes.remove(class);
        }
    }

    fn set_root_font_size(&mut self, value: &str) {
        self.journal.push(format!("font-size {value}"));
        self.root_font_size = Some(value.to_string());
    }

    fn set_body_style(&mut self, property: &str, value: &str) {
        self.journal.push(format!("style {property} {value}"));
        self.body_styles
            .insert(property.to_string(), value.to_string());
    }

    fn show_active_summary(&mut self, summary: &ActiveSummary) {
        self.journal.push(format!("summary {}", summary.text));
        self.active_summary = Some(summary.clone());
    }

    fn set_toggle_state(&mut self, mode: Mode, active: bool) {
        self.journal.push(format!("toggle {mode} {active}"));
        self.toggles.insert(mode, active);
    }

    fn set_slider_position(&mut self, scalar: Scalar, value: f64) {
        self.journal.push(format!("slider {} {value}", scalar.key()));
        self.slider_positions.insert(scalar.key(), value);
    }

    fn set_slider_readout(&mut self, scalar: Scalar, _value: f64, label: &str) {
        self.journal.push(format!("readout {} {label}", scalar.key()));
        self.slider_labels.insert(scalar.key(), label.to_string());
    }

    fn set_choice_state(&mut self, choice: Choice, active: bool) {
        self.journal
            .push(format!("choice {} {active}", choice.value()));
        self.choices.insert(choice, active);
    }

    fn set_panel_open(&mut self, open: bool) {
        self.journal.push(format!("panel {open}"));
        self.panel_open = open;
    }

    fn focus_close_button(&mut self, delay_ms: i32) {
        self.journal.push(format!("focus close {delay_ms}"));
        self.focus = Some(Focus::CloseButton);
    }

    fn focus_trigger(&mut self) {
        self.journal.push("focus trigger".to_string());
        self.focus = Some(Focus::Trigger);
    }

    fn install_focus_trap(&mut self) {
        self.journal.push("trap install".to_string());
        self.traps_installed += 1;
    }

    fn release_focus_trap(&mut self) {
        self.journal.push("trap release".to_string());
        self.traps_installed = self.traps_installed.saturating_sub(1);
    }

    fn announce(&mut self, message: &str, _lifetime_ms: i32) {
        self.journal.push(format!("announce {message}"));
        self.announcements.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.journal.push(format!("confirm {message}"));
        self.confirm_answer
    }

    fn alert(&mut self, message: &str) {
        self.journal.push(format!("alert {message}"));
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_surface_counts_every_trap() {
        let mut surface = MemorySurface::default();
        surface.install_focus_trap();
        surface.install_focus_trap();
        assert_eq!(surface.traps_installed, 2);
        surface.release_focus_trap();
        surface.release_focus_trap();
        surface.release_focus_trap();
        assert_eq!(surface.traps_installed, 0);
    }
}
