//! [`Surface`] over the live document.
//!
//! Every method looks its elements up on demand and quietly does nothing when
//! the markup does not carry them.

use skynium_a11y::constants::{CLASS_ACTIVE, CLASS_OPEN, CLASS_SR_ONLY};
use skynium_a11y::{ActiveSummary, Choice, Mode, PanelConfig, Scalar, Surface};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::dom::{self, html_element_by_id, input_by_id, query_all, set_checked, set_class};
use crate::trap::TrapSlot;

pub struct WebSurface {
    document: Document,
    config: PanelConfig,
    trap: TrapSlot,
}

impl WebSurface {
    #[must_use]
    pub fn new(document: Document, config: PanelConfig) -> Self {
        Self {
            document,
            config,
            trap: TrapSlot::default(),
        }
    }

    #[must_use]
    pub const fn trap_installed(&self) -> bool {
        self.trap.is_installed()
    }

    fn root_html(&self) -> Option<HtmlElement> {
        self.document
            .document_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn toggles_for(&self, mode: Mode) -> Vec<Element> {
        let selector = format!("{}[data-mode=\"{}\"]", self.config.toggle_selector, mode.key());
        query_all(&self.document, &selector)
    }

    fn choice_buttons(&self, choice: Choice) -> Vec<Element> {
        let selector = match choice {
            Choice::Align(align) => {
                format!("{}[data-align=\"{}\"]", self.config.align_selector, align.as_str())
            }
            Choice::Contrast(contrast) => format!(
                "{}[data-contrast=\"{}\"]",
                self.config.contrast_selector,
                contrast.as_str()
            ),
        };
        query_all(&self.document, &selector)
    }
}

impl Surface for WebSurface {
    fn set_body_class(&mut self, class: &str, on: bool) {
        if let Some(body) = self.document.body() {
            set_class(&body, class, on);
        }
    }

    fn set_root_font_size(&mut self, value: &str) {
        if let Some(html) = self.root_html() {
            let _ = html.style().set_property("font-size", value);
        }
    }

    fn set_body_style(&mut self, property: &str, value: &str) {
        if let Some(body) = self.document.body() {
            let _ = body.style().set_property(property, value);
        }
    }

    fn show_active_summary(&mut self, summary: &ActiveSummary) {
        let Some(info) = html_element_by_id(&self.document, &self.config.active_count_id) else {
            return;
        };
        info.set_text_content(Some(&summary.text));
        let style = info.style();
        let _ = style.set_property("color", summary.color);
        let _ = if summary.bold {
            style.set_property("font-weight", "bold")
        } else {
            style.remove_property("font-weight").map(|_| ())
        };
    }

    fn set_toggle_state(&mut self, mode: Mode, active: bool) {
        for option in self.toggles_for(mode) {
            set_checked(&option, active);
            if let Ok(Some(switch)) = option.query_selector(&self.config.toggle_switch_selector) {
                set_class(&switch, CLASS_ACTIVE, active);
            }
        }
    }

    fn set_slider_position(&mut self, scalar: Scalar, value: f64) {
        let (slider_id, _) = self.config.slider_ids(scalar);
        if let Some(slider) = input_by_id(&self.document, &slider_id) {
            slider.set_value(&value.to_string());
        }
    }

    fn set_slider_readout(&mut self, scalar: Scalar, value: f64, label: &str) {
        let (slider_id, value_id) = self.config.slider_ids(scalar);
        if let Some(slider) = self.document.get_element_by_id(&slider_id) {
            let _ = slider.set_attribute("aria-valuenow", &value.to_string());
        }
        if let Some(readout) = self.document.get_element_by_id(&value_id) {
            readout.set_text_content(Some(label));
        }
    }

    fn set_choice_state(&mut self, choice: Choice, active: bool) {
        for button in self.choice_buttons(choice) {
            set_checked(&button, active);
        }
    }

    fn set_panel_open(&mut self, open: bool) {
        if let Some(panel) = self.document.get_element_by_id(&self.config.panel_id) {
            set_class(&panel, CLASS_OPEN, open);
        }
        if let Some(trigger) = self.document.get_element_by_id(&self.config.open_button_id) {
            let _ = trigger.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
    }

    fn focus_close_button(&mut self, delay_ms: i32) {
        let Some(close) = html_element_by_id(&self.document, &self.config.close_button_id) else {
            return;
        };
        dom::after_ms(delay_ms, move || {
            let _ = close.focus();
        });
    }

    fn focus_trigger(&mut self) {
        if let Some(trigger) = html_element_by_id(&self.document, &self.config.open_button_id) {
            let _ = trigger.focus();
        }
    }

    fn install_focus_trap(&mut self) {
        let Some(panel) = self.document.get_element_by_id(&self.config.panel_id) else {
            return;
        };
        self.trap
            .install(&self.document, &panel, &self.config.focusable_selector);
    }

    fn release_focus_trap(&mut self) {
        self.trap.release(&self.document);
    }

    fn announce(&mut self, message: &str, lifetime_ms: i32) {
        let Some(body) = self.document.body() else {
            return;
        };
        let Ok(announcer) = self.document.create_element("div") else {
            return;
        };
        let _ = announcer.set_attribute("role", "status");
        let _ = announcer.set_attribute("aria-live", "polite");
        announcer.set_class_name(CLASS_SR_ONLY);
        announcer.set_text_content(Some(message));
        if body.append_child(&announcer).is_err() {
            return;
        }
        dom::after_ms(lifetime_ms, move || announcer.remove());
    }

    fn confirm(&mut self, message: &str) -> bool {
        dom::window()
            .and_then(|win| win.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        if let Some(win) = dom::window() {
            let _ = win.alert_with_message(message);
        }
    }
}
