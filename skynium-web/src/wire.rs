//! Event registration for the panel's controls.
//!
//! Listeners live as long as the page, so their closures are leaked on purpose
//! once attached.

use std::rc::Rc;
use std::str::FromStr;

use skynium_a11y::{Contrast, Mode, PanelConfig, Scalar, TextAlign};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent};

use crate::app::with_panel;
use crate::dom::{input_by_id, js_error_message, query_all};

/// Keys that activate a focused toggle, like a click would.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

fn listen(target: &EventTarget, event: &str, mut handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(move |e: Event| handler(e));
    match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        Ok(()) => closure.forget(),
        Err(err) => log::error!("could not listen for {event}: {}", js_error_message(&err)),
    }
}

/// Run `handler` on click.
pub fn on_click(el: &Element, handler: impl Fn() + 'static) {
    listen(el, "click", move |_| handler());
}

/// Run `handler` on click and on Enter/Space. Keyboard activation suppresses
/// the default (Space would otherwise scroll the page).
pub fn on_activate(el: &Element, handler: impl Fn() + 'static) {
    let handler = Rc::new(handler);
    let click = Rc::clone(&handler);
    listen(el, "click", move |_| click());
    listen(el, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if is_activation_key(&key_event.key()) {
            key_event.prevent_default();
            handler();
        }
    });
}

/// Run `handler` with the element's current value on every `input` event.
pub fn on_input(el: &web_sys::HtmlInputElement, handler: impl Fn(String) + 'static) {
    let input = el.clone();
    listen(el, "input", move |_| handler(input.value()));
}

/// Run `handler` when the value is committed (`change`).
pub fn on_change(el: &Element, handler: impl Fn() + 'static) {
    listen(el, "change", move |_| handler());
}

/// Attach every control found in `document`. Missing controls are skipped.
pub fn wire_controls(document: &Document, config: &PanelConfig) {
    wire_toggles(document, config);
    wire_sliders(document, config);
    wire_choices(document, &config.align_selector, "data-align", |align: TextAlign| {
        with_panel(|panel| panel.choose_alignment(align));
    });
    wire_choices(
        document,
        &config.contrast_selector,
        "data-contrast",
        |contrast: Contrast| {
            with_panel(|panel| panel.choose_contrast(contrast));
        },
    );
    wire_panel_buttons(document, config);
}

fn wire_toggles(document: &Document, config: &PanelConfig) {
    for option in query_all(document, &config.toggle_selector) {
        let raw = option.get_attribute("data-mode").unwrap_or_default();
        let Some(mode) = Mode::from_key(&raw) else {
            log::debug!("skipping toggle with unknown mode {raw:?}");
            continue;
        };
        on_activate(&option, move || {
            with_panel(|panel| panel.toggle(mode));
        });
    }
}

fn wire_sliders(document: &Document, config: &PanelConfig) {
    for scalar in Scalar::ALL {
        let (slider_id, _) = config.slider_ids(scalar);
        let Some(slider) = input_by_id(document, &slider_id) else {
            continue;
        };
        on_input(&slider, move |raw| {
            with_panel(|panel| panel.slider_input(scalar, &raw));
        });
        on_change(&slider, move || {
            with_panel(|panel| panel.slider_commit(scalar));
        });
    }
}

fn wire_choices<T>(
    document: &Document,
    selector: &str,
    attribute: &str,
    choose: impl Fn(T) + Clone + 'static,
) where
    T: FromStr + Copy + 'static,
{
    for button in query_all(document, selector) {
        let raw = button.get_attribute(attribute).unwrap_or_default();
        let Ok(value) = raw.parse::<T>() else {
            log::debug!("skipping {attribute} button with value {raw:?}");
            continue;
        };
        let choose = choose.clone();
        on_click(&button, move || choose(value));
    }
}

fn wire_panel_buttons(document: &Document, config: &PanelConfig) {
    if let Some(open) = document.get_element_by_id(&config.open_button_id) {
        on_click(&open, || {
            with_panel(|panel| panel.open());
        });
    }
    if let Some(close) = document.get_element_by_id(&config.close_button_id) {
        on_click(&close, || {
            with_panel(|panel| panel.close());
        });
    }
    if let Some(reset) = document.get_element_by_id(&config.reset_button_id) {
        on_click(&reset, || {
            with_panel(|panel| panel.request_reset());
        });
    }
}
