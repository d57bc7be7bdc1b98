use skynium_a11y::FocusTrap;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

type KeyListener = Closure<dyn FnMut(KeyboardEvent)>;

/// Holds the one document-level keydown listener confining focus to the panel.
///
/// A released listener may still be on the stack (Escape closes the panel from
/// inside it), so it is parked in `retired` and dropped on the next
/// install or release instead of immediately.
#[derive(Default)]
pub struct TrapSlot {
    active: Option<KeyListener>,
    retired: Option<KeyListener>,
}

impl TrapSlot {
    #[must_use]
    pub const fn is_installed(&self) -> bool {
        self.active.is_some()
    }

    /// Capture the focusable elements of `container` and start trapping.
    pub fn install(&mut self, document: &Document, container: &Element, selector: &str) {
        self.release(document);

        let trap = FocusTrap::new(focusables(container, selector));
        log::debug!("focus trap installed over {} elements", trap.len());
        let listener = KeyListener::new(move |event: KeyboardEvent| {
            let active = crate::dom::document()
                .and_then(|doc| doc.active_element())
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            let target = crate::app::with_panel(|panel| {
                panel.handle_trap_key(&trap, &event.key(), event.shift_key(), active.as_ref())
            })
            .flatten();
            if let Some(target) = target {
                event.prevent_default();
                let _ = target.focus();
            }
        });

        if let Err(err) =
            document.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        {
            log::error!(
                "focus trap not installed: {}",
                crate::dom::js_error_message(&err)
            );
            return;
        }
        self.active = Some(listener);
    }

    pub fn release(&mut self, document: &Document) {
        let Some(listener) = self.active.take() else {
            return;
        };
        let _ = document
            .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        self.retired = Some(listener);
    }
}

fn focusables(container: &Element, selector: &str) -> Vec<HtmlElement> {
    crate::dom::query_all(container, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}
