//! Page-lifetime panel instance and start-up.

use std::cell::RefCell;

use once_cell::unsync::OnceCell;
use skynium_a11y::{Panel, PanelConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlDocument;

use crate::cookies::DocumentCookies;
use crate::dom::{self, js_error_message};
use crate::surface::WebSurface;
use crate::wire::wire_controls;

pub type WebPanel = Panel<WebSurface, DocumentCookies>;

/// Global the site may define before loading the module to override ids or timings.
pub const CONFIG_GLOBAL: &str = "skyniumA11yConfig";

#[derive(Debug, thiserror::Error)]
pub enum BootError {
    #[error("document unavailable")]
    NoDocument,
    #[error("document is not an HTML document")]
    NotHtml,
    #[error("accessibility panel already initialized")]
    AlreadyBooted,
}

thread_local! {
    static PANEL: OnceCell<RefCell<WebPanel>> = const { OnceCell::new() };
}

/// Run `f` against the page's panel.
///
/// Returns `None` before [`boot`] has run, or if the panel is already borrowed
/// further up the stack.
pub fn with_panel<R>(f: impl FnOnce(&mut WebPanel) -> R) -> Option<R> {
    PANEL.with(|slot| {
        let cell = slot.get()?;
        let Ok(mut panel) = cell.try_borrow_mut() else {
            log::warn!("accessibility panel busy, event dropped");
            return None;
        };
        Some(f(&mut panel))
    })
}

#[must_use]
pub fn is_booted() -> bool {
    PANEL.with(|slot| slot.get().is_some())
}

/// Read the optional configuration override from `window.skyniumA11yConfig`.
///
/// A missing global yields the defaults; a malformed one is logged and ignored.
#[must_use]
pub fn read_config() -> PanelConfig {
    let Some(win) = dom::window() else {
        return PanelConfig::default();
    };
    let raw = match js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(raw) if !raw.is_undefined() && !raw.is_null() => raw,
        _ => return PanelConfig::default(),
    };
    serde_wasm_bindgen::from_value(raw).unwrap_or_else(|err| {
        log::warn!("ignoring invalid {CONFIG_GLOBAL}: {err}");
        PanelConfig::default()
    })
}

/// Load preferences, paint them and wire every control on the page.
///
/// # Errors
/// Returns an error when there is no HTML document or the panel was already booted.
pub fn boot(config: PanelConfig) -> anyhow::Result<()> {
    if is_booted() {
        return Err(BootError::AlreadyBooted.into());
    }
    let document = dom::document().ok_or(BootError::NoDocument)?;
    let html_document = document
        .clone()
        .dyn_into::<HtmlDocument>()
        .map_err(|_| BootError::NotHtml)?;

    let mut panel = Panel::new(
        WebSurface::new(document.clone(), config.clone()),
        DocumentCookies::new(html_document),
        config.clone(),
    );
    panel.init();

    PANEL
        .with(|slot| slot.set(RefCell::new(panel)))
        .map_err(|_| BootError::AlreadyBooted)?;
    wire_controls(&document, &config);
    log::info!("accessibility panel initialized");
    Ok(())
}

/// Boot now if the DOM is parsed, otherwise on `DOMContentLoaded`.
pub fn run_when_ready(config: PanelConfig) {
    let Some(document) = dom::document() else {
        dom::console_error("accessibility panel: no document");
        return;
    };
    let state = js_sys::Reflect::get(&document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string());
    if state.as_deref() != Some("loading") {
        report(boot(config));
        return;
    }
    let on_ready = Closure::once(move || report(boot(config)));
    if let Err(err) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        dom::console_error(&format!(
            "accessibility panel: {}",
            js_error_message(&err)
        ));
        return;
    }
    on_ready.forget();
}

fn report(result: anyhow::Result<()>) {
    if let Err(err) = result {
        log::error!("accessibility panel failed to start: {err:#}");
    }
}
