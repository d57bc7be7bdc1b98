#![cfg(target_arch = "wasm32")]

use skynium_a11y::{Contrast, Mode, Panel, PanelConfig, Scalar};
use skynium_web::cookies::DocumentCookies;
use skynium_web::surface::WebSurface;
use skynium_web::{app, dom};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{HtmlDocument, HtmlElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

const MARKUP: &str = r#"
<button id="accessibility-button" aria-expanded="false">A11y</button>
<span id="active-modes-count"></span>
<div id="accessibility-panel">
  <button id="close-panel-btn">Close</button>
  <div class="accessibility-option" data-mode="dyslexia-font" role="switch" tabindex="0">
    <span class="toggle-switch"></span>
  </div>
  <div class="accessibility-option" data-mode="monochrome" role="switch" tabindex="0">
    <span class="toggle-switch"></span>
  </div>
  <input id="font-size-slider" type="range" min="80" max="200" value="100">
  <span id="font-size-value"></span>
  <input id="line-height-slider" type="range" min="1" max="3" step="0.1" value="1.6">
  <span id="line-height-value"></span>
  <button class="align-btn" data-align="left">L</button>
  <button class="align-btn" data-align="center">C</button>
  <button class="contrast-btn" data-contrast="normal">N</button>
  <button class="contrast-btn" data-contrast="dark">D</button>
  <button class="contrast-btn" data-contrast="high">H</button>
  <button id="reset-accessibility-btn">Reset</button>
</div>
"#;

const RESET_BUTTON: &str = r#"<button id="reset-accessibility-btn">"#;

fn mount() -> web_sys::Document {
    mount_with("")
}

/// Mount the panel with `extra` controls placed just before the reset button.
fn mount_with(extra: &str) -> web_sys::Document {
    let doc = dom::document().expect("document");
    let body = doc.body().expect("body");
    body.set_inner_html(&MARKUP.replace(RESET_BUTTON, &format!("{extra}{RESET_BUTTON}")));
    doc
}

fn local_panel(cookie_name: &str) -> Panel<WebSurface, DocumentCookies> {
    local_panel_with(cookie_name, "")
}

fn local_panel_with(cookie_name: &str, extra: &str) -> Panel<WebSurface, DocumentCookies> {
    let doc = mount_with(extra);
    let config = PanelConfig {
        cookie_name: cookie_name.to_string(),
        ..PanelConfig::default()
    };
    let html_doc: HtmlDocument = doc.clone().dyn_into().expect("html document");
    let mut panel = Panel::new(
        WebSurface::new(doc, config.clone()),
        DocumentCookies::new(html_doc),
        config,
    );
    panel.init();
    panel
}

fn body_has(class: &str) -> bool {
    dom::document()
        .and_then(|doc| doc.body())
        .is_some_and(|body| body.class_list().contains(class))
}

fn body_style(property: &str) -> String {
    dom::document()
        .and_then(|doc| doc.body())
        .and_then(|body| body.style().get_property_value(property).ok())
        .unwrap_or_default()
}

fn element(id: &str) -> HtmlElement {
    dom::html_element_by_id(&dom::document().expect("document"), id).expect(id)
}

fn cookie_header() -> String {
    dom::document()
        .and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default()
}

fn key(name: &str, shift: bool) -> KeyboardEvent {
    let init = KeyboardEventInit::new();
    init.set_key(name);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event")
}

#[wasm_bindgen_test]
fn init_paints_defaults_and_syncs_controls() {
    let _panel = local_panel("skynium_test_defaults");
    let root = dom::document()
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .expect("html element");
    assert_eq!(root.style().get_property_value("font-size").unwrap(), "100%");
    assert_eq!(element("active-modes-count").text_content().unwrap(), "None");
    assert_eq!(element("font-size-value").text_content().unwrap(), "100%");
    assert_eq!(element("line-height-value").text_content().unwrap(), "1.6");
    let left = dom::query_all(&dom::document().unwrap(), ".align-btn[data-align=\"left\"]");
    assert_eq!(left[0].get_attribute("aria-checked").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
fn toggle_sets_aria_and_writes_cookie() {
    let mut panel = local_panel("skynium_test_toggle");
    panel.toggle(Mode::DyslexiaFont);

    assert!(body_has("dyslexia-font"));
    let option = dom::query_all(
        &dom::document().unwrap(),
        ".accessibility-option[data-mode=\"dyslexia-font\"]",
    );
    assert_eq!(option[0].get_attribute("aria-checked").as_deref(), Some("true"));
    let switch = option[0].query_selector(".toggle-switch").unwrap().unwrap();
    assert!(switch.class_list().contains("active"));
    assert!(cookie_header().contains("skynium_test_toggle=%7B"));

    panel.toggle(Mode::DyslexiaFont);
    assert!(!body_has("dyslexia-font"));
    panel.reset();
    assert!(!cookie_header().contains("skynium_test_toggle="));
}

#[wasm_bindgen_test]
fn contrast_switch_keeps_one_class() {
    let mut panel = local_panel("skynium_test_contrast");
    panel.choose_contrast(Contrast::Dark);
    panel.choose_contrast(Contrast::High);
    assert!(body_has("high-contrast"));
    assert!(!body_has("dark-mode"));
    panel.choose_contrast(Contrast::Normal);
    assert!(!body_has("high-contrast"));
    panel.reset();
}

#[wasm_bindgen_test]
fn slider_without_value_label_still_applies() {
    let mut panel = local_panel_with(
        "skynium_test_unlabelled",
        r#"<input id="letter-spacing-slider" type="range" min="-1" max="5" step="0.5" value="0">"#,
    );
    assert!(dom::document().unwrap().get_element_by_id("letter-spacing-value").is_none());

    assert_eq!(panel.slider_input(Scalar::LetterSpacing, "2"), Some(2.0));
    assert_eq!(body_style("letter-spacing"), "2px");
    assert_eq!(
        element("letter-spacing-slider").get_attribute("aria-valuenow").as_deref(),
        Some("2")
    );
    panel.slider_commit(Scalar::LetterSpacing);
    assert!(cookie_header().contains("skynium_test_unlabelled="));
    panel.reset();
}

#[wasm_bindgen_test]
fn malformed_config_global_falls_back_to_defaults() {
    let win: JsValue = dom::window().expect("window").into();
    let key = JsValue::from_str(app::CONFIG_GLOBAL);

    assert_eq!(app::read_config(), PanelConfig::default());

    js_sys::Reflect::set(&win, &key, &JsValue::from(42)).expect("set global");
    assert_eq!(app::read_config(), PanelConfig::default());

    let overrides = js_sys::Object::new();
    js_sys::Reflect::set(&overrides, &"panel_id".into(), &"a11y-panel".into()).expect("set field");
    js_sys::Reflect::set(&win, &key, &overrides).expect("set global");
    let config = app::read_config();
    assert_eq!(config.panel_id, "a11y-panel");
    assert_eq!(config.close_button_id, PanelConfig::default().close_button_id);

    js_sys::Reflect::delete_property(&win.unchecked_into(), &key).expect("delete global");
}

#[wasm_bindgen_test]
async fn announcement_is_removed_after_its_lifetime() {
    let mut panel = local_panel("skynium_test_announce");
    panel.slider_input(Scalar::FontSize, "120");
    panel.toggle(Mode::Monochrome);
    let live = || {
        dom::query_all(&dom::document().unwrap(), "[role=\"status\"][aria-live=\"polite\"]").len()
    };
    assert_eq!(live(), 1);
    dom::sleep_ms(3_200).await.expect("sleep");
    assert_eq!(live(), 0);
    panel.reset();
}

#[wasm_bindgen_test]
async fn booted_panel_traps_focus_and_closes_on_escape() {
    let doc = mount_with(concat!(
        r#"<div class="accessibility-option" data-mode="sparkles"><span class="toggle-switch"></span></div>"#,
        r#"<button class="align-btn" data-align="diagonal">D</button>"#,
        r#"<button class="contrast-btn" data-contrast="neon">N</button>"#,
    ));
    app::boot(PanelConfig::default()).expect("boot");
    assert!(app::boot(PanelConfig::default()).is_err());

    // Controls carrying values the panel does not know are left unwired.
    let classes_before = doc.body().expect("body").class_name();
    for selector in [
        ".accessibility-option[data-mode=\"sparkles\"]",
        ".align-btn[data-align=\"diagonal\"]",
        ".contrast-btn[data-contrast=\"neon\"]",
    ] {
        let control = dom::query_all(&doc, selector);
        control[0].unchecked_ref::<HtmlElement>().click();
    }
    assert_eq!(doc.body().expect("body").class_name(), classes_before);
    assert!(!cookie_header().contains("skynium_accessibility_prefs="));
    assert_eq!(body_style("text-align"), "left");

    element("accessibility-button").click();
    assert_eq!(
        element("accessibility-button").get_attribute("aria-expanded").as_deref(),
        Some("true")
    );
    assert!(element("accessibility-panel").class_list().contains("open"));
    assert_eq!(
        app::with_panel(|panel| panel.surface().trap_installed()),
        Some(true)
    );
    dom::sleep_ms(150).await.expect("sleep");
    assert_eq!(
        doc.active_element().map(|el| el.id()),
        Some("close-panel-btn".to_string())
    );

    element("reset-accessibility-btn").focus().expect("focus reset");
    doc.dispatch_event(&key("Tab", false)).expect("dispatch tab");
    assert_eq!(
        doc.active_element().map(|el| el.id()),
        Some("close-panel-btn".to_string())
    );

    doc.dispatch_event(&key("Tab", true)).expect("dispatch shift-tab");
    assert_eq!(
        doc.active_element().map(|el| el.id()),
        Some("reset-accessibility-btn".to_string())
    );

    let toggle = dom::query_all(&doc, ".accessibility-option[data-mode=\"monochrome\"]");
    toggle[0].dispatch_event(&key(" ", false)).expect("dispatch space");
    assert!(body_has("monochrome"));
    assert_eq!(element("active-modes-count").text_content().unwrap(), "1 mode");

    doc.dispatch_event(&key("Escape", false)).expect("dispatch escape");
    assert!(!element("accessibility-panel").class_list().contains("open"));
    assert_eq!(
        doc.active_element().map(|el| el.id()),
        Some("accessibility-button".to_string())
    );
    assert_eq!(
        app::with_panel(|panel| panel.surface().trap_installed()),
        Some(false)
    );

    // Trap released: Tab from the last control no longer wraps.
    element("reset-accessibility-btn").focus().expect("focus reset");
    doc.dispatch_event(&key("Tab", false)).expect("dispatch tab");
    assert_eq!(
        doc.active_element().map(|el| el.id()),
        Some("reset-accessibility-btn".to_string())
    );

    app::with_panel(|panel| panel.reset());
}
