//! `document.cookie` backed preference jar.

use chrono::{DateTime, Utc};
use skynium_a11y::{Cookie, CookieJar, find_cookie};
use wasm_bindgen::JsValue;
use web_sys::HtmlDocument;

use crate::dom::{js_error_message, now};

/// Cookie jar over the page's `document.cookie`, with `encodeURIComponent` values.
pub struct DocumentCookies {
    document: HtmlDocument,
}

impl DocumentCookies {
    #[must_use]
    pub const fn new(document: HtmlDocument) -> Self {
        Self { document }
    }
}

impl CookieJar for DocumentCookies {
    fn get(&self, name: &str) -> Result<Option<String>, String> {
        let header = self
            .document
            .cookie()
            .map_err(|err| js_error_message(&err))?;
        let Some(raw) = find_cookie(&header, name) else {
            return Ok(None);
        };
        js_sys::decode_uri_component(raw)
            .map(|decoded| Some(String::from(decoded)))
            .map_err(|err| js_error_message(&JsValue::from(err)))
    }

    fn set(&mut self, cookie: Cookie) {
        let assignment =
            cookie.to_assignment(|value| String::from(js_sys::encode_uri_component(value)));
        if let Err(err) = self.document.set_cookie(&assignment) {
            log::error!("could not write cookie {}: {}", cookie.name, js_error_message(&err));
        }
    }

    fn now(&self) -> DateTime<Utc> {
        now()
    }
}
