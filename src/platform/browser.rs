//! Browser Implementations
//!
//! `fetch`, clipboard, `confirm()`, timers and DOM lookups via web-sys.

use async_trait::async_trait;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, HtmlDocument, HtmlTextAreaElement, Request, RequestInit, Response};

use super::{Clipboard, FieldSource, PendingTimer, Prompt, Scheduler};
use crate::api::{HttpRequest, HttpResponse, Transport};
use crate::error::{ClipboardError, TransportError};
use crate::render::OutputField;

/// Id of the `<script type="application/json">` holding the first payload
pub const BOOTSTRAP_ELEMENT_ID: &str = "bootstrap-data";

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

fn text_area(field: OutputField) -> Option<HtmlTextAreaElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(field.element_id())?
        .dyn_into::<HtmlTextAreaElement>()
        .ok()
}

/// Text of `#bootstrap-data`, if the server embedded one
pub fn embedded_payload() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(BOOTSTRAP_ELEMENT_ID)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

// ========================
// Network
// ========================

pub struct FetchTransport;

impl FetchTransport {
    async fn fetch(request: HttpRequest) -> Result<HttpResponse, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let headers = Headers::new()?;
        for (name, value) in &request.headers {
            headers.set(name, value)?;
        }
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_headers(&headers);
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&request.url, &init)?;
        let response: Response = JsFuture::from(window.fetch_with_request(&js_request))
            .await?
            .dyn_into()?;
        let status = response.status();
        // An unreadable body behaves like an unparseable one.
        let body = match response.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|text| text.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        Ok(HttpResponse { status, body })
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Self::fetch(request)
            .await
            .map_err(|e| TransportError(js_message(&e)))
    }
}

// ========================
// Clipboard
// ========================

pub struct BrowserClipboard;

#[async_trait(?Send)]
impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window().ok_or_else(|| ClipboardError::Rejected("no window".to_string()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map_err(|e| ClipboardError::Rejected(js_message(&e)))?;
        Ok(())
    }

    fn legacy_copy(&self, field: OutputField) -> Result<(), ClipboardError> {
        let area = text_area(field).ok_or(ClipboardError::MissingField(field.element_id()))?;
        area.select();
        let document = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
            .ok_or_else(|| ClipboardError::LegacyCopy("no html document".to_string()))?;
        match document.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::LegacyCopy("copy command refused".to_string())),
            Err(e) => Err(ClipboardError::LegacyCopy(js_message(&e))),
        }
    }
}

// ========================
// Prompt / Timers / Fields
// ========================

pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> PendingTimer {
        // Dropping a gloo Timeout clears it.
        PendingTimer::new(Timeout::new(delay_ms, callback))
    }
}

/// Reads the live textarea values, including unsaved edits
pub struct DomFields;

impl FieldSource for DomFields {
    fn field_text(&self, field: OutputField) -> Option<String> {
        text_area(field).map(|area| area.value())
    }
}
