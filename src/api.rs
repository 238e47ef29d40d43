//! API Client
//!
//! JSON round trips to the state server. Every mutating endpoint answers with
//! the full state payload.

use std::rc::Rc;

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tracing::{debug, warn};

use crate::error::{ApiError, TransportError, GENERIC_FAILURE};
use crate::models::StatePayload;

pub const STATE_PATH: &str = "/api/state";
pub const TOGGLE_PATH: &str = "/api/toggle";
pub const RESET_PATH: &str = "/api/reset";
pub const DISABLE_PATH: &str = "/api/disable";

// ========================
// Wire Types
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request. Only fails when no response arrived at all.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestOptions {
    pub method: Option<Method>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestOptions {
    pub fn post(body: Option<Value>) -> Self {
        Self {
            method: Some(Method::Post),
            body,
            ..Default::default()
        }
    }
}

// ========================
// Client
// ========================

#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    base: String,
}

impl ApiClient {
    pub fn new(transport: Rc<dyn Transport>, base: impl Into<String>) -> Self {
        Self {
            transport,
            base: base.into(),
        }
    }

    /// Send a JSON request and return the parsed body.
    ///
    /// Bodies that are not JSON are read as `{}`; a failing status then
    /// reports the generic message.
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let request = HttpRequest {
            method: options.method.unwrap_or(Method::Get),
            url: format!("{}{}", self.base, path),
            headers: merge_headers(options.headers),
            body: options.body.map(|body| body.to_string()),
        };
        debug!(method = request.method.as_str(), url = %request.url, "api request");

        let response = self.transport.send(request).await?;
        let data = serde_json::from_str::<Value>(&response.body)
            .unwrap_or_else(|_| Value::Object(Map::new()));

        if !response.is_success() {
            let message = data
                .get("error")
                .and_then(error_message)
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            debug!(status = response.status, %message, "api request failed");
            return Err(ApiError::Server {
                status: response.status,
                message,
            });
        }
        Ok(data)
    }

    pub async fn fetch_state(&self) -> Result<StatePayload, ApiError> {
        self.payload(STATE_PATH, RequestOptions::default()).await
    }

    pub async fn toggle(&self, code: &str, enabled: bool) -> Result<StatePayload, ApiError> {
        let body = json!({ "code": code, "enabled": enabled });
        self.payload(TOGGLE_PATH, RequestOptions::post(Some(body))).await
    }

    pub async fn reset(&self) -> Result<StatePayload, ApiError> {
        self.payload(RESET_PATH, RequestOptions::post(None)).await
    }

    pub async fn apply_disable(&self, argument: &str) -> Result<StatePayload, ApiError> {
        let body = json!({ "argument": argument });
        self.payload(DISABLE_PATH, RequestOptions::post(Some(body))).await
    }

    async fn payload(&self, path: &str, options: RequestOptions) -> Result<StatePayload, ApiError> {
        let data = self.request(path, options).await?;
        serde_json::from_value(data).map_err(|e| {
            warn!(path, error = %e, "response is not a state payload");
            ApiError::Malformed
        })
    }
}

/// Text of a server `error` field. Scalars are stringified; empty, zero,
/// `false`, `null` and structured values count as absent.
fn error_message(value: &Value) -> Option<String> {
    match value {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// JSON content type first; caller headers override by case-insensitive name.
fn merge_headers(extra: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
    for (name, value) in extra {
        headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        headers.push((name, value));
    }
    headers
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport shared by the module tests.

    use super::*;
    use futures::channel::oneshot;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    enum Reply {
        Ready(Result<HttpResponse, TransportError>),
        Later(oneshot::Receiver<HttpResponse>),
    }

    #[derive(Default)]
    pub struct ScriptedTransport {
        replies: RefCell<VecDeque<Reply>>,
        pub sent: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        pub fn reply(&self, status: u16, body: impl Into<String>) {
            self.replies.borrow_mut().push_back(Reply::Ready(Ok(HttpResponse {
                status,
                body: body.into(),
            })));
        }

        pub fn reply_json(&self, status: u16, body: &impl serde::Serialize) {
            self.reply(status, serde_json::to_string(body).unwrap());
        }

        pub fn fail(&self, message: &str) {
            self.replies
                .borrow_mut()
                .push_back(Reply::Ready(Err(TransportError(message.to_string()))));
        }

        /// Queue a reply that resolves when the returned sender fires
        pub fn deferred(&self) -> oneshot::Sender<HttpResponse> {
            let (tx, rx) = oneshot::channel();
            self.replies.borrow_mut().push_back(Reply::Later(rx));
            tx
        }

        pub fn sent_count(&self) -> usize {
            self.sent.borrow().len()
        }

        pub fn sent_body(&self, index: usize) -> Option<Value> {
            self.sent.borrow()[index]
                .body
                .as_deref()
                .map(|body| serde_json::from_str(body).unwrap())
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.sent.borrow_mut().push(request);
            let reply = self
                .replies
                .borrow_mut()
                .pop_front()
                .expect("unexpected request");
            match reply {
                Reply::Ready(result) => result,
                Reply::Later(rx) => rx.await.map_err(|_| TransportError("dropped".to_string())),
            }
        }
    }
}
