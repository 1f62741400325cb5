//! Remote Text Fetch
//!
//! One GET per call, body read as text. Non-2xx responses are errors so an
//! HTML error page is never rendered as markdown.

use thiserror::Error;
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, Response};

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("no window")]
    NoWindow,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("unreadable body: {0}")]
    Body(String),
}

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// GET `url` and return the body text.
///
/// Aborting `signal` rejects the request with `FetchError::Network`.
pub async fn fetch_text(url: &str, signal: Option<&AbortSignal>) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_signal(signal);
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| FetchError::Network(describe(e)))?;

    debug!(url, "fetching");
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network(describe(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| FetchError::Body(describe(e)))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = response.text().map_err(|e| FetchError::Body(describe(e)))?;
    let text = JsFuture::from(text)
        .await
        .map_err(|e| FetchError::Body(describe(e)))?;
    text.as_string()
        .ok_or_else(|| FetchError::Body("response body is not text".to_string()))
}
