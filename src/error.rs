use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("unexpected element type for {0}")]
    WrongElementType(String),

    #[error("2d canvas context unavailable")]
    NoCanvasContext,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<JsValue> for PortfolioError {
    fn from(value: JsValue) -> Self {
        // DOMException and friends stringify to "{}"; prefer their message.
        let text = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .and_then(|e| e.message().as_string())
            })
            .or_else(|| {
                js_sys::JSON::stringify(&value)
                    .ok()
                    .and_then(|s| s.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        PortfolioError::Js(text)
    }
}

impl From<PortfolioError> for JsValue {
    fn from(err: PortfolioError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
