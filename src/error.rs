//! Error Types

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("local storage is unavailable")]
    StorageUnavailable,

    #[error("storage access failed: {0}")]
    Storage(String),

    #[error("stored color history is malformed: {0}")]
    MalformedHistory(#[from] serde_json::Error),

    #[error("page element is not mounted")]
    PageNotMounted,

    #[error("image capture failed: {0}")]
    Capture(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Render a thrown JS value as text
pub fn js_error(value: JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
