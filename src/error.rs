use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum MotionError {
    #[error("Browser window is not available")]
    NoWindow,

    #[error("Document is not available")]
    NoDocument,

    #[error("Missing attribute: {0}")]
    MissingAttribute(&'static str),

    #[error("Invalid counter target: {0:?}")]
    InvalidTarget(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for MotionError {
    fn from(value: JsValue) -> Self {
        MotionError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, MotionError>;
