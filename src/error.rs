use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures the audio layer reports to the page. None of them are retried.
#[derive(Debug, Error)]
pub enum AudioError {
    /// The browser refused to create an `AudioContext`.
    #[error("audio context unavailable: {0}")]
    ContextUnavailable(String),
    /// A node in the fixed graph could not be created.
    #[error("{node} creation failed: {reason}")]
    NodeCreation { node: &'static str, reason: String },
    /// A user-supplied sample could not be read or decoded.
    #[error("could not decode '{file}': {reason}")]
    DecodeFailed { file: String, reason: String },
}

impl AudioError {
    pub fn node(node: &'static str, err: JsValue) -> Self {
        AudioError::NodeCreation {
            node,
            reason: format!("{:?}", err),
        }
    }

    pub fn decode(file: &str, err: JsValue) -> Self {
        AudioError::DecodeFailed {
            file: file.to_string(),
            reason: format!("{:?}", err),
        }
    }
}
