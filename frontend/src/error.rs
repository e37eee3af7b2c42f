use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Server error: {status} - {detail}")]
    Status { status: u16, detail: String },
    #[error("Failed to parse response: {0}")]
    Decode(gloo_net::Error),
    #[error("Failed to build request body: {0}")]
    Form(String),
}

impl PredictError {
    pub fn form(value: JsValue) -> Self {
        PredictError::Form(format!("{:?}", value))
    }
}
