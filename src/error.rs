//! Error Types
//!
//! Failures of the task service round-trips and of the tree walk.

use wasm_bindgen::{JsCast, JsValue};

use crate::models::TaskId;

/// Failure talking to the task service
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("service responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode service response: {0}")]
    Decode(String),
    #[error("invalid input: {0}")]
    Validation(String),
}

impl ServiceError {
    /// Wrap a rejected `fetch` promise or a failed JS call
    pub fn transport(value: JsValue) -> Self {
        ServiceError::Transport(js_message(&value))
    }

    pub fn decode(err: impl ToString) -> Self {
        ServiceError::Decode(err.to_string())
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ServiceError::Transport(_))
    }

    /// Text shown in the error toast.
    ///
    /// Status codes are not distinguished: anything the server rejected gets
    /// the operation's own failure text.
    pub fn user_message(&self, failure: &str) -> String {
        match self {
            ServiceError::Transport(_) => "Error connecting to server".to_string(),
            ServiceError::Validation(reason) => format!("{failure}: {reason}"),
            ServiceError::Status { .. } | ServiceError::Decode(_) => failure.to_string(),
        }
    }
}

/// Data-integrity failure found while walking the tree
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("task {0} is its own ancestor")]
    Cycle(TaskId),
}

/// Best-effort readable text for a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
