//! Failure taxonomy for calls to the booking API.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// Request never got an HTTP answer (offline, DNS, CORS, timeout)
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx answer; `message` is the envelope's `error`/`message` if it had one
    #[error("HTTP {status}{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    /// 2xx answer with `success: false`
    #[error("request rejected{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Rejected { message: Option<String> },

    /// Body was not the JSON shape we expected
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a user-facing notification: the server's own message when it
    /// sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(m), ..
            }
            | ApiError::Rejected { message: Some(m) } => m.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
