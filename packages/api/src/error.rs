use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call against the diary API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 on an authenticated call. The stored token has already been cleared.
    #[error("session expired, please sign in again")]
    Unauthorized,
    /// Non-2xx reply, with the server's `{"error": ...}` message when it sent one.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Message suitable for an inline form error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
