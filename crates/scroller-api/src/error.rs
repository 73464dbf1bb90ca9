//! Error types for the API client

use thiserror::Error;

/// API client error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response, with the best-effort message extracted from the
    /// body (or a fixed default when the endpoint's body is not parsed).
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
