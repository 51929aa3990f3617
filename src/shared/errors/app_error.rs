use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "desktop", derive(specta::Type))]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Upstream error (HTTP {status}): {message}")]
    UpstreamError { status: u16, message: String },

    #[error("Stale response: {0}")]
    StaleResponse(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::NetworkUnavailable("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::NetworkUnavailable("Failed to connect to external service".to_string())
        } else if let Some(status) = err.status() {
            AppError::UpstreamError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else if err.is_decode() {
            AppError::InvalidResponse(err.to_string())
        } else {
            AppError::NetworkUnavailable(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl AppError {
    /// Failures worth a second attempt: the network dropped, or the upstream
    /// answered with a status that usually clears up on its own.
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::NetworkUnavailable(_) => true,
            AppError::UpstreamError { status, .. } => {
                matches!(status, 408 | 425 | 429) || (500..=599).contains(status)
            }
            _ => false,
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
