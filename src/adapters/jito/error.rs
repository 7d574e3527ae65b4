//! Jito Error Types
//!
//! Error handling for Block Engine operations.

use thiserror::Error;

use crate::ports::relay::RelayError;

/// Errors that can occur talking to the Block Engine
#[derive(Error, Debug, Clone)]
pub enum JitoError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// Block Engine API error
    #[error("Block Engine error: {message} (code: {code})")]
    ApiError { code: i32, message: String },

    /// Invalid bundle (empty, too large)
    #[error("Invalid bundle: {0}")]
    InvalidBundle(String),

    /// Signing a bundled transaction failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Network/connection error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Bundle status check failed
    #[error("Status check failed: {0}")]
    StatusCheckFailed(String),
}

impl JitoError {
    /// Check if error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            JitoError::HttpError(_)
                | JitoError::Timeout
                | JitoError::NetworkError(_)
                | JitoError::RateLimited
        )
    }
}

impl From<reqwest::Error> for JitoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            JitoError::Timeout
        } else if err.is_connect() {
            JitoError::NetworkError(err.to_string())
        } else {
            JitoError::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for JitoError {
    fn from(err: serde_json::Error) -> Self {
        JitoError::SerializationError(err.to_string())
    }
}

/// Convert JitoError into the relay port error the accumulator sees
impl From<JitoError> for RelayError {
    fn from(err: JitoError) -> Self {
        match err {
            JitoError::InvalidBundle(msg) => RelayError::Rejected(msg),
            JitoError::ApiError { message, .. } => RelayError::Rejected(message),
            JitoError::SigningFailed(msg) => RelayError::Signing(msg),
            JitoError::RateLimited => RelayError::RateLimited,
            JitoError::Timeout => RelayError::Timeout,
            other => RelayError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(JitoError::Timeout.is_retryable());
        assert!(JitoError::RateLimited.is_retryable());
        assert!(JitoError::NetworkError("test".into()).is_retryable());

        assert!(!JitoError::InvalidBundle("test".into()).is_retryable());
        assert!(!JitoError::SigningFailed("test".into()).is_retryable());
    }

    #[test]
    fn test_error_display() {
        let err = JitoError::ApiError {
            code: -32000,
            message: "Bundle simulation failed".to_string(),
        };
        assert!(err.to_string().contains("-32000"));
        assert!(err.to_string().contains("Bundle simulation failed"));
    }

    #[test]
    fn test_relay_error_mapping() {
        let err: RelayError = JitoError::InvalidBundle("empty".into()).into();
        assert!(matches!(err, RelayError::Rejected(_)));

        let err: RelayError = JitoError::RateLimited.into();
        assert!(matches!(err, RelayError::RateLimited));

        let err: RelayError = JitoError::SigningFailed("missing key".into()).into();
        assert!(matches!(err, RelayError::Signing(_)));

        let err: RelayError = JitoError::NetworkError("refused".into()).into();
        assert!(matches!(err, RelayError::Transport(_)));
    }
}
