//! Error types for the identification client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Identification client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Service answered with an error status
    #[error("Identification service error ({status}): {message}")]
    Service {
        /// HTTP status code
        status: u16,
        /// Error message from the service
        message: String,
    },

    /// All retry attempts exhausted
    #[error("All {attempts} attempts failed: {last_error}")]
    RetriesExhausted {
        /// Number of attempts made
        attempts: u32,
        /// Last error message
        last_error: String,
    },
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a service response error
    pub fn service(status: u16, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }

    /// Check if a retry could plausibly succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(e) => {
                // Retry on connection errors and timeouts
                e.is_connect() || e.is_timeout()
            }
            Self::Service { status, .. } => {
                // Retry on 5xx errors and 429 (rate limited)
                *status >= 500 || *status == 429
            }
            Self::Config(_) | Self::Json(_) | Self::RetriesExhausted { .. } => false,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Service { status, .. } if (400..500).contains(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        assert!(ApiError::service(500, "boom").is_retryable());
        assert!(ApiError::service(503, "unavailable").is_retryable());
        assert!(ApiError::service(429, "slow down").is_retryable());
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        assert!(!ApiError::service(400, "bad request").is_retryable());
        assert!(!ApiError::service(401, "no key").is_retryable());
        assert!(ApiError::service(404, "gone").is_client_error());
    }

    #[test]
    fn test_config_errors_are_not_retryable() {
        assert!(!ApiError::config("bad url").is_retryable());
    }

    #[test]
    fn test_service_error_display() {
        let err = ApiError::service(502, "upstream model unavailable");
        assert_eq!(
            err.to_string(),
            "Identification service error (502): upstream model unavailable"
        );
    }
}
