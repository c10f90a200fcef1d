//! Domain error types
//!
//! This module defines the error hierarchy for the queue notifier.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main queue notifier error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum QueueError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Forwarding errors (outbound calls to the centralized service)
    #[error("Forward error: {0}")]
    Forward(#[from] ForwardError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Filesystem watcher errors
    #[error("Watcher error: {0}")]
    Watcher(String),

    /// HTTP listener errors
    #[error("Server error: {0}")]
    Server(String),
}

/// Forwarding errors
///
/// Errors that occur when replicating a registry change to the centralized
/// service. These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Failed to build the request or reach the remote host
    #[error("Failed to reach centralized service: {0}")]
    ConnectionFailed(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Payload could not be encoded
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Target URL could not be built from the configured host
    #[error("Invalid target: {0}")]
    InvalidTarget(String),
}

impl ForwardError {
    /// Classifies a non-success HTTP status into a client or server error
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status >= 500 {
            ForwardError::ServerError { status, message }
        } else {
            ForwardError::ClientError { status, message }
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for QueueError {
    fn from(err: std::io::Error) -> Self {
        QueueError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for QueueError {
    fn from(err: serde_json::Error) -> Self {
        QueueError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_error_display() {
        let err = QueueError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_forward_error_conversion() {
        let forward_err = ForwardError::ConnectionFailed("Network error".to_string());
        let queue_err: QueueError = forward_err.into();
        assert!(matches!(queue_err, QueueError::Forward(_)));
    }

    #[test]
    fn test_forward_error_from_status() {
        assert!(matches!(
            ForwardError::from_status(503, "unavailable"),
            ForwardError::ServerError { status: 503, .. }
        ));
        assert!(matches!(
            ForwardError::from_status(404, "missing"),
            ForwardError::ClientError { status: 404, .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let queue_err: QueueError = io_err.into();
        assert!(matches!(queue_err, QueueError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let queue_err: QueueError = json_err.into();
        assert!(matches!(queue_err, QueueError::Serialization(_)));
    }

    #[test]
    fn test_queue_error_implements_std_error() {
        let err = QueueError::Watcher("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
