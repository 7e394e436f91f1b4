//! Error types for diagram sharing.

use thiserror::Error;

/// Errors that can occur while sharing a diagram.
#[derive(Error, Debug)]
pub enum ShareError {
    /// Credential rejected by the document store.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Network/connectivity failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Document store answered with a non-success status.
    #[error("Share API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Shared record does not exist.
    #[error("Share not found: {0}")]
    NotFound(String),

    /// Response body did not have the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing to the clipboard failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl ShareError {
    /// Map a non-success HTTP status to an error.
    pub fn from_status(status: reqwest::StatusCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match status.as_u16() {
            401 | 403 => ShareError::Auth(message),
            404 => ShareError::NotFound(message),
            code => ShareError::Api {
                status: code,
                message,
            },
        }
    }
}

impl From<reqwest::Error> for ShareError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ShareError::Timeout(err.to_string())
        } else if err.is_connect() {
            ShareError::Network(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            ShareError::InvalidResponse(err.to_string())
        } else {
            ShareError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ShareError {
    fn from(err: serde_json::Error) -> Self {
        ShareError::Json(err.to_string())
    }
}

impl From<toml::de::Error> for ShareError {
    fn from(err: toml::de::Error) -> Self {
        ShareError::Config(err.to_string())
    }
}

/// Result type for share operations.
pub type Result<T> = std::result::Result<T, ShareError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_error_display() {
        let err = ShareError::Api {
            status: 422,
            message: "Validation Failed".to_string(),
        };
        assert_eq!(err.to_string(), "Share API error (422): Validation Failed");

        let err = ShareError::Network("connection reset".to_string());
        assert_eq!(err.to_string(), "Network error: connection reset");
    }

    #[test]
    fn test_from_status() {
        assert!(matches!(
            ShareError::from_status(StatusCode::UNAUTHORIZED, "Bad credentials"),
            ShareError::Auth(_)
        ));
        assert!(matches!(
            ShareError::from_status(StatusCode::FORBIDDEN, "rate limited"),
            ShareError::Auth(_)
        ));
        assert!(matches!(
            ShareError::from_status(StatusCode::NOT_FOUND, "gone"),
            ShareError::NotFound(_)
        ));
        assert!(matches!(
            ShareError::from_status(StatusCode::BAD_GATEWAY, ""),
            ShareError::Api { status: 502, .. }
        ));
    }

    #[test]
    fn test_json_conversion() {
        let err: ShareError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ShareError::Json(_)));
    }
}
