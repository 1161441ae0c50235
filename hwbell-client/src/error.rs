//! Error types for the hwbell clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to a remote API
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request failed in transit (connection refused, DNS, timeout),
    /// or the body could not be decoded
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered, but with a non-success status code
    #[error("endpoint {endpoint} returned status {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Which endpoint produced it
        endpoint: String,
    },
}

impl ClientError {
    /// Create an unexpected-status error from a status code and endpoint
    pub fn unexpected_status(status: u16, endpoint: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            endpoint: endpoint.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display() {
        let err = ClientError::unexpected_status(503, "https://example.com/api");
        assert_eq!(
            err.to_string(),
            "endpoint https://example.com/api returned status 503"
        );
    }

    #[test]
    fn test_status_class_predicates() {
        assert!(ClientError::unexpected_status(404, "x").is_client_error());
        assert!(!ClientError::unexpected_status(404, "x").is_server_error());
        assert!(ClientError::unexpected_status(500, "x").is_server_error());
        assert!(!ClientError::unexpected_status(500, "x").is_client_error());
    }
}
