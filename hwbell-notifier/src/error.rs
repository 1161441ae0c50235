//! Cycle error taxonomy
//!
//! Everything a poll cycle can fail with, caught exactly once at the loop
//! boundary. None of these are fatal: the loop reports them through the chat
//! channel and the log, then sleeps and tries again.

use thiserror::Error;

use hwbell_client::ClientError;

/// Recoverable failures of a single poll cycle
#[derive(Debug, Error)]
pub enum CycleError {
    /// Fetch transport failure or non-success API answer
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The response (or a record in it) did not have the expected shape
    #[error("unexpected response shape: {0}")]
    Shape(&'static str),

    /// A homework carries a status outside the known vocabulary
    #[error("unknown homework status: {0:?}")]
    UnknownStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_display() {
        let err = CycleError::Shape("missing homeworks");
        assert_eq!(err.to_string(), "unexpected response shape: missing homeworks");
    }

    #[test]
    fn test_unknown_status_carries_value() {
        let err = CycleError::UnknownStatus("banana".to_string());
        assert!(err.to_string().contains("banana"));
    }

    #[test]
    fn test_client_error_is_transparent() {
        let err = CycleError::from(ClientError::unexpected_status(502, "https://example.com"));
        assert_eq!(err.to_string(), "endpoint https://example.com returned status 502");
    }
}
