//! Transport error type.

use thiserror::Error;

/// Errors that can occur while fetching a response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Could not reach the service.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The service answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// Any other request or body-read failure.
    #[error("HTTP request failed: {0}")]
    Http(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            TransportError::Status(status.as_u16())
        } else {
            TransportError::Http(err.to_string())
        }
    }
}
