//! Error types for the Surge client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Surge client
///
/// A remote-reported FAILED job is not an error: it comes back as a
/// `Job` in the Failed state carrying `error_detail`. Likewise a client
/// that stops watching returns a TimedOut job. This enum covers only
/// failures of the client machinery itself.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client misconfigured (missing credential or endpoint id)
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed at the transport level
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse a response body
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Request rejected before transmission
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status >= 500)
    }

    /// Check if this error is retryable without idempotency concerns
    ///
    /// Config and InvalidRequest errors will fail the same way again;
    /// transport and 5xx errors may not. Submission retries are still a
    /// caller decision since a resend can create a duplicate job.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_)) || self.is_server_error()
    }
}
