//! Error types for building and executing requests.

use thiserror::Error;

/// Errors produced by the request layer
#[derive(Debug, Error)]
pub enum RequestError {
    /// The builder was handed unusable input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Network-level failure reaching the service (DNS, refused, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// Status code returned by the service
        status: u16,
        /// Raw response body, for caller inspection
        body: String,
    },

    /// The response body was not valid JSON
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl RequestError {
    /// HTTP status code, when the service responded with one
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::HttpStatus { status, .. } => Some(*status),
            RequestError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
