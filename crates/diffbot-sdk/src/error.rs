//! Error types for the Diffbot SDK.

use crate::config::ConfigError;
use diffbot_request::RequestError;
use thiserror::Error;

/// A call was rejected before any request was built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required option was not supplied
    #[error("missing {0}")]
    Missing(&'static str),

    /// An enumerated option has a value the service does not accept
    #[error("invalid {0}")]
    Invalid(&'static str),
}

/// SDK operation errors
#[derive(Debug, Error)]
pub enum DiffbotError {
    /// Caller supplied options that cannot form a valid request
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Transport, HTTP status or JSON parsing failure
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Client configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DiffbotError {
    /// Whether this error was raised by option validation
    pub fn is_validation(&self) -> bool {
        matches!(self, DiffbotError::Validation(_))
    }

    /// HTTP status code, when the service responded with a non-success status
    pub fn status(&self) -> Option<u16> {
        match self {
            DiffbotError::Request(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_name_the_field() {
        assert_eq!(ValidationError::Missing("url").to_string(), "missing url");
        assert_eq!(ValidationError::Invalid("format").to_string(), "invalid format");
    }

    #[test]
    fn test_validation_display_is_transparent() {
        let err = DiffbotError::from(ValidationError::Missing("name"));
        assert_eq!(err.to_string(), "missing name");
        assert!(err.is_validation());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_status_passes_through() {
        let err = DiffbotError::from(RequestError::HttpStatus {
            status: 401,
            body: "{\"error\":\"Not authorized API token.\"}".to_string(),
        });
        assert!(!err.is_validation());
        assert_eq!(err.status(), Some(401));
    }
}
