//! Core error types for the TuCash client.
//!
//! Transport-specific failures (reqwest, IO) are converted to these types by
//! the client crate so that domain code never depends on an HTTP stack.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the client.
#[derive(Error, Debug)]
pub enum Error {
    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Session storage error: {0}")]
    Session(String),

    #[error("Invalid JSON: {0}")]
    Decode(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// An HTTP failure reported by the backend, or a connection failure
/// (status `0`) when no response was received at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("HTTP {status}: {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Validation,
    Unauthenticated,
    Forbidden,
    NotFound,
    Conflict,
    Server,
    Connection,
    Other,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A failure where the server could not be reached.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(0, message)
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self.status {
            0 => ApiErrorKind::Connection,
            400 | 422 => ApiErrorKind::Validation,
            401 => ApiErrorKind::Unauthenticated,
            403 => ApiErrorKind::Forbidden,
            404 => ApiErrorKind::NotFound,
            409 => ApiErrorKind::Conflict,
            500..=599 => ApiErrorKind::Server,
            _ => ApiErrorKind::Other,
        }
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

impl Error {
    /// Returns true for failures that must end the current session.
    pub fn is_authentication(&self) -> bool {
        match self {
            Error::Unauthenticated => true,
            Error::Api(api) => api.kind() == ApiErrorKind::Unauthenticated,
            _ => false,
        }
    }

    /// Returns true for 400/422 responses and client-side validation failures.
    pub fn is_validation(&self) -> bool {
        match self {
            Error::Validation(_) => true,
            Error::Api(api) => api.kind() == ApiErrorKind::Validation,
            _ => false,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Api(api) if api.kind() == ApiErrorKind::Connection)
    }

    /// Localisable message key shown to the user instead of the raw error.
    pub fn message_key(&self) -> &'static str {
        match self {
            Error::Api(api) => match api.kind() {
                ApiErrorKind::Validation => "errors.validation",
                ApiErrorKind::Unauthenticated => "errors.unauthenticated",
                ApiErrorKind::Forbidden => "errors.forbidden",
                ApiErrorKind::NotFound => "errors.notFound",
                ApiErrorKind::Conflict => "errors.conflict",
                ApiErrorKind::Server => "errors.server",
                ApiErrorKind::Connection => "errors.connection",
                ApiErrorKind::Other => "errors.unexpected",
            },
            Error::Validation(_) => "errors.validation",
            Error::Unauthenticated => "errors.unauthenticated",
            Error::Session(_) => "errors.session",
            Error::Decode(_) | Error::InvalidConfigValue(_) | Error::Unexpected(_) => {
                "errors.unexpected"
            }
        }
    }
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Session(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_classification() {
        assert_eq!(ApiError::new(400, "").kind(), ApiErrorKind::Validation);
        assert_eq!(ApiError::new(422, "").kind(), ApiErrorKind::Validation);
        assert_eq!(ApiError::new(401, "").kind(), ApiErrorKind::Unauthenticated);
        assert_eq!(ApiError::new(404, "").kind(), ApiErrorKind::NotFound);
        assert_eq!(ApiError::new(409, "").kind(), ApiErrorKind::Conflict);
        assert_eq!(ApiError::new(503, "").kind(), ApiErrorKind::Server);
        assert_eq!(ApiError::connection("refused").kind(), ApiErrorKind::Connection);
        assert_eq!(ApiError::new(418, "").kind(), ApiErrorKind::Other);
    }

    #[test]
    fn test_message_keys() {
        let err = Error::from(ApiError::new(409, "User already exists"));
        assert_eq!(err.message_key(), "errors.conflict");
        assert!(!err.is_authentication());

        let err = Error::from(ApiError::new(401, "Invalid credentials"));
        assert!(err.is_authentication());
        assert_eq!(err.message_key(), "errors.unauthenticated");

        let err = Error::Validation(ValidationError::MissingField("name".into()));
        assert!(err.is_validation());
    }

    #[test]
    fn test_json_errors_do_not_assume_a_response() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{\"version\":1,\"val").unwrap_err();
        let err = Error::from(parse_err);
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().starts_with("Invalid JSON: "));
        assert!(!err.to_string().contains("response"));
    }
}
