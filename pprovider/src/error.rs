//! Gateway error codes and the single tagged error value.
//!
//! ```rust
//! use pprovider::{ErrorCode, GatewayError};
//!
//! let auth = GatewayError::authentication("Invalid API key");
//! assert!(!auth.retryable);
//! assert_eq!(auth.code.as_str(), "AUTH_ERROR");
//!
//! let limited = GatewayError::rate_limited("Rate limit exceeded");
//! assert!(limited.retryable);
//! assert_eq!(limited.code, ErrorCode::RateLimit);
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Closed set of machine-readable failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigError,
    AuthError,
    RateLimit,
    ServerError,
    ApiError,
    AiError,
    ParseError,
    InvalidInput,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConfigError => "CONFIG_ERROR",
            Self::AuthError => "AUTH_ERROR",
            Self::RateLimit => "RATE_LIMIT",
            Self::ServerError => "SERVER_ERROR",
            Self::ApiError => "API_ERROR",
            Self::AiError => "AI_ERROR",
            Self::ParseError => "PARSE_ERROR",
            Self::InvalidInput => "INVALID_INPUT",
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type ErrorCause = Arc<dyn Error + Send + Sync + 'static>;

#[derive(Debug, Clone)]
pub struct GatewayError {
    pub code: ErrorCode,
    pub message: String,
    pub retryable: bool,
    cause: Option<ErrorCause>,
}

impl GatewayError {
    pub fn new(code: ErrorCode, message: impl Into<String>, retryable: bool) -> Self {
        Self {
            code,
            message: message.into(),
            retryable,
            cause: None,
        }
    }

    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message, false)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthError, message, false)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RateLimit, message, true)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServerError, message, true)
    }

    /// Unexpected non-200 status; retryable only for 5xx.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiError, message, status >= 500)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AiError, message, true)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ParseError, message, false)
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message, false)
    }

    /// Terminal failure for a retry wait interrupted by the caller.
    pub fn interrupted<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::new(ErrorCode::AiError, "Operation interrupted", false).with_cause(cause)
    }

    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Sanitized text safe to show to end users.
    pub fn user_message(&self) -> &'static str {
        if self.retryable {
            "Unable to process your request. Please try again."
        } else {
            "Service temporarily unavailable. Please try again later."
        }
    }
}

impl PartialEq for GatewayError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.message == other.message && self.retryable == other.retryable
    }
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl Error for GatewayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn Error + 'static))
    }
}
