//! Error types for REST API operations

use hitbtc_auth::AuthError;
use hitbtc_types::{ApiErrorKind, WriteOperation};
use std::fmt;

/// Errors that can occur during REST API operations
///
/// This is the base error of the library: every public call returns
/// `Result<_, RestError>`.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Credentials were rejected before the client was built
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A write operation was called without all of its required keys
    #[error("Missing required parameter(s) {missing:?} for {operation}")]
    ParameterRequired {
        /// Operation that was refused
        operation: WriteOperation,
        /// Required keys absent from the supplied parameters
        missing: Vec<&'static str>,
    },

    /// API returned a non-200 status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A 200 response whose body is not JSON
    #[error("Decode error: {0}")]
    Decode(String),

    /// Base URI could not be parsed or used as a base
    #[error("Invalid base URI: {0}")]
    InvalidBaseUri(String),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Path segment that cannot be sent as its own component
    #[error("Invalid path segment: {0:?}")]
    InvalidPathSegment(String),
}

impl RestError {
    /// The API error, if this is one
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// The error kind of an API error
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        self.as_api().map(|e| e.kind)
    }

    /// Check if the request was refused before reaching the network
    pub fn is_pre_flight(&self) -> bool {
        matches!(
            self,
            Self::ParameterRequired { .. }
                | Self::Auth(_)
                | Self::InvalidBaseUri(_)
                | Self::InvalidParameter(_)
                | Self::InvalidPathSegment(_)
        )
    }

    /// Check if this error indicates rate limiting
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.api_kind(), Some(kind) if kind.is_rate_limit())
    }
}

/// Error response from the HitBTC API
///
/// Text form is `"<status> <message>"`, followed by `" (<description>)"`
/// when the exchange supplied a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Kind derived from the status code
    pub kind: ApiErrorKind,
    /// HTTP status code
    pub status: u16,
    /// Error message (reason phrase unless the body carried one)
    pub message: String,
    /// Optional longer description, empty when absent
    pub description: String,
}

impl ApiError {
    /// Build an error for `status`, classifying it through the status table
    pub fn new(status: u16, message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::from_status(status),
            status,
            message: message.into(),
            description: description.into(),
        }
    }

    /// Description wrapped in parentheses, or empty
    pub fn rendered_description(&self) -> String {
        if self.description.is_empty() {
            String::new()
        } else {
            format!("({})", self.description)
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.message)?;
        if !self.description.is_empty() {
            write!(f, " {}", self.rendered_description())?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_with_description() {
        let err = ApiError::new(404, "m", "d");
        assert_eq!(err.kind, ApiErrorKind::NotFound);
        assert_eq!(err.rendered_description(), "(d)");
        assert_eq!(err.to_string(), "404 m (d)");
    }

    #[test]
    fn test_api_error_display_without_description() {
        let err = ApiError::new(418, "I'm a teapot", "");
        assert_eq!(err.kind, ApiErrorKind::Generic);
        assert_eq!(err.rendered_description(), "");
        assert_eq!(err.to_string(), "418 I'm a teapot");
    }

    #[test]
    fn test_parameter_required_display() {
        let err = RestError::ParameterRequired {
            operation: WriteOperation::Withdraw,
            missing: vec!["address"],
        };
        assert!(err.is_pre_flight());
        assert_eq!(
            err.to_string(),
            "Missing required parameter(s) [\"address\"] for withdraw"
        );
    }

    #[test]
    fn test_rate_limited() {
        let err = RestError::from(ApiError::new(429, "Too Many Requests", ""));
        assert!(err.is_rate_limited());
        assert!(!err.is_pre_flight());
        assert_eq!(err.api_kind(), Some(ApiErrorKind::RateLimitExceeded));
    }

    #[test]
    fn test_auth_error_is_transparent() {
        let err = RestError::from(AuthError::MissingKey);
        assert_eq!(err.to_string(), "Missing API 'key'");
    }
}
