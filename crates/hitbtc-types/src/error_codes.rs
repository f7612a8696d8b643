//! HitBTC API error kinds keyed by HTTP status code
//!
//! Every non-200 response is classified into exactly one [`ApiErrorKind`].
//! The mapping is a fixed table; codes outside it fall back to
//! [`ApiErrorKind::Generic`].

use std::fmt;

/// Category of a failed API response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// 4xx - the request itself was rejected
    Client,
    /// 5xx - the exchange failed to serve a valid request
    Server,
    /// Anything else outside 200
    Unknown,
}

/// Error kind derived from the HTTP status of a failed response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400 Bad Request
    InvalidRequest,
    /// 401 Unauthorized
    Authentication,
    /// 402 Payment Required, used by HitBTC for missing 2FA
    TwoFactorRequired,
    /// 403 Forbidden, key lacks the scope for this call
    InvalidScope,
    /// 404 Not Found
    NotFound,
    /// 422 Unprocessable Entity
    Validation,
    /// 429 Too Many Requests
    RateLimitExceeded,
    /// 500 Internal Server Error
    InternalServer,
    /// 503 Service Unavailable
    ServiceUnavailable,
    /// 504 Gateway Timeout
    GatewayTimeout,
    /// Any status not listed above
    Generic,
}

/// Known status codes and the kind each maps to
pub const STATUS_KINDS: &[(u16, ApiErrorKind)] = &[
    (400, ApiErrorKind::InvalidRequest),
    (401, ApiErrorKind::Authentication),
    (402, ApiErrorKind::TwoFactorRequired),
    (403, ApiErrorKind::InvalidScope),
    (404, ApiErrorKind::NotFound),
    (422, ApiErrorKind::Validation),
    (429, ApiErrorKind::RateLimitExceeded),
    (500, ApiErrorKind::InternalServer),
    (503, ApiErrorKind::ServiceUnavailable),
    (504, ApiErrorKind::GatewayTimeout),
];

impl ApiErrorKind {
    /// Look up the kind for an HTTP status code
    pub fn from_status(status: u16) -> Self {
        STATUS_KINDS
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, kind)| *kind)
            .unwrap_or(Self::Generic)
    }

    /// The status code this kind is keyed on, `None` for [`ApiErrorKind::Generic`]
    pub fn status(&self) -> Option<u16> {
        STATUS_KINDS
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(code, _)| *code)
    }

    /// Short name used in log fields and error text
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid request",
            Self::Authentication => "authentication",
            Self::TwoFactorRequired => "two-factor required",
            Self::InvalidScope => "invalid scope",
            Self::NotFound => "not found",
            Self::Validation => "validation",
            Self::RateLimitExceeded => "rate limit exceeded",
            Self::InternalServer => "internal server",
            Self::ServiceUnavailable => "service unavailable",
            Self::GatewayTimeout => "gateway timeout",
            Self::Generic => "api",
        }
    }

    /// Coarse category of this kind
    pub fn category(&self) -> ErrorCategory {
        match self.status() {
            Some(400..=499) => ErrorCategory::Client,
            Some(500..=599) => ErrorCategory::Server,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Check if the credentials or their permissions were rejected
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Authentication | Self::TwoFactorRequired | Self::InvalidScope
        )
    }

    /// Check if this is a rate limit rejection
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Self::RateLimitExceeded)
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
