//! Error types for credential handling

/// Errors that can occur while building credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// API key was empty
    #[error("Missing API 'key'")]
    MissingKey,

    /// API secret was empty
    #[error("Missing API 'secret'")]
    MissingSecret,

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Credentials cannot be carried in an HTTP header
    #[error("Invalid credentials: {0}")]
    InvalidHeader(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;
