//! Authentication credentials for HitBTC API
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::{AuthError, AuthResult};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "HITBTC_API_KEY";

/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "HITBTC_API_SECRET";

/// API credentials for authenticated requests
///
/// Both halves are guaranteed non-empty. There are no setters: a client
/// holding `Credentials` uses the same pair for its whole lifetime.
pub struct Credentials {
    /// API key (public half)
    api_key: String,
    /// API secret (zeroized on drop)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    ///
    /// # Arguments
    /// * `api_key` - Your HitBTC API key
    /// * `api_secret` - The secret issued with that key
    ///
    /// # Returns
    /// [`AuthError::MissingKey`] or [`AuthError::MissingSecret`] if either is empty
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.is_empty() {
            return Err(AuthError::MissingKey);
        }
        if api_secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        Ok(Self {
            api_key,
            api_secret: SecretString::from(api_secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `HITBTC_API_KEY` and `HITBTC_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        debug!("Loaded HitBTC credentials from environment");
        Self::new(api_key, api_secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Build the `Authorization` header value for HTTP Basic auth
    ///
    /// Returns `Basic base64(key:secret)`, wrapped so it stays redacted.
    pub fn basic_auth_header(&self) -> AuthResult<SecretString> {
        let secret = self.api_secret.expose_secret();

        if self.api_key.chars().any(char::is_control) || secret.chars().any(char::is_control) {
            return Err(AuthError::InvalidHeader(
                "key and secret must not contain control characters".to_string(),
            ));
        }

        let token = BASE64.encode(format!("{}:{}", self.api_key, secret));
        Ok(SecretString::from(format!("Basic {}", token)))
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new SecretString with same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_string()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", prefix))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
