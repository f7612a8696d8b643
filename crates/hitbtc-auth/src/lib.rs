//! API credentials for the HitBTC REST API
//!
//! HitBTC authenticates every request with HTTP Basic auth built from an API
//! key and its secret. This crate owns those credentials and refuses to build
//! them from empty values.
//!
//! # Example
//!
//! ```no_run
//! use hitbtc_auth::Credentials;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!     println!("Using key {:?}", creds);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
