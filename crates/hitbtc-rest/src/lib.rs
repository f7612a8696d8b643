//! REST API client for HitBTC cryptocurrency exchange
//!
//! This crate wraps the HitBTC REST API v2: public market data, trading,
//! order history, and account operations.
//!
//! # Features
//!
//! - **Market Data**: Currencies, symbols, tickers, trades, orderbook, candles
//! - **Trading**: Active orders, create/update/cancel/cancel-replace, fees
//! - **History**: Orders and trades
//! - **Account**: Balances, deposit addresses, withdrawals, transfers
//!
//! # Authentication
//!
//! Every request carries HTTP Basic credentials built from the API key and
//! secret. A client cannot be constructed with an empty key or secret.
//!
//! # Responses and errors
//!
//! A 200 response is returned as the decoded [`serde_json::Value`], untouched.
//! Any other status becomes [`RestError::Api`], classified by
//! [`ApiErrorKind`]. Write operations check their required parameters first
//! and fail with [`RestError::ParameterRequired`] without sending anything.
//! Nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use hitbtc_rest::{Credentials, HitbtcRestClient, Params};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let client = HitbtcRestClient::with_credentials(creds)?;
//!
//!     let book = client.get_orderbook("ETHBTC", Some(5)).await?;
//!     println!("ETHBTC book: {}", book);
//!
//!     let params = Params::new()
//!         .with("symbol", "ETHBTC")
//!         .with("side", "sell")
//!         .with("quantity", "0.063")
//!         .with("price", "0.046016");
//!     let order = client.trading().create_order(&params).await?;
//!     println!("Order: {}", order);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod response;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, HitbtcRestClient};
pub use error::{ApiError, RestError, RestResult};
pub use hitbtc_auth::{AuthError, Credentials};
pub use request::DEFAULT_BASE_URI;
pub use types::OrderRequest;

// Re-export shared types
pub use hitbtc_types::{
    ApiErrorKind, CandlePeriod, OrderType, Params, Side, TimeInForce, TransferType,
    WriteOperation,
};
