//! API endpoint implementations

pub mod market;
pub mod trading;
pub mod history;
pub mod account;

pub use market::MarketEndpoints;
pub use trading::TradingEndpoints;
pub use history::HistoryEndpoints;
pub use account::AccountEndpoints;
