//! Side, OrderType, TimeInForce, TransferType, and CandlePeriod enums
//!
//! Each enum renders to the exact string HitBTC expects, so values can be
//! dropped straight into a [`Params`](crate::Params).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl Side {
    /// Returns the side as used in API requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderType {
    /// Limit order
    Limit,
    /// Market order
    Market,
    /// Stop-limit order
    StopLimit,
    /// Stop-market order
    StopMarket,
}

impl OrderType {
    /// Returns the order type as used in API requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "limit",
            Self::Market => "market",
            Self::StopLimit => "stopLimit",
            Self::StopMarket => "stopMarket",
        }
    }

    /// Returns true if orders of this type carry a stop price
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::StopLimit | Self::StopMarket)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeInForce {
    /// Good till cancelled
    #[default]
    #[serde(rename = "GTC")]
    GoodTillCancelled,
    /// Immediate or cancel
    #[serde(rename = "IOC")]
    ImmediateOrCancel,
    /// Fill or kill
    #[serde(rename = "FOK")]
    FillOrKill,
    /// Cancelled at end of trading day
    #[serde(rename = "Day")]
    Day,
    /// Good till `expireTime`
    #[serde(rename = "GTD")]
    GoodTillDate,
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GoodTillCancelled => write!(f, "GTC"),
            Self::ImmediateOrCancel => write!(f, "IOC"),
            Self::FillOrKill => write!(f, "FOK"),
            Self::Day => write!(f, "Day"),
            Self::GoodTillDate => write!(f, "GTD"),
        }
    }
}

/// Direction of a transfer between the account and trading wallets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferType {
    /// Account (bank) wallet to trading wallet
    #[serde(rename = "bankToExchange")]
    BankToExchange,
    /// Trading wallet back to account (bank) wallet
    #[serde(rename = "exchangeToBank")]
    ExchangeToBank,
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BankToExchange => write!(f, "bankToExchange"),
            Self::ExchangeToBank => write!(f, "exchangeToBank"),
        }
    }
}

/// Candle period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CandlePeriod {
    /// 1 minute
    M1,
    /// 3 minutes
    M3,
    /// 5 minutes
    M5,
    /// 15 minutes
    M15,
    /// 30 minutes
    #[default]
    M30,
    /// 1 hour
    H1,
    /// 4 hours
    H4,
    /// 1 day
    D1,
    /// 7 days
    D7,
    /// 1 month
    #[serde(rename = "1M")]
    Month1,
}

impl fmt::Display for CandlePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::M1 => "M1",
            Self::M3 => "M3",
            Self::M5 => "M5",
            Self::M15 => "M15",
            Self::M30 => "M30",
            Self::H1 => "H1",
            Self::H4 => "H4",
            Self::D1 => "D1",
            Self::D7 => "D7",
            Self::Month1 => "1M",
        };
        f.write_str(s)
    }
}
