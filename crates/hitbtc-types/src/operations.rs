//! State-changing operations that validate their arguments before sending

use crate::params::Params;
use std::fmt;

/// Write operations with a fixed set of required parameter keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteOperation {
    /// `POST order`
    CreateOrder,
    /// `PUT order/{clientOrderId}`
    UpdateOrder,
    /// `PATCH order/{clientOrderId}`
    CancelReplaceOrder,
    /// `POST account/crypto/withdraw`
    Withdraw,
    /// `POST account/transfer`
    TransferToTrading,
}

impl WriteOperation {
    /// Keys that must be present before the request is sent
    pub const fn required_params(&self) -> &'static [&'static str] {
        match self {
            Self::CreateOrder => &["symbol", "side", "quantity", "price"],
            Self::UpdateOrder => &["symbol", "side", "quantity", "price", "timeInForce"],
            Self::CancelReplaceOrder => &["quantity", "requestClientId"],
            Self::Withdraw => &["currency", "amount", "address"],
            Self::TransferToTrading => &["currency", "amount", "type"],
        }
    }

    /// Required keys absent from `params`
    pub fn missing_params(&self, params: &Params) -> Vec<&'static str> {
        params.missing(self.required_params())
    }

    /// Operation name as used in errors and log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateOrder => "create_order",
            Self::UpdateOrder => "update_order",
            Self::CancelReplaceOrder => "cancel_replace_order",
            Self::Withdraw => "withdraw",
            Self::TransferToTrading => "transfer_to_trading",
        }
    }
}

impl fmt::Display for WriteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
