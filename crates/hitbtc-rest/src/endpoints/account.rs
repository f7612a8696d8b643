//! Account endpoints
//!
//! Balances, deposit addresses, crypto withdrawals, and transfers between
//! the account and trading wallets.

use crate::client::HitbtcRestClient;
use crate::error::RestResult;
use hitbtc_types::{Params, TransferType, WriteOperation};
use reqwest::Method;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, instrument};

/// Account endpoints
pub struct AccountEndpoints<'a> {
    client: &'a HitbtcRestClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a HitbtcRestClient) -> Self {
        Self { client }
    }

    /// Get account wallet balance
    #[instrument(skip(self, params))]
    pub async fn get_account_balance(&self, params: &Params) -> RestResult<Value> {
        self.client
            .request(Method::GET, &["account", "balance"], params)
            .await
    }

    /// Get the current deposit address for a currency
    #[instrument(skip(self, params))]
    pub async fn get_deposit_address(&self, currency: &str, params: &Params) -> RestResult<Value> {
        self.client
            .request(Method::GET, &["account", "crypto", "address", currency], params)
            .await
    }

    /// Create a new deposit address for a currency
    #[instrument(skip(self, params))]
    pub async fn add_deposit_address(&self, currency: &str, params: &Params) -> RestResult<Value> {
        self.client
            .request(Method::POST, &["account", "crypto", "address", currency], params)
            .await
    }

    /// Withdraw crypto
    ///
    /// `params` must contain `currency`, `amount` and `address`. With
    /// `autoCommit=false` the withdrawal stays pending until
    /// [`commit_withdrawal`](Self::commit_withdrawal).
    #[instrument(skip(self, params))]
    pub async fn withdraw(&self, params: &Params) -> RestResult<Value> {
        self.client
            .write(
                WriteOperation::Withdraw,
                Method::POST,
                &["account", "crypto", "withdraw"],
                params,
            )
            .await
    }

    /// Commit a pending withdrawal
    #[instrument(skip(self, params))]
    pub async fn commit_withdrawal(
        &self,
        withdrawal_id: &str,
        params: &Params,
    ) -> RestResult<Value> {
        self.client
            .request(Method::PUT, &["account", "crypto", "withdraw", withdrawal_id], params)
            .await
    }

    /// Roll back a pending withdrawal
    #[instrument(skip(self, params))]
    pub async fn rollback_withdrawal(
        &self,
        withdrawal_id: &str,
        params: &Params,
    ) -> RestResult<Value> {
        self.client
            .request(Method::DELETE, &["account", "crypto", "withdraw", withdrawal_id], params)
            .await
    }

    /// Transfer between the account and trading wallets
    ///
    /// `params` must contain `currency`, `amount` and `type`.
    #[instrument(skip(self, params))]
    pub async fn transfer_to_trading(&self, params: &Params) -> RestResult<Value> {
        self.client
            .write(
                WriteOperation::TransferToTrading,
                Method::POST,
                &["account", "transfer"],
                params,
            )
            .await
    }

    /// Transfer with typed arguments
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g., "BTC")
    /// * `amount` - Amount to move
    /// * `direction` - [`TransferType::BankToExchange`] funds the trading wallet
    #[instrument(skip(self))]
    pub async fn transfer(
        &self,
        currency: &str,
        amount: Decimal,
        direction: TransferType,
    ) -> RestResult<Value> {
        let params = Params::new()
            .with("currency", currency)
            .with("amount", amount)
            .with("type", direction);

        debug!("Transferring {} {} ({})", amount, currency, direction);
        self.transfer_to_trading(&params).await
    }

    /// Get account transactions
    #[instrument(skip(self, params))]
    pub async fn get_account_transactions(&self, params: &Params) -> RestResult<Value> {
        self.client
            .request(Method::GET, &["account", "transactions"], params)
            .await
    }

    /// Get a single account transaction
    #[instrument(skip(self, params))]
    pub async fn get_account_transaction(
        &self,
        transaction_id: &str,
        params: &Params,
    ) -> RestResult<Value> {
        self.client
            .request(Method::GET, &["account", "transactions", transaction_id], params)
            .await
    }
}
