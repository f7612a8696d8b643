//! Trading endpoints for order management

use crate::client::HitbtcRestClient;
use crate::error::RestResult;
use crate::types::OrderRequest;
use hitbtc_types::{Params, WriteOperation};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a HitbtcRestClient,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a HitbtcRestClient) -> Self {
        Self { client }
    }

    /// Get trading wallet balance
    #[instrument(skip(self, params))]
    pub async fn get_trading_balance(&self, params: &Params) -> RestResult<Value> {
        self.client
            .request(Method::GET, &["trading", "balance"], params)
            .await
    }

    /// Get active orders
    ///
    /// # Arguments
    /// * `params` - Optional `symbol` filter
    #[instrument(skip(self, params))]
    pub async fn get_active_orders(&self, params: &Params) -> RestResult<Value> {
        self.client.request(Method::GET, &["order"], params).await
    }

    /// Get a single active order
    #[instrument(skip(self, params))]
    pub async fn get_active_order(
        &self,
        client_order_id: &str,
        params: &Params,
    ) -> RestResult<Value> {
        self.client
            .request(Method::GET, &["order", client_order_id], params)
            .await
    }

    /// Create a new order
    ///
    /// `params` must contain `symbol`, `side`, `quantity` and `price`;
    /// otherwise nothing is sent.
    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: &Params) -> RestResult<Value> {
        self.client
            .write(WriteOperation::CreateOrder, Method::POST, &["order"], params)
            .await
    }

    /// Create a new order from a typed request
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        debug!(
            "Placing {} {} order for {} {}",
            order.side, order.order_type, order.quantity, order.symbol
        );
        self.create_order(&order.to_params()).await
    }

    /// Create or replace an order under a chosen client order ID
    ///
    /// `params` must contain `symbol`, `side`, `quantity`, `price` and
    /// `timeInForce`.
    #[instrument(skip(self, params))]
    pub async fn update_order(&self, client_order_id: &str, params: &Params) -> RestResult<Value> {
        self.client
            .write(
                WriteOperation::UpdateOrder,
                Method::PUT,
                &["order", client_order_id],
                params,
            )
            .await
    }

    /// Cancel all open orders
    ///
    /// # Arguments
    /// * `params` - Optional `symbol` to restrict the cancel
    #[instrument(skip(self, params))]
    pub async fn cancel_open_orders(&self, params: &Params) -> RestResult<Value> {
        debug!("Cancelling open orders");
        self.client.request(Method::DELETE, &["order"], params).await
    }

    /// Cancel an order
    #[instrument(skip(self, params))]
    pub async fn cancel_order(&self, client_order_id: &str, params: &Params) -> RestResult<Value> {
        self.client
            .request(Method::DELETE, &["order", client_order_id], params)
            .await
    }

    /// Cancel an order and replace it in one step
    ///
    /// `params` must contain `quantity` and `requestClientId`.
    #[instrument(skip(self, params))]
    pub async fn cancel_replace_order(
        &self,
        client_order_id: &str,
        params: &Params,
    ) -> RestResult<Value> {
        self.client
            .write(
                WriteOperation::CancelReplaceOrder,
                Method::PATCH,
                &["order", client_order_id],
                params,
            )
            .await
    }

    /// Get maker/taker fee rates for a symbol
    #[instrument(skip(self, params))]
    pub async fn get_trading_fee(&self, symbol: &str, params: &Params) -> RestResult<Value> {
        self.client
            .request(Method::GET, &["trading", "fee", symbol], params)
            .await
    }
}
