//! Order and trade history endpoints

use crate::client::HitbtcRestClient;
use crate::error::RestResult;
use hitbtc_types::Params;
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

/// Order and trade history endpoints
pub struct HistoryEndpoints<'a> {
    client: &'a HitbtcRestClient,
}

impl<'a> HistoryEndpoints<'a> {
    pub fn new(client: &'a HitbtcRestClient) -> Self {
        Self { client }
    }

    /// Get closed and filled orders
    ///
    /// # Arguments
    /// * `params` - Optional `symbol`, `clientOrderId`, `from`, `till`, `limit`, `offset`
    #[instrument(skip(self, params))]
    pub async fn get_order_history(&self, params: &Params) -> RestResult<Value> {
        self.client
            .request(Method::GET, &["history", "order"], params)
            .await
    }

    /// Get own trades
    #[instrument(skip(self, params))]
    pub async fn get_trade_history(&self, params: &Params) -> RestResult<Value> {
        self.client
            .request(Method::GET, &["history", "trades"], params)
            .await
    }

    /// Get trades of a single order
    ///
    /// # Arguments
    /// * `order_id` - Exchange order ID (not the client order ID)
    #[instrument(skip(self, params))]
    pub async fn get_trades_by_order_id(
        &self,
        order_id: &str,
        params: &Params,
    ) -> RestResult<Value> {
        self.client
            .request(Method::GET, &["history", "order", order_id, "trades"], params)
            .await
    }
}
