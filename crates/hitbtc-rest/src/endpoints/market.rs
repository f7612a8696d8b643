//! Public market data endpoints
//!
//! HitBTC still authenticates these; the client sends its credentials on
//! every request.

use crate::client::HitbtcRestClient;
use crate::error::RestResult;
use hitbtc_types::Params;
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    client: &'a HitbtcRestClient,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(client: &'a HitbtcRestClient) -> Self {
        Self { client }
    }

    async fn get(&self, segments: &[&str], params: &Params) -> RestResult<Value> {
        self.client.request(Method::GET, segments, params).await
    }

    /// Get all currencies
    #[instrument(skip(self, params))]
    pub async fn get_currencies(&self, params: &Params) -> RestResult<Value> {
        self.get(&["public", "currency"], params).await
    }

    /// Get a single currency
    ///
    /// # Arguments
    /// * `currency` - Currency code (e.g., "BTC")
    #[instrument(skip(self, params))]
    pub async fn get_currency(&self, currency: &str, params: &Params) -> RestResult<Value> {
        self.get(&["public", "currency", currency], params).await
    }

    /// Get all symbols
    #[instrument(skip(self, params))]
    pub async fn get_symbols(&self, params: &Params) -> RestResult<Value> {
        self.get(&["public", "symbol"], params).await
    }

    /// Get a single symbol
    ///
    /// # Arguments
    /// * `symbol` - Symbol (e.g., "ETHBTC")
    #[instrument(skip(self, params))]
    pub async fn get_symbol(&self, symbol: &str, params: &Params) -> RestResult<Value> {
        self.get(&["public", "symbol", symbol], params).await
    }

    /// Get tickers for all symbols
    #[instrument(skip(self, params))]
    pub async fn get_tickers(&self, params: &Params) -> RestResult<Value> {
        self.get(&["public", "ticker"], params).await
    }

    /// Get ticker for a symbol
    #[instrument(skip(self, params))]
    pub async fn get_ticker(&self, symbol: &str, params: &Params) -> RestResult<Value> {
        self.get(&["public", "ticker", symbol], params).await
    }

    /// Get recent trades
    ///
    /// # Arguments
    /// * `symbol` - Symbol (e.g., "ETHBTC")
    /// * `params` - Optional `sort`, `by`, `from`, `till`, `limit`, `offset`
    #[instrument(skip(self, params))]
    pub async fn get_trades(&self, symbol: &str, params: &Params) -> RestResult<Value> {
        self.get(&["public", "trades", symbol], params).await
    }

    /// Get orderbook
    ///
    /// # Arguments
    /// * `symbol` - Symbol (e.g., "ETHBTC")
    /// * `params` - Optional `limit` (levels per side, 0 for full book)
    #[instrument(skip(self, params))]
    pub async fn get_orderbook(&self, symbol: &str, params: &Params) -> RestResult<Value> {
        self.get(&["public", "orderbook", symbol], params).await
    }

    /// Get candles
    ///
    /// # Arguments
    /// * `symbol` - Symbol (e.g., "ETHBTC")
    /// * `params` - Optional `limit` and `period` (see [`hitbtc_types::CandlePeriod`])
    #[instrument(skip(self, params))]
    pub async fn get_candles(&self, symbol: &str, params: &Params) -> RestResult<Value> {
        self.get(&["public", "candles", symbol], params).await
    }
}
