//! Typed request helpers

use hitbtc_types::{OrderType, Params, Side, TimeInForce};
use rust_decimal::Decimal;

// ============================================================================
// Trading Types
// ============================================================================

/// New order request
///
/// Always carries a price, so its parameters satisfy the create-order
/// required keys.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    /// Symbol (e.g., "ETHBTC")
    pub symbol: String,
    /// Order side
    pub side: Side,
    /// Order type
    pub order_type: OrderType,
    /// Order quantity
    pub quantity: Decimal,
    /// Limit price
    pub price: Decimal,
    /// Trigger price, sent only for stop order types
    pub stop_price: Option<Decimal>,
    /// Time in force
    pub time_in_force: Option<TimeInForce>,
    /// Client-chosen order ID
    pub client_order_id: Option<String>,
    /// Expiry for GTD orders (ISO 8601)
    pub expire_time: Option<String>,
    /// Reject instead of rounding price/quantity to the symbol's tick
    pub strict_validate: bool,
    /// Post-only (maker) order
    pub post_only: bool,
}

impl OrderRequest {
    /// Create a limit order
    pub fn limit(symbol: impl Into<String>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::Limit,
            quantity,
            price,
            stop_price: None,
            time_in_force: None,
            client_order_id: None,
            expire_time: None,
            strict_validate: false,
            post_only: false,
        }
    }

    /// Create a stop-limit order
    pub fn stop_limit(
        symbol: impl Into<String>,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Self {
        Self {
            order_type: OrderType::StopLimit,
            stop_price: Some(stop_price),
            ..Self::limit(symbol, side, quantity, price)
        }
    }

    /// Set time in force
    pub fn with_time_in_force(mut self, tif: TimeInForce) -> Self {
        self.time_in_force = Some(tif);
        self
    }

    /// Set client order ID
    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    /// Good till the given time (sets time in force to GTD)
    pub fn good_till(mut self, expire_time: impl Into<String>) -> Self {
        self.time_in_force = Some(TimeInForce::GoodTillDate);
        self.expire_time = Some(expire_time.into());
        self
    }

    /// Make this a post-only order
    pub fn post_only(mut self) -> Self {
        self.post_only = true;
        self
    }

    /// Reject rather than round to tick size
    pub fn strict(mut self) -> Self {
        self.strict_validate = true;
        self
    }

    /// Render the request as wire parameters
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("symbol", &self.symbol)
            .with("side", self.side)
            .with("type", self.order_type)
            .with("quantity", self.quantity)
            .with("price", self.price);

        if let Some(stop_price) = self.stop_price.filter(|_| self.order_type.is_stop()) {
            params.insert("stopPrice", stop_price);
        }
        if let Some(tif) = &self.time_in_force {
            params.insert("timeInForce", tif);
        }
        if let Some(id) = &self.client_order_id {
            params.insert("clientOrderId", id);
        }
        if let Some(expire_time) = &self.expire_time {
            params.insert("expireTime", expire_time);
        }
        if self.strict_validate {
            params.insert("strictValidate", true);
        }
        if self.post_only {
            params.insert("postOnly", true);
        }

        params
    }
}

impl From<&OrderRequest> for Params {
    fn from(order: &OrderRequest) -> Self {
        order.to_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hitbtc_types::WriteOperation;
    use rust_decimal_macros::dec;

    #[test]
    fn test_limit_order_builder() {
        let order = OrderRequest::limit("ETHBTC", Side::Buy, dec!(0.5), dec!(0.046))
            .post_only()
            .with_client_order_id("my-order-1")
            .with_time_in_force(TimeInForce::ImmediateOrCancel);

        assert_eq!(order.symbol, "ETHBTC");
        assert_eq!(order.order_type, OrderType::Limit);
        assert!(order.post_only);
        assert_eq!(order.client_order_id.as_deref(), Some("my-order-1"));
    }

    #[test]
    fn test_params_satisfy_create_order() {
        let order = OrderRequest::limit("ETHBTC", Side::Sell, dec!(1.25), dec!(0.05));
        let params = order.to_params();

        assert!(WriteOperation::CreateOrder.missing_params(&params).is_empty());
        assert_eq!(params.get("side"), Some("sell"));
        assert_eq!(params.get("type"), Some("limit"));
        assert_eq!(params.get("quantity"), Some("1.25"));
        assert_eq!(params.get("price"), Some("0.05"));
        assert!(!params.contains_key("postOnly"));
    }

    #[test]
    fn test_stop_limit_and_gtd_params() {
        let order =
            OrderRequest::stop_limit("BTCUSD", Side::Sell, dec!(0.1), dec!(9000), dec!(9100))
            .good_till("2026-10-17T00:00:00Z")
            .strict();
        let params = Params::from(&order);

        assert_eq!(params.get("type"), Some("stopLimit"));
        assert_eq!(params.get("stopPrice"), Some("9100"));
        assert_eq!(params.get("timeInForce"), Some("GTD"));
        assert_eq!(params.get("expireTime"), Some("2026-10-17T00:00:00Z"));
        assert_eq!(params.get("strictValidate"), Some("true"));
    }

    #[test]
    fn test_stop_price_only_sent_for_stop_types() {
        let mut order = OrderRequest::limit("BTCUSD", Side::Buy, dec!(0.1), dec!(9000));
        order.stop_price = Some(dec!(8900));
        assert!(!order.to_params().contains_key("stopPrice"));

        order.order_type = OrderType::StopMarket;
        assert!(order.order_type.is_stop());
        assert_eq!(order.to_params().get("stopPrice"), Some("8900"));
    }
}
