//! Demo 2: Order Lifecycle
//!
//! Showcases: placing a far-from-market limit order, checking it, cancelling it,
//! and telling pre-flight failures apart from exchange errors
//!
//! Run: HITBTC_API_KEY=... HITBTC_API_SECRET=... cargo run --bin order_lifecycle
//!
//! Places a real (post-only, far below market) order. Use a test account.

use colored::*;
use hitbtc_rest::{
    ApiErrorKind, ClientConfig, Credentials, HitbtcRestClient, OrderRequest, Params, RestError,
    Side,
};
use rust_decimal_macros::dec;
use std::time::{SystemTime, UNIX_EPOCH};

fn report(step: &str, err: &RestError) {
    let hint = match err {
        RestError::ParameterRequired { .. } => "nothing was sent".to_string(),
        RestError::Api(api) => match api.kind {
            ApiErrorKind::Authentication | ApiErrorKind::InvalidScope => {
                "check the API key permissions".to_string()
            }
            ApiErrorKind::RateLimitExceeded => "slow down".to_string(),
            kind => format!("{} ({:?})", kind, kind.category()),
        },
        _ => "request never completed".to_string(),
    };
    println!("{} {}: {} [{}]", "✗".red(), step, err, hint.yellow());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  ORDER LIFECYCLE".cyan().bold());
    println!("{}", "  HitBTC REST - create / inspect / cancel".cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let client = HitbtcRestClient::with_config(Credentials::from_env()?, ClientConfig::from_env())?;
    println!("{} Client ready for {}", "✓".green(), client.base_uri());

    // Missing price: rejected locally
    let incomplete = Params::new()
        .with("symbol", "ETHBTC")
        .with("side", Side::Buy)
        .with("quantity", dec!(0.001));
    if let Err(e) = client.trading().create_order(&incomplete).await {
        report("create_order without price", &e);
    }

    let nonce = SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis();
    let client_order_id = format!("demo{}", nonce);
    let order = OrderRequest::limit("ETHBTC", Side::Buy, dec!(0.001), dec!(0.000001))
        .with_client_order_id(&client_order_id)
        .post_only();

    match client.place_order(&order).await {
        Ok(placed) => println!("{} Placed: {}", "✓".green(), placed),
        Err(e) => {
            report("place_order", &e);
            return Ok(());
        }
    }

    match client
        .trading()
        .get_active_order(&client_order_id, &Params::new())
        .await
    {
        Ok(active) => println!("{} Active: {}", "✓".green(), active),
        Err(e) => report("get_active_order", &e),
    }

    match client.cancel_order(&client_order_id).await {
        Ok(cancelled) => println!("{} Cancelled: {}", "✓".green(), cancelled),
        Err(e) => report("cancel_order", &e),
    }

    // Cancelling twice: the exchange reports the order as gone
    if let Err(e) = client.cancel_order(&client_order_id).await {
        report("cancel_order again", &e);
    }

    println!();
    println!("{}", "═".repeat(65).cyan());
    Ok(())
}
