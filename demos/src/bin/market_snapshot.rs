//! Demo 1: Market Snapshot
//!
//! Showcases: public market data (symbol, ticker, orderbook, candles)
//!
//! Run: HITBTC_API_KEY=... HITBTC_API_SECRET=... cargo run --bin market_snapshot [SYMBOL]

use colored::*;
use hitbtc_rest::{CandlePeriod, ClientConfig, Credentials, HitbtcRestClient, Params};
use rust_decimal::Decimal;
use serde_json::Value;

fn field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("-")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "ETHBTC".to_string());

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  MARKET SNAPSHOT".cyan().bold());
    println!("{}", format!("  HitBTC REST - {}", symbol).cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let client = HitbtcRestClient::with_config(Credentials::from_env()?, ClientConfig::from_env())?;
    let market = client.market();

    let info = market.get_symbol(&symbol, &Params::new()).await?;
    println!(
        "  {} {}/{}  tick {}  lot {}",
        "Symbol:".white().bold(),
        field(&info, "baseCurrency"),
        field(&info, "quoteCurrency"),
        field(&info, "tickSize"),
        field(&info, "quantityIncrement"),
    );

    let ticker = client.get_ticker(&symbol).await?;
    println!(
        "  {} last {}  bid {}  ask {}  vol {}",
        "Ticker:".white().bold(),
        field(&ticker, "last").yellow(),
        field(&ticker, "bid").green(),
        field(&ticker, "ask").red(),
        field(&ticker, "volume"),
    );
    println!();

    let book = client.get_orderbook(&symbol, Some(5)).await?;
    println!("  {:>18}  {:>18}", "BID".green().bold(), "ASK".red().bold());
    println!("  {}", "─".repeat(38));
    let empty = Vec::new();
    let bids = book.get("bid").and_then(Value::as_array).unwrap_or(&empty);
    let asks = book.get("ask").and_then(Value::as_array).unwrap_or(&empty);
    for i in 0..bids.len().max(asks.len()) {
        let level = |side: &[Value]| {
            side.get(i)
                .map(|l| format!("{} @ {}", field(l, "size"), field(l, "price")))
                .unwrap_or_default()
        };
        println!("  {:>18}  {:>18}", level(bids.as_slice()), level(asks.as_slice()));
    }
    println!();

    let params = Params::new()
        .with("period", CandlePeriod::H1)
        .with("limit", 6);
    let candles = market.get_candles(&symbol, &params).await?;
    println!("  {}", format!("Last candles ({})", CandlePeriod::H1).white().bold());
    for candle in candles.as_array().unwrap_or(&empty) {
        let open = field(candle, "open");
        let close = field(candle, "close");
        let rising = match (open.parse::<Decimal>(), close.parse::<Decimal>()) {
            (Ok(o), Ok(c)) => c >= o,
            _ => true,
        };
        let close = if rising { close.green() } else { close.red() };
        println!(
            "  {}  O {}  H {}  L {}  C {}",
            field(candle, "timestamp"),
            open,
            field(candle, "max"),
            field(candle, "min"),
            close,
        );
    }

    println!();
    println!("{}", "═".repeat(65).cyan());
    Ok(())
}
