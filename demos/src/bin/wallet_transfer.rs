//! Demo 3: Wallet Transfer
//!
//! Showcases: account and trading balances, moving funds between them
//!
//! Run: HITBTC_API_KEY=... HITBTC_API_SECRET=... cargo run --bin wallet_transfer [CURRENCY] [AMOUNT]
//!
//! Without an amount only the balances are printed.

use colored::*;
use hitbtc_rest::{ClientConfig, Credentials, HitbtcRestClient, RestError, TransferType};
use rust_decimal::Decimal;
use serde_json::Value;

fn balance_of(balances: &Value, currency: &str) -> (String, String) {
    balances
        .as_array()
        .and_then(|rows| {
            rows.iter()
                .find(|row| row.get("currency").and_then(Value::as_str) == Some(currency))
        })
        .map(|row| {
            let get = |key: &str| row.get(key).and_then(Value::as_str).unwrap_or("0").to_string();
            (get("available"), get("reserved"))
        })
        .unwrap_or_else(|| ("0".to_string(), "0".to_string()))
}

async fn print_balances(client: &HitbtcRestClient, currency: &str) -> Result<(), RestError> {
    let account = client.get_account_balance().await?;
    let trading = client.get_trading_balance().await?;

    let (acc_avail, acc_reserved) = balance_of(&account, currency);
    let (trd_avail, trd_reserved) = balance_of(&trading, currency);

    println!(
        "  {:>10}  {:>16}  {:>16}",
        "WALLET".white().bold(),
        "AVAILABLE".white().bold(),
        "RESERVED".white().bold()
    );
    println!("  {}", "─".repeat(46));
    println!("  {:>10}  {:>16}  {:>16}", "account", acc_avail, acc_reserved);
    println!("  {:>10}  {:>16}  {:>16}", "trading", trd_avail, trd_reserved);
    println!();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let currency = args.next().unwrap_or_else(|| "USDT".to_string());
    let amount: Option<Decimal> = args.next().map(|a| a.parse()).transpose()?;

    println!("{}", "═".repeat(65).cyan());
    println!("{}", "  WALLET TRANSFER".cyan().bold());
    println!("{}", format!("  HitBTC REST - {}", currency).cyan());
    println!("{}", "═".repeat(65).cyan());
    println!();

    let client = HitbtcRestClient::with_config(Credentials::from_env()?, ClientConfig::from_env())?;
    print_balances(&client, &currency).await?;

    let Some(amount) = amount else {
        return Ok(());
    };

    let account = client.account();
    match account
        .transfer(&currency, amount, TransferType::BankToExchange)
        .await
    {
        Ok(result) => println!("{} To trading: {}", "✓".green(), result),
        Err(e) => {
            println!("{} Transfer failed: {}", "✗".red(), e);
            return Ok(());
        }
    }
    print_balances(&client, &currency).await?;

    match account
        .transfer(&currency, amount, TransferType::ExchangeToBank)
        .await
    {
        Ok(result) => println!("{} Back to account: {}", "✓".green(), result),
        Err(e) => println!("{} Transfer failed: {}", "✗".red(), e),
    }
    print_balances(&client, &currency).await?;

    println!("{}", "═".repeat(65).cyan());
    Ok(())
}
