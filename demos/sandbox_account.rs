//! Example: Sandbox account lifecycle.
//!
//! Run with: cargo run --example sandbox_account

use std::sync::Arc;

use rust_decimal::Decimal;
use tinkoff_open_api::auth::EnvToken;
use tinkoff_open_api::rest::{Environment, ResponseExt, TinkoffClientBuilder};
use tinkoff_open_api::types::{BrokerAccountType, Currency};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = match EnvToken::try_from_env() {
        Some(token) => Arc::new(token),
        None => {
            println!("Set TINKOFF_TOKEN to run this example.");
            return Ok(());
        }
    };

    let client = TinkoffClientBuilder::new(token)
        .environment(Environment::Sandbox)
        .user_agent("tinkoff-open-api-examples/sandbox_account")
        .build();

    println!("=== Register ===");
    let registered = client.sandbox_register(BrokerAccountType::Tinkoff).await?;
    let Some(account_id) = registered
        .payload()
        .and_then(|p| p["brokerAccountId"].as_str())
        .map(str::to_string)
    else {
        println!("Registration failed: {:?}", registered.error_payload());
        return Ok(());
    };
    println!("Account: {}", account_id);

    println!("\n=== Fund ===");
    let funded = client
        .sandbox_currencies_balance(Currency::Usd, Decimal::from(10_000), Some(&account_id))
        .await?;
    println!("Status: {:?}", funded.status());

    println!("\n=== Portfolio Currencies ===");
    let currencies = client.portfolio_currencies(Some(&account_id)).await?;
    println!("{:?}", currencies.payload());

    println!("\n=== Remove ===");
    let removed = client.sandbox_remove(&account_id).await?;
    println!("Status: {:?}", removed.status());

    Ok(())
}
