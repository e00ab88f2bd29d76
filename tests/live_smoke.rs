use std::sync::Arc;

use rust_decimal::Decimal;
use time::{Duration, OffsetDateTime};

use tinkoff_open_api::auth::EnvToken;
use tinkoff_open_api::rest::{Environment, ResponseExt, TinkoffClient, TinkoffClientBuilder};
use tinkoff_open_api::types::{BrokerAccountType, CandleInterval, Currency, OperationType};

fn live_tests_enabled() -> bool {
    std::env::var("TINKOFF_LIVE_TESTS").ok().as_deref() == Some("1")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn live_client() -> Option<TinkoffClient> {
    let token = EnvToken::try_from_env()?;
    Some(
        TinkoffClientBuilder::new(Arc::new(token))
            .environment(Environment::Sandbox)
            .build(),
    )
}

#[tokio::test]
#[ignore]
async fn live_sandbox_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }
    init_tracing();

    let client = match live_client() {
        Some(client) => client,
        None => return Ok(()),
    };

    let registered = client.sandbox_register(BrokerAccountType::Tinkoff).await?;
    assert!(registered.is_ok());
    let account_id = registered.payload().unwrap()["brokerAccountId"]
        .as_str()
        .unwrap()
        .to_string();

    let balance = client
        .sandbox_currencies_balance(Currency::Usd, Decimal::from(1_000_000), Some(&account_id))
        .await?;
    assert!(balance.is_ok());

    let stocks = client.market_stocks().await?;
    assert!(stocks.is_ok());
    let figi = stocks.payload().unwrap()["instruments"][0]["figi"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(!figi.is_empty());

    let orderbook = client.market_orderbook(&figi, 3).await?;
    assert!(orderbook.is_ok());
    assert_eq!(orderbook.payload().unwrap()["depth"], 3);

    let to = OffsetDateTime::now_utc();
    let from = to - Duration::days(1);
    let candles = client
        .market_candles(&figi, from, to, CandleInterval::FifteenMinutes)
        .await?;
    assert!(candles.is_ok());

    let operations = client
        .operations(from, to, Some(&figi), Some(&account_id))
        .await?;
    assert!(operations.is_ok());

    let order = client
        .orders_limit_order(&figi, 1, OperationType::Buy, Decimal::new(1, 2), Some(&account_id))
        .await?;
    assert!(order.is_ok());
    assert!(order.payload().unwrap()["orderId"]
        .as_str()
        .is_some_and(|id| !id.is_empty()));

    assert!(client.sandbox_clear(&account_id).await?.is_ok());
    assert!(client.sandbox_remove(&account_id).await?.is_ok());

    Ok(())
}
