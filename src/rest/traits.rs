//! Trait definition for the Tinkoff OpenAPI REST client.
//!
//! This module provides the `TinkoffApi` trait which abstracts all REST API operations.
//! This enables:
//! - Mock implementations for testing
//! - Decorators (e.g., request logging or auditing wrappers)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use tinkoff_open_api::rest::{ResponseExt, TinkoffApi, TinkoffClient};
//!
//! async fn first_account<C: TinkoffApi>(client: &C) -> Option<String> {
//!     let response = client.user_accounts().await.ok()?;
//!     response.payload()?["accounts"][0]["brokerAccountId"]
//!         .as_str()
//!         .map(str::to_string)
//! }
//! ```

use std::future::Future;

use rust_decimal::Decimal;
use time::OffsetDateTime;

use crate::error::TinkoffError;
use crate::rest::TinkoffClient;
use crate::rest::response::ResponseMap;
use crate::types::{BrokerAccountType, CandleInterval, Currency, OperationType};

/// Trait defining all Tinkoff OpenAPI REST operations.
///
/// All methods are async and return `Result<ResponseMap, TinkoffError>`.
pub trait TinkoffApi: Send + Sync {
    // ========== Sandbox ==========

    /// Register a sandbox broker account.
    fn sandbox_register(
        &self,
        broker_account_type: BrokerAccountType,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Set a currency balance on a sandbox account.
    fn sandbox_currencies_balance(
        &self,
        currency: Currency,
        balance: Decimal,
        broker_account_id: Option<&str>,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Set an instrument position on a sandbox account.
    fn sandbox_positions_balance(
        &self,
        figi: &str,
        balance: Decimal,
        broker_account_id: Option<&str>,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Remove a sandbox account.
    fn sandbox_remove(
        &self,
        broker_account_id: &str,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Clear a sandbox account.
    fn sandbox_clear(
        &self,
        broker_account_id: &str,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    // ========== Market ==========

    /// List stocks.
    fn market_stocks(&self) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// List bonds.
    fn market_bonds(&self) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// List ETFs.
    fn market_etfs(&self) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// List currencies.
    fn market_currencies(&self) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Get an order book snapshot.
    fn market_orderbook(
        &self,
        figi: &str,
        depth: u32,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Get historical candles.
    fn market_candles(
        &self,
        figi: &str,
        from: OffsetDateTime,
        to: OffsetDateTime,
        interval: CandleInterval,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Look up an instrument by FIGI.
    fn market_search_by_figi(
        &self,
        figi: &str,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Look up instruments by ticker.
    fn market_search_by_ticker(
        &self,
        ticker: &str,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    // ========== Accounts & Portfolio ==========

    /// List broker accounts.
    fn user_accounts(&self) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Get the operations history.
    fn operations(
        &self,
        from: OffsetDateTime,
        to: OffsetDateTime,
        figi: Option<&str>,
        broker_account_id: Option<&str>,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Get portfolio positions.
    fn portfolio(
        &self,
        broker_account_id: Option<&str>,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Get portfolio currency balances.
    fn portfolio_currencies(
        &self,
        broker_account_id: Option<&str>,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    // ========== Orders ==========

    /// List active orders.
    fn orders(
        &self,
        broker_account_id: Option<&str>,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Place a limit order.
    fn orders_limit_order(
        &self,
        figi: &str,
        lots: u32,
        operation: OperationType,
        price: Decimal,
        broker_account_id: Option<&str>,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Place a market order.
    fn orders_market_order(
        &self,
        figi: &str,
        lots: u32,
        operation: OperationType,
        broker_account_id: Option<&str>,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;

    /// Cancel an active order.
    fn orders_cancel(
        &self,
        order_id: &str,
        broker_account_id: Option<&str>,
    ) -> impl Future<Output = Result<ResponseMap, TinkoffError>> + Send;
}

impl TinkoffApi for TinkoffClient {
    async fn sandbox_register(
        &self,
        broker_account_type: BrokerAccountType,
    ) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::sandbox_register(self, broker_account_type).await
    }

    async fn sandbox_currencies_balance(
        &self,
        currency: Currency,
        balance: Decimal,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::sandbox_currencies_balance(self, currency, balance, broker_account_id).await
    }

    async fn sandbox_positions_balance(
        &self,
        figi: &str,
        balance: Decimal,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::sandbox_positions_balance(self, figi, balance, broker_account_id).await
    }

    async fn sandbox_remove(&self, broker_account_id: &str) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::sandbox_remove(self, broker_account_id).await
    }

    async fn sandbox_clear(&self, broker_account_id: &str) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::sandbox_clear(self, broker_account_id).await
    }

    async fn market_stocks(&self) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::market_stocks(self).await
    }

    async fn market_bonds(&self) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::market_bonds(self).await
    }

    async fn market_etfs(&self) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::market_etfs(self).await
    }

    async fn market_currencies(&self) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::market_currencies(self).await
    }

    async fn market_orderbook(&self, figi: &str, depth: u32) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::market_orderbook(self, figi, depth).await
    }

    async fn market_candles(
        &self,
        figi: &str,
        from: OffsetDateTime,
        to: OffsetDateTime,
        interval: CandleInterval,
    ) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::market_candles(self, figi, from, to, interval).await
    }

    async fn market_search_by_figi(&self, figi: &str) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::market_search_by_figi(self, figi).await
    }

    async fn market_search_by_ticker(&self, ticker: &str) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::market_search_by_ticker(self, ticker).await
    }

    async fn user_accounts(&self) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::user_accounts(self).await
    }

    async fn operations(
        &self,
        from: OffsetDateTime,
        to: OffsetDateTime,
        figi: Option<&str>,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::operations(self, from, to, figi, broker_account_id).await
    }

    async fn portfolio(&self, broker_account_id: Option<&str>) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::portfolio(self, broker_account_id).await
    }

    async fn portfolio_currencies(
        &self,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::portfolio_currencies(self, broker_account_id).await
    }

    async fn orders(&self, broker_account_id: Option<&str>) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::orders(self, broker_account_id).await
    }

    async fn orders_limit_order(
        &self,
        figi: &str,
        lots: u32,
        operation: OperationType,
        price: Decimal,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::orders_limit_order(self, figi, lots, operation, price, broker_account_id)
            .await
    }

    async fn orders_market_order(
        &self,
        figi: &str,
        lots: u32,
        operation: OperationType,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::orders_market_order(self, figi, lots, operation, broker_account_id).await
    }

    async fn orders_cancel(
        &self,
        order_id: &str,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        TinkoffClient::orders_cancel(self, order_id, broker_account_id).await
    }
}
