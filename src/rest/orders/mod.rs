//! Order endpoints.

mod types;

pub use types::*;

use rust_decimal::Decimal;

use crate::error::TinkoffError;
use crate::rest::TinkoffClient;
use crate::rest::endpoints::account;
use crate::rest::request::Request;
use crate::rest::response::ResponseMap;
use crate::types::OperationType;

impl TinkoffClient {
    /// List active orders.
    pub async fn orders(
        &self,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        let request = Request::get(account::ORDERS).query_opt("brokerAccountId", broker_account_id);
        self.execute(request).await
    }

    /// Place a limit order.
    ///
    /// The new order id is returned in `payload.orderId`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use rust_decimal::Decimal;
    /// use tinkoff_open_api::rest::{ResponseExt, TinkoffClient};
    /// use tinkoff_open_api::types::OperationType;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = TinkoffClient::sandbox("t.my_token");
    ///     let response = client
    ///         .orders_limit_order("BBG000B9XRY4", 1, OperationType::Buy, Decimal::new(1, 2), None)
    ///         .await?;
    ///     if let Some(error) = response.error_payload() {
    ///         eprintln!("Rejected: {:?}", error.message);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn orders_limit_order(
        &self,
        figi: &str,
        lots: u32,
        operation: OperationType,
        price: Decimal,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        let body = LimitOrderRequest {
            lots,
            operation,
            price,
        };
        let request = Request::post(account::LIMIT_ORDER)
            .query("figi", figi)
            .query_opt("brokerAccountId", broker_account_id)
            .json(&body)?;
        self.execute(request).await
    }

    /// Place a market order.
    pub async fn orders_market_order(
        &self,
        figi: &str,
        lots: u32,
        operation: OperationType,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        let body = MarketOrderRequest { lots, operation };
        let request = Request::post(account::MARKET_ORDER)
            .query("figi", figi)
            .query_opt("brokerAccountId", broker_account_id)
            .json(&body)?;
        self.execute(request).await
    }

    /// Cancel an active order.
    pub async fn orders_cancel(
        &self,
        order_id: &str,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        let request = Request::post(account::CANCEL_ORDER)
            .query("orderId", order_id)
            .query_opt("brokerAccountId", broker_account_id);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_order_body() {
        let body = LimitOrderRequest {
            lots: 1,
            operation: OperationType::Buy,
            price: Decimal::new(1, 2),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"lots":1,"operation":"Buy","price":0.01}"#);
    }

    #[test]
    fn test_market_order_body() {
        let body = MarketOrderRequest {
            lots: 5,
            operation: OperationType::Sell,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"lots":5,"operation":"Sell"}"#);
    }
}
