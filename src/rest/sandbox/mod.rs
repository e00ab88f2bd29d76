//! Sandbox account management endpoints.
//!
//! All methods here fail with [`TinkoffError::WrongEnvironment`] before any
//! request is made when the client targets production.

mod types;

pub use types::*;

use rust_decimal::Decimal;

use crate::error::TinkoffError;
use crate::rest::TinkoffClient;
use crate::rest::endpoints::sandbox;
use crate::rest::request::Request;
use crate::rest::response::ResponseMap;
use crate::types::{BrokerAccountType, Currency};

impl TinkoffClient {
    /// Register a sandbox broker account.
    ///
    /// The new account id is returned in `payload.brokerAccountId`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tinkoff_open_api::rest::{ResponseExt, TinkoffClient};
    /// use tinkoff_open_api::types::BrokerAccountType;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = TinkoffClient::sandbox("t.my_token");
    ///     let response = client.sandbox_register(BrokerAccountType::Tinkoff).await?;
    ///     let account_id = response.payload().and_then(|p| p["brokerAccountId"].as_str());
    ///     println!("Registered: {:?}", account_id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn sandbox_register(
        &self,
        broker_account_type: BrokerAccountType,
    ) -> Result<ResponseMap, TinkoffError> {
        self.ensure_sandbox("sandbox_register")?;
        let body = SandboxRegisterRequest {
            broker_account_type,
        };
        self.execute(Request::post(sandbox::REGISTER).json(&body)?)
            .await
    }

    /// Set a currency balance on a sandbox account.
    ///
    /// Without `broker_account_id` the default sandbox account is used.
    pub async fn sandbox_currencies_balance(
        &self,
        currency: Currency,
        balance: Decimal,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        self.ensure_sandbox("sandbox_currencies_balance")?;
        let body = SandboxSetCurrencyBalanceRequest { currency, balance };
        let request = Request::post(sandbox::CURRENCIES_BALANCE)
            .query_opt("brokerAccountId", broker_account_id)
            .json(&body)?;
        self.execute(request).await
    }

    /// Set an instrument position on a sandbox account.
    pub async fn sandbox_positions_balance(
        &self,
        figi: &str,
        balance: Decimal,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        self.ensure_sandbox("sandbox_positions_balance")?;
        let body = SandboxSetPositionBalanceRequest {
            figi: figi.to_string(),
            balance,
        };
        let request = Request::post(sandbox::POSITIONS_BALANCE)
            .query_opt("brokerAccountId", broker_account_id)
            .json(&body)?;
        self.execute(request).await
    }

    /// Remove a sandbox account.
    pub async fn sandbox_remove(&self, broker_account_id: &str) -> Result<ResponseMap, TinkoffError> {
        self.ensure_sandbox("sandbox_remove")?;
        let request = Request::post(sandbox::REMOVE).query("brokerAccountId", broker_account_id);
        self.execute(request).await
    }

    /// Remove all positions and balances from a sandbox account.
    pub async fn sandbox_clear(&self, broker_account_id: &str) -> Result<ResponseMap, TinkoffError> {
        self.ensure_sandbox("sandbox_clear")?;
        let request = Request::post(sandbox::CLEAR).query("brokerAccountId", broker_account_id);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_balance_body_uses_json_number() {
        let body = SandboxSetCurrencyBalanceRequest {
            currency: Currency::Usd,
            balance: Decimal::from(1_000_000),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"currency":"USD","balance":1000000}"#);
    }

    #[test]
    fn test_register_body_default_account_type() {
        let json = serde_json::to_string(&SandboxRegisterRequest::default()).unwrap();
        assert_eq!(json, r#"{"brokerAccountType":"Tinkoff"}"#);
    }

    #[tokio::test]
    async fn test_production_client_rejects_sandbox_calls() {
        let client = TinkoffClient::production("t");
        let err = client.sandbox_remove("SB1").await.unwrap_err();
        assert!(matches!(
            err,
            TinkoffError::WrongEnvironment {
                operation: "sandbox_remove"
            }
        ));
    }
}
