//! Account, operations and portfolio endpoints.
//!
//! `broker_account_id` is optional everywhere here; when omitted (or empty)
//! the API uses the default account and the query key is not sent at all.

use time::OffsetDateTime;

use crate::error::TinkoffError;
use crate::rest::TinkoffClient;
use crate::rest::endpoints::{account, user};
use crate::rest::request::Request;
use crate::rest::response::ResponseMap;

impl TinkoffClient {
    /// List the user's broker accounts.
    pub async fn user_accounts(&self) -> Result<ResponseMap, TinkoffError> {
        self.execute(Request::get(user::ACCOUNTS)).await
    }

    /// Get the operations history between `from` and `to`.
    ///
    /// # Arguments
    ///
    /// * `figi` - Restrict to one instrument.
    /// * `broker_account_id` - Account to query.
    pub async fn operations(
        &self,
        from: OffsetDateTime,
        to: OffsetDateTime,
        figi: Option<&str>,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        let request = Request::get(account::OPERATIONS)
            .query_datetime("from", &from)?
            .query_datetime("to", &to)?
            .query_opt("figi", figi)
            .query_opt("brokerAccountId", broker_account_id);
        self.execute(request).await
    }

    /// Get portfolio positions.
    pub async fn portfolio(
        &self,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        let request =
            Request::get(account::PORTFOLIO).query_opt("brokerAccountId", broker_account_id);
        self.execute(request).await
    }

    /// Get portfolio currency balances.
    pub async fn portfolio_currencies(
        &self,
        broker_account_id: Option<&str>,
    ) -> Result<ResponseMap, TinkoffError> {
        let request = Request::get(account::PORTFOLIO_CURRENCIES)
            .query_opt("brokerAccountId", broker_account_id);
        self.execute(request).await
    }
}
