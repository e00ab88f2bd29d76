//! Request bodies for sandbox endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::{BrokerAccountType, Currency};

/// Body of `sandbox/register`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxRegisterRequest {
    /// Kind of account to open.
    pub broker_account_type: BrokerAccountType,
}

/// Body of `sandbox/currencies/balance`.
#[derive(Debug, Clone, Serialize)]
pub struct SandboxSetCurrencyBalanceRequest {
    /// Currency to set.
    pub currency: Currency,
    /// New balance, sent as a JSON number.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

/// Body of `sandbox/positions/balance`.
///
/// The FIGI goes in the body here, unlike the order endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct SandboxSetPositionBalanceRequest {
    /// Instrument FIGI.
    pub figi: String,
    /// New position size, sent as a JSON number.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}
