//! Request bodies for order endpoints.
//!
//! The FIGI and account id travel in the query string, so they are not part
//! of these bodies.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::OperationType;

/// Body of `orders/limit-order`.
#[derive(Debug, Clone, Serialize)]
pub struct LimitOrderRequest {
    /// Number of lots.
    pub lots: u32,
    /// Buy or sell.
    pub operation: OperationType,
    /// Limit price, sent as a JSON number.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

/// Body of `orders/market-order`.
#[derive(Debug, Clone, Serialize)]
pub struct MarketOrderRequest {
    /// Number of lots.
    pub lots: u32,
    /// Buy or sell.
    pub operation: OperationType,
}
