//! # Tinkoff OpenAPI Client
//!
//! An async Rust client library for the Tinkoff Invest OpenAPI REST interface.
//!
//! ## Features
//!
//! - Sandbox account management, market data, portfolio, operations and orders
//! - One request per call: no retries, no caching
//! - Sandbox-only operations guarded by the client environment
//! - Responses returned as the raw `{status, payload, trackingId}` envelope,
//!   for both success and HTTP error statuses
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tinkoff_open_api::rest::{Environment, ResponseExt, TinkoffClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TinkoffClient::new("t.my_token", Environment::Sandbox);
//!     let accounts = client.user_accounts().await?;
//!     println!("Status: {:?}", accounts.status());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::TinkoffError;
pub use rest::{Environment, ResponseExt, ResponseMap, TinkoffClient, TransportPolicy};
pub use types::common::{BrokerAccountType, CandleInterval, Currency, InstrumentType, OperationType};

/// Result type alias using TinkoffError
pub type Result<T> = std::result::Result<T, TinkoffError>;
