//! Tinkoff OpenAPI REST client.
//!
//! Provides access to the sandbox, market data, portfolio and order
//! endpoints. Every operation returns the decoded response envelope as a
//! [`ResponseMap`]; use [`ResponseExt`] to inspect it.
//!
//! # Trait-based API
//!
//! The [`TinkoffApi`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorators wrapping the real client
//!
//! ```rust,ignore
//! use tinkoff_open_api::rest::{ResponseExt, TinkoffApi};
//!
//! async fn has_stocks<C: TinkoffApi>(client: &C) -> Result<bool, tinkoff_open_api::TinkoffError> {
//!     let response = client.market_stocks().await?;
//!     Ok(response.is_ok())
//! }
//! ```

mod client;
pub mod endpoints;
mod market;
pub mod orders;
mod portfolio;
mod request;
mod response;
pub mod sandbox;
mod traits;

pub use client::{Environment, TinkoffClient, TinkoffClientBuilder, TransportPolicy};
pub use response::{Envelope, ErrorPayload, ResponseExt, ResponseMap, ResponseStatus};
pub use traits::TinkoffApi;
