//! Common types used across the Tinkoff client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
