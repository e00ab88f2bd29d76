//! Authentication module for the Tinkoff OpenAPI.
//!
//! Every request carries an `Authorization: Bearer <token>` header. This
//! module keeps the token out of `Debug` output and lets applications plug
//! in their own token source.

mod token;

pub use token::{EnvToken, StaticToken, TOKEN_ENV_VAR, Token, TokenProvider};
