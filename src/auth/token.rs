//! Bearer token management for Tinkoff OpenAPI authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Default environment variable holding the OpenAPI token.
pub const TOKEN_ENV_VAR: &str = "TINKOFF_TOKEN";

/// An OpenAPI bearer token.
///
/// The token format is not validated; the remote API rejects bad tokens.
#[derive(Clone)]
pub struct Token {
    secret: SecretString,
}

impl Token {
    /// Create a new token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            secret: SecretString::from(token.into()),
        }
    }

    /// Get the raw token.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.secret.expose_secret())
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token").field("secret", &"[REDACTED]").finish()
    }
}

impl From<&str> for Token {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for Token {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

/// Trait for providing the bearer token.
///
/// Implement this trait to customize how the token is retrieved,
/// for example from a secrets manager.
pub trait TokenProvider: Send + Sync {
    /// Get the token.
    fn token(&self) -> &Token;
}

/// Static token provider that holds the token directly.
#[derive(Clone, Debug)]
pub struct StaticToken {
    token: Token,
}

impl StaticToken {
    /// Create a new static token provider.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Token::new(token),
        }
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl TokenProvider for Arc<StaticToken> {
    fn token(&self) -> &Token {
        &self.token
    }
}

/// Token provider that reads from an environment variable.
///
/// By default, reads from `TINKOFF_TOKEN`.
#[derive(Debug)]
pub struct EnvToken {
    token: Token,
}

impl EnvToken {
    /// Create a token from the default environment variable.
    ///
    /// # Panics
    ///
    /// Panics if `TINKOFF_TOKEN` is not set.
    pub fn from_env() -> Self {
        Self::from_env_var(TOKEN_ENV_VAR)
    }

    /// Create a token from a custom environment variable.
    ///
    /// # Panics
    ///
    /// Panics if the environment variable is not set.
    pub fn from_env_var(var: &str) -> Self {
        let token =
            std::env::var(var).unwrap_or_else(|_| panic!("Environment variable {var} not set"));
        Self {
            token: Token::new(token),
        }
    }

    /// Try to create a token from the default environment variable.
    ///
    /// Returns `None` if the variable is not set or empty.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_var(TOKEN_ENV_VAR)
    }

    /// Try to create a token from a custom environment variable.
    ///
    /// Returns `None` if the variable is not set or empty.
    pub fn try_from_env_var(var: &str) -> Option<Self> {
        let token = std::env::var(var).ok().filter(|t| !t.is_empty())?;
        Some(Self {
            token: Token::new(token),
        })
    }
}

impl TokenProvider for EnvToken {
    fn token(&self) -> &Token {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_debug_redacted() {
        let token = Token::new("t.super_secret");
        let debug_str = format!("{:?}", token);
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_bearer_header_value() {
        let token = Token::from("abc");
        assert_eq!(token.bearer(), "Bearer abc");
    }

    #[test]
    fn test_static_token() {
        let provider = StaticToken::new("abc");
        assert_eq!(provider.token().expose_secret(), "abc");
    }

    #[test]
    fn test_try_from_missing_env_var() {
        assert!(EnvToken::try_from_env_var("TINKOFF_TOKEN_SURELY_UNSET_VAR").is_none());
    }
}
