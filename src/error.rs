//! Error types for the Tinkoff OpenAPI client library.

use thiserror::Error;

/// The main error type for all Tinkoff client operations.
///
/// Errors reported by the remote API itself (`"status": "Error"` in the
/// envelope) are not represented here: they are returned to the caller as a
/// regular response mapping.
#[derive(Error, Debug)]
pub enum TinkoffError {
    /// A sandbox-only operation was invoked on a production client.
    #[error("Only sandbox method: {operation}")]
    WrongEnvironment {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query string encoding error
    #[error("Query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// Timestamp could not be formatted
    #[error("Date format error: {0}")]
    DateFormat(#[from] time::error::Format),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The response body was empty or not a JSON object
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl TinkoffError {
    /// Check if this error belongs to the transport failure class.
    ///
    /// Transport failures are collapsed into an empty response mapping when
    /// the client runs with [`TransportPolicy::Permissive`](crate::rest::TransportPolicy).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            TinkoffError::Http(_)
                | TinkoffError::HttpMiddleware(_)
                | TinkoffError::Json(_)
                | TinkoffError::InvalidResponse(_)
        )
    }

    /// Check if this is the sandbox-only guard error.
    pub fn is_wrong_environment(&self) -> bool {
        matches!(self, TinkoffError::WrongEnvironment { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_environment_display() {
        let error = TinkoffError::WrongEnvironment {
            operation: "sandbox_register",
        };
        assert_eq!(error.to_string(), "Only sandbox method: sandbox_register");
        assert!(error.is_wrong_environment());
        assert!(!error.is_transport());
    }

    #[test]
    fn test_json_error_is_transport() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = TinkoffError::from(json_error);
        assert!(error.is_transport());
    }

    #[test]
    fn test_url_error_is_not_transport() {
        let error = TinkoffError::from(url::Url::parse("not a url").unwrap_err());
        assert!(!error.is_transport());
    }
}
