//! Tinkoff OpenAPI REST client implementation.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use url::Url;

use crate::auth::{StaticToken, TokenProvider};
use crate::error::TinkoffError;
use crate::rest::endpoints::{PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
use crate::rest::request::{HttpMethod, Request};
use crate::rest::response::ResponseMap;

/// API environment the client talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Isolated test environment with its own accounts (default)
    #[default]
    Sandbox,
    /// Real brokerage
    Production,
}

impl Environment {
    /// Map the classic `sandbox` flag onto an environment.
    pub fn from_sandbox_flag(sandbox: bool) -> Self {
        if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// Base URL of the environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }

    /// Check if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl FromStr for Environment {
    type Err = TinkoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(TinkoffError::Config(format!("unknown environment '{other}'"))),
        }
    }
}

/// What to do when a request fails below the HTTP envelope level.
///
/// Transport failures are connection errors, timeouts, and bodies that are
/// empty or not a JSON object. HTTP error statuses carrying an envelope are
/// never transport failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TransportPolicy {
    /// Collapse transport failures into an empty [`ResponseMap`] (default)
    #[default]
    Permissive,
    /// Return transport failures as [`TinkoffError`]
    Strict,
}

/// The Tinkoff OpenAPI REST client.
///
/// Every endpoint method issues exactly one HTTP request and returns the
/// decoded response envelope. The client holds no mutable state, so it can
/// be cloned and shared across tasks.
///
/// # Example
///
/// ```rust,no_run
/// use tinkoff_open_api::rest::{Environment, ResponseExt, TinkoffClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TinkoffClient::new("t.my_token", Environment::Sandbox);
///
///     let stocks = client.market_stocks().await?;
///     if stocks.is_ok() {
///         println!("{:?}", stocks.payload());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct TinkoffClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    environment: Environment,
    token: Arc<dyn TokenProvider>,
    transport_policy: TransportPolicy,
}

impl TinkoffClient {
    /// Create a new client for the given environment.
    ///
    /// The base URL is fixed for the lifetime of the client.
    pub fn new(token: impl Into<String>, environment: Environment) -> Self {
        Self::builder(token).environment(environment).build()
    }

    /// Create a sandbox client.
    pub fn sandbox(token: impl Into<String>) -> Self {
        Self::new(token, Environment::Sandbox)
    }

    /// Create a production client.
    pub fn production(token: impl Into<String>) -> Self {
        Self::new(token, Environment::Production)
    }

    /// Create a new client builder.
    pub fn builder(token: impl Into<String>) -> TinkoffClientBuilder {
        TinkoffClientBuilder::new(Arc::new(StaticToken::new(token)))
    }

    /// The environment this client was built for.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The resolved base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The transport failure policy.
    pub fn transport_policy(&self) -> TransportPolicy {
        self.transport_policy
    }

    /// Reject sandbox-only operations on a production client.
    ///
    /// This is a configuration check only; no request is made.
    pub(crate) fn ensure_sandbox(&self, operation: &'static str) -> Result<(), TinkoffError> {
        if self.environment.is_sandbox() {
            Ok(())
        } else {
            Err(TinkoffError::WrongEnvironment { operation })
        }
    }

    /// Execute a request, applying the transport policy.
    pub(crate) async fn execute(&self, request: Request) -> Result<ResponseMap, TinkoffError> {
        match self.send(&request).await {
            Ok(response) => Ok(response),
            Err(e) if e.is_transport() && self.transport_policy == TransportPolicy::Permissive => {
                tracing::warn!(
                    method = %request.method(),
                    path = request.path(),
                    error = %e,
                    "request failed, returning empty response"
                );
                Ok(ResponseMap::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn send(&self, request: &Request) -> Result<ResponseMap, TinkoffError> {
        let url = self.request_url(request)?;
        let builder = match request.method() {
            HttpMethod::Get => self.http_client.get(url),
            HttpMethod::Post => self.http_client.post(url),
        };
        let mut builder = builder.header(AUTHORIZATION, self.token.token().bearer());
        if let Some(body) = request.body() {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        // Error statuses still carry the envelope, so the body is read either way.
        let body = response.text().await?;
        tracing::debug!(
            method = %request.method(),
            path = request.path(),
            status = status.as_u16(),
            "response received"
        );

        parse_response_body(&body)
    }

    fn request_url(&self, request: &Request) -> Result<Url, TinkoffError> {
        let mut url = Url::parse(&self.base_url)?.join(request.path())?;
        let query = request.query_string()?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }
}

/// Decode a response body into a JSON object.
fn parse_response_body(body: &str) -> Result<ResponseMap, TinkoffError> {
    if body.trim().is_empty() {
        return Err(TinkoffError::InvalidResponse("empty body".to_string()));
    }
    match serde_json::from_str(body)? {
        Value::Object(map) => Ok(map),
        other => Err(TinkoffError::InvalidResponse(format!(
            "expected a JSON object, got: {}",
            other
        ))),
    }
}

impl std::fmt::Debug for TinkoffClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TinkoffClient")
            .field("base_url", &self.base_url)
            .field("environment", &self.environment)
            .field("transport_policy", &self.transport_policy)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// Builder for [`TinkoffClient`].
pub struct TinkoffClientBuilder {
    token: Arc<dyn TokenProvider>,
    environment: Environment,
    base_url: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    transport_policy: TransportPolicy,
}

impl TinkoffClientBuilder {
    /// Create a new builder with default settings.
    pub fn new(token: Arc<dyn TokenProvider>) -> Self {
        Self {
            token,
            environment: Environment::default(),
            base_url: None,
            user_agent: None,
            timeout: None,
            transport_policy: TransportPolicy::default(),
        }
    }

    /// Set the environment (sandbox by default).
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Override the base URL (useful for testing with a mock server).
    ///
    /// The sandbox-only guard still follows [`environment`](Self::environment).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Replace the token provider.
    pub fn token_provider(mut self, token: Arc<dyn TokenProvider>) -> Self {
        self.token = token;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a per-request timeout on the underlying HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the transport failure policy.
    pub fn transport_policy(mut self, policy: TransportPolicy) -> Self {
        self.transport_policy = policy;
        self
    }

    /// Build the client.
    pub fn build(self) -> TinkoffClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("tinkoff-open-api/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("tinkoff-open-api"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        // No retry middleware: each call is exactly one request.
        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        let mut base_url = self
            .base_url
            .unwrap_or_else(|| self.environment.base_url().to_string());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        TinkoffClient {
            http_client: client,
            base_url,
            environment: self.environment,
            token: self.token,
            transport_policy: self.transport_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(
            TinkoffClient::sandbox("t").base_url(),
            "https://api-invest.tinkoff.ru/openapi/sandbox/"
        );
        assert_eq!(
            TinkoffClient::production("t").base_url(),
            "https://api-invest.tinkoff.ru/openapi/"
        );
        assert_eq!(Environment::from_sandbox_flag(true), Environment::Sandbox);
        assert_eq!(Environment::from_sandbox_flag(false), Environment::Production);
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("Sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_base_url_override_gets_trailing_slash() {
        let client = TinkoffClient::builder("t")
            .base_url("http://127.0.0.1:9000")
            .build();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn test_request_url_joins_path_and_query() {
        let client = TinkoffClient::sandbox("t");
        let request = Request::get("market/orderbook")
            .query("figi", "BBG000B9XRY4")
            .query("depth", 3);
        let url = client.request_url(&request).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api-invest.tinkoff.ru/openapi/sandbox/market/orderbook?figi=BBG000B9XRY4&depth=3"
        );
    }

    #[test]
    fn test_request_url_without_query() {
        let client = TinkoffClient::production("t");
        let url = client.request_url(&Request::get("market/stocks")).unwrap();
        assert_eq!(url.as_str(), "https://api-invest.tinkoff.ru/openapi/market/stocks");
    }

    #[test]
    fn test_ensure_sandbox() {
        assert!(TinkoffClient::sandbox("t").ensure_sandbox("sandbox_clear").is_ok());
        let err = TinkoffClient::production("t")
            .ensure_sandbox("sandbox_clear")
            .unwrap_err();
        assert!(err.is_wrong_environment());
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = TinkoffClient::sandbox("t.super_secret");
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_parse_response_body() {
        let map = parse_response_body(r#"{"status":"Ok","payload":{}}"#).unwrap();
        assert_eq!(map["status"], "Ok");
        assert!(parse_response_body("").unwrap_err().is_transport());
        assert!(parse_response_body("<html>").unwrap_err().is_transport());
        assert!(parse_response_body("[1,2]").unwrap_err().is_transport());
    }
}
