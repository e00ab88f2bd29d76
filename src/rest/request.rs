//! Declarative request descriptor.
//!
//! Every endpoint method describes its call as a [`Request`] and hands it to
//! the client. GET parameters always go to the query string. POST business
//! parameters go to the JSON body, except identifiers (`figi`, `orderId`,
//! `brokerAccountId`) which the API reads from the query string.

use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;

use crate::error::TinkoffError;
use crate::types::serde_helpers::format_datetime;

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HttpMethod {
    Get,
    Post,
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A single API call: method, path, ordered query parameters and optional body.
#[derive(Debug, Clone)]
pub(crate) struct Request {
    method: HttpMethod,
    path: &'static str,
    query: Vec<(&'static str, String)>,
    body: Option<Value>,
}

impl Request {
    /// Describe a GET request.
    pub(crate) fn get(path: &'static str) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Describe a POST request.
    pub(crate) fn post(path: &'static str) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    fn new(method: HttpMethod, path: &'static str) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter.
    pub(crate) fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Append a query parameter only when it is present and non-empty.
    pub(crate) fn query_opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Append a timestamp query parameter in the API date format.
    pub(crate) fn query_datetime(
        self,
        key: &'static str,
        value: &OffsetDateTime,
    ) -> Result<Self, TinkoffError> {
        let formatted = format_datetime(value)?;
        Ok(self.query(key, formatted))
    }

    /// Attach a JSON body.
    pub(crate) fn json<B: Serialize>(mut self, body: &B) -> Result<Self, TinkoffError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub(crate) fn method(&self) -> HttpMethod {
        self.method
    }

    pub(crate) fn path(&self) -> &'static str {
        self.path
    }

    pub(crate) fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// URL-encoded query string, empty when there are no parameters.
    pub(crate) fn query_string(&self) -> Result<String, TinkoffError> {
        Ok(serde_urlencoded::to_string(&self.query)?)
    }

    #[cfg(test)]
    pub(crate) fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }
}
