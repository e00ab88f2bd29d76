//! Response envelope helpers.
//!
//! The API wraps every response, successful or not, in
//! `{ "status": "Ok" | "Error", "payload": ..., "trackingId": "..." }`.
//! The client returns the decoded body as a plain [`ResponseMap`] and never
//! validates that shape; these helpers let callers inspect it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TinkoffError;

/// Decoded response body.
///
/// Empty when the request failed at the transport level under
/// [`TransportPolicy::Permissive`](super::TransportPolicy).
pub type ResponseMap = serde_json::Map<String, Value>;

/// Envelope status reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// Typed view of a response envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Envelope status.
    pub status: ResponseStatus,
    /// Endpoint-specific payload.
    pub payload: T,
    /// Request tracking identifier, useful for support requests.
    #[serde(default)]
    pub tracking_id: Option<String>,
}

/// Payload of an envelope with `"status": "Error"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
}

/// Envelope accessors for [`ResponseMap`].
pub trait ResponseExt {
    /// Envelope status, `None` when absent or unrecognised.
    fn status(&self) -> Option<ResponseStatus>;

    /// Envelope payload.
    fn payload(&self) -> Option<&Value>;

    /// Tracking identifier.
    fn tracking_id(&self) -> Option<&str>;

    /// Check if the API reported success.
    fn is_ok(&self) -> bool {
        self.status() == Some(ResponseStatus::Ok)
    }

    /// Check if the API reported an error.
    fn is_error(&self) -> bool {
        self.status() == Some(ResponseStatus::Error)
    }

    /// Error details when the API reported an error.
    fn error_payload(&self) -> Option<ErrorPayload>;

    /// Decode the whole envelope with a typed payload.
    fn into_envelope<T: DeserializeOwned>(self) -> Result<Envelope<T>, TinkoffError>;
}

impl ResponseExt for ResponseMap {
    fn status(&self) -> Option<ResponseStatus> {
        match self.get("status")?.as_str()? {
            "Ok" => Some(ResponseStatus::Ok),
            "Error" => Some(ResponseStatus::Error),
            _ => None,
        }
    }

    fn payload(&self) -> Option<&Value> {
        self.get("payload")
    }

    fn tracking_id(&self) -> Option<&str> {
        self.get("trackingId")?.as_str()
    }

    fn error_payload(&self) -> Option<ErrorPayload> {
        if !self.is_error() {
            return None;
        }
        // Error payloads missing the usual fields still count as errors.
        Some(
            self.payload()
                .and_then(|p| ErrorPayload::deserialize(p).ok())
                .unwrap_or_default(),
        )
    }

    fn into_envelope<T: DeserializeOwned>(self) -> Result<Envelope<T>, TinkoffError> {
        Ok(serde_json::from_value(Value::Object(self))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> ResponseMap {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test fixture must be an object"),
        }
    }

    #[test]
    fn test_ok_envelope() {
        let response = as_map(json!({
            "trackingId": "abc123",
            "status": "Ok",
            "payload": { "brokerAccountType": "Tinkoff", "brokerAccountId": "SB100" }
        }));
        assert!(response.is_ok());
        assert!(!response.is_error());
        assert_eq!(response.tracking_id(), Some("abc123"));
        assert_eq!(response.payload().unwrap()["brokerAccountId"], "SB100");
        assert!(response.error_payload().is_none());
    }

    #[test]
    fn test_error_envelope() {
        let response = as_map(json!({
            "trackingId": "def456",
            "status": "Error",
            "payload": { "message": "Unknown account", "code": "VALIDATION_ERROR" }
        }));
        assert!(response.is_error());
        let error = response.error_payload().unwrap();
        assert_eq!(error.message.as_deref(), Some("Unknown account"));
        assert_eq!(error.code.as_deref(), Some("VALIDATION_ERROR"));
    }

    #[test]
    fn test_empty_map_has_no_status() {
        let response = ResponseMap::new();
        assert_eq!(response.status(), None);
        assert!(!response.is_ok());
        assert!(response.payload().is_none());
    }

    #[test]
    fn test_into_typed_envelope() {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct OrderBook {
            figi: String,
            depth: u32,
        }

        let response = as_map(json!({
            "trackingId": "t1",
            "status": "Ok",
            "payload": { "figi": "BBG000B9XRY4", "depth": 3, "bids": [], "asks": [] }
        }));
        let envelope: Envelope<OrderBook> = response.into_envelope().unwrap();
        assert_eq!(envelope.status, ResponseStatus::Ok);
        assert_eq!(envelope.payload.figi, "BBG000B9XRY4");
        assert_eq!(envelope.payload.depth, 3);
    }
}
