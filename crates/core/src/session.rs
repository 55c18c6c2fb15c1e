//! Session credential and the JSON envelope exchanged with the session broker.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An ephemeral realtime credential minted by the upstream provider.
///
/// Consumed by value when a connection is opened, so one credential backs at
/// most one connection attempt. The value is redacted from `Debug` output.
#[derive(Debug)]
pub struct SessionCredential(SecretString);

impl SessionCredential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// Extracts `client_secret.value` from an upstream session payload.
    ///
    /// Returns `None` when the field is missing, not a string, or empty.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        payload
            .get("client_secret")?
            .get("value")?
            .as_str()
            .filter(|value| !value.is_empty())
            .map(Self::new)
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Body of every `/api/session` response.
///
/// Success carries `data`; failure carries `error` and, for upstream
/// failures, the upstream response `headers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SessionEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

impl SessionEnvelope {
    pub fn success(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Default::default()
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_credential_from_payload() {
        let payload = json!({ "id": "sess_1", "client_secret": { "value": "abc", "expires_at": 1 } });
        let credential = SessionCredential::from_payload(&payload).expect("secret present");
        assert_eq!(credential.expose(), "abc");
    }

    #[test]
    fn test_credential_rejects_unusable_payloads() {
        for payload in [
            json!(null),
            json!({}),
            json!({ "client_secret": null }),
            json!({ "client_secret": {} }),
            json!({ "client_secret": { "value": 42 } }),
            json!({ "client_secret": { "value": "" } }),
        ] {
            assert!(SessionCredential::from_payload(&payload).is_none(), "{payload}");
        }
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = SessionCredential::new("super-secret");
        assert!(!format!("{credential:?}").contains("super-secret"));
    }

    #[test]
    fn test_envelope_omits_absent_fields() {
        let body = serde_json::to_value(SessionEnvelope::failure("API key not configured")).unwrap();
        assert_eq!(body, json!({ "error": "API key not configured" }));

        let headers = BTreeMap::from([("x-request-id".to_string(), "req_1".to_string())]);
        let body = serde_json::to_value(SessionEnvelope::failure("nope").with_headers(headers)).unwrap();
        assert_eq!(body, json!({ "error": "nope", "headers": { "x-request-id": "req_1" } }));
    }

    #[test]
    fn test_envelope_parses_success_body() {
        let envelope: SessionEnvelope =
            serde_json::from_value(json!({ "data": { "client_secret": { "value": "abc" } } })).unwrap();
        assert!(envelope.error.is_none());
        let credential = SessionCredential::from_payload(envelope.data.as_ref().unwrap());
        assert_eq!(credential.unwrap().expose(), "abc");
    }
}
