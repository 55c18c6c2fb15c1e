//! Client side of the session broker.

use crate::{error::VoiceError, session::SessionEnvelope};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Something that can hand out fresh upstream session payloads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Returns the `data` member of a successful broker response.
    ///
    /// A broker-reported failure becomes [`VoiceError::SessionFetch`] carrying
    /// the broker's `error` string; transport failures become
    /// [`VoiceError::Connection`].
    async fn fetch_session(&self) -> Result<Value, VoiceError>;
}

/// Fetches sessions from the broker's `GET /api/session` endpoint.
pub struct BrokerClient {
    client: reqwest::Client,
    endpoint: String,
}

impl BrokerClient {
    /// Creates a client for the broker served at `base_url`
    /// (e.g. `http://localhost:3000`).
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/session", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SessionSource for BrokerClient {
    async fn fetch_session(&self) -> Result<Value, VoiceError> {
        debug!(endpoint = %self.endpoint, "Fetching session from broker");
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| VoiceError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let envelope: SessionEnvelope = match response.json().await {
                Ok(envelope) => envelope,
                Err(e) => {
                    warn!(error = %e, "Broker error body is not a session envelope");
                    SessionEnvelope::default()
                }
            };
            error!(status = status.as_u16(), error = ?envelope.error, "Session broker returned an error");
            return Err(VoiceError::SessionFetch(
                envelope.error.unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        let envelope: SessionEnvelope = response
            .json()
            .await
            .map_err(|e| VoiceError::Connection(e.to_string()))?;
        Ok(envelope.data.unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            BrokerClient::new("http://localhost:3000/").endpoint(),
            "http://localhost:3000/api/session"
        );
    }

    #[tokio::test]
    async fn test_fetch_session_returns_data() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/session"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": "sess_1", "client_secret": { "value": "abc" } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let data = BrokerClient::new(&server.uri())
            .fetch_session()
            .await
            .expect("session should be fetched");
        assert_eq!(data["client_secret"]["value"], "abc");
    }

    #[tokio::test]
    async fn test_fetch_session_surfaces_broker_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/session"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "OpenAI API Error: 401 - invalid key",
                "headers": { "x-request-id": "req_1" }
            })))
            .mount(&server)
            .await;

        let err = BrokerClient::new(&server.uri())
            .fetch_session()
            .await
            .expect_err("broker failure should surface");
        assert_eq!(
            err.to_string(),
            "Failed to create session: OpenAI API Error: 401 - invalid key"
        );
    }

    #[tokio::test]
    async fn test_fetch_session_without_error_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let err = BrokerClient::new(&server.uri())
            .fetch_session()
            .await
            .expect_err("non-success should fail");
        assert_eq!(err, VoiceError::SessionFetch("Unknown error".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_session_missing_data_is_null() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let data = BrokerClient::new(&server.uri()).fetch_session().await.unwrap();
        assert!(data.is_null());
    }
}
