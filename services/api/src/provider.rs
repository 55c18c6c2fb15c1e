//! Upstream realtime session creation.

use crate::{config::Config, error::BrokerError, models::CreateRealtimeSessionRequest};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, error};

/// Mints ephemeral realtime sessions on behalf of the browser.
#[async_trait]
pub trait RealtimeSessionProvider: Send + Sync {
    /// Creates a session authorized by `api_key` and returns the upstream
    /// payload untouched.
    async fn create_session(&self, api_key: &str) -> Result<Value, BrokerError>;
}

/// `RealtimeSessionProvider` backed by the OpenAI REST API.
pub struct OpenAIRealtimeSessions {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    voice: String,
}

impl OpenAIRealtimeSessions {
    /// Creates a provider for the API rooted at `api_base`
    /// (e.g. `https://api.openai.com/v1`).
    pub fn new(api_base: &str, model: String, voice: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/realtime/sessions", api_base.trim_end_matches('/')),
            model,
            voice,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.api_base,
            config.realtime_model.clone(),
            config.realtime_voice.clone(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

#[async_trait]
impl RealtimeSessionProvider for OpenAIRealtimeSessions {
    async fn create_session(&self, api_key: &str) -> Result<Value, BrokerError> {
        let request = CreateRealtimeSessionRequest {
            model: self.model.clone(),
            voice: self.voice.clone(),
        };
        debug!(model = %request.model, voice = %request.voice, "Creating realtime session");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to reach realtime session endpoint")
            .map_err(BrokerError::Internal)?;

        let status = response.status();
        if !status.is_success() {
            let headers = header_map(response.headers());
            let body = response
                .text()
                .await
                .context("Failed to read upstream error body")
                .map_err(BrokerError::Internal)?;
            error!(status = status.as_u16(), body = %body, "OpenAI API Error");
            error!(headers = ?headers, "Response Headers");
            return Err(BrokerError::Upstream {
                status: status.as_u16(),
                body,
                headers,
            });
        }

        response
            .json::<Value>()
            .await
            .context("Failed to decode realtime session payload")
            .map_err(BrokerError::Internal)
    }
}
