//! Broker failures and their HTTP rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::collections::BTreeMap;
use tracing::error;
use vibos_core::SessionEnvelope;

#[derive(Debug, thiserror::Error)]
pub enum BrokerError {
    /// No upstream credential is configured.
    #[error("API key not configured")]
    MissingApiKey,
    /// Upstream answered with a non-success status; relayed as-is.
    #[error("OpenAI API Error: {status} - {body}")]
    Upstream {
        status: u16,
        body: String,
        headers: BTreeMap<String, String>,
    },
    /// Network or decoding failure talking to upstream.
    #[error("Failed to create realtime session")]
    Internal(anyhow::Error),
}

impl IntoResponse for BrokerError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            BrokerError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SessionEnvelope::failure(message)),
            )
                .into_response(),
            BrokerError::Upstream {
                status, headers, ..
            } => {
                let status =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (
                    status,
                    Json(SessionEnvelope::failure(message).with_headers(headers)),
                )
                    .into_response()
            }
            BrokerError::Internal(err) => {
                error!("Error creating realtime session: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(SessionEnvelope::failure(message)),
                )
                    .into_response()
            }
        }
    }
}
