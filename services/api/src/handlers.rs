//! Axum Handlers for the REST API
//!
//! The broker exposes a single endpoint. It attaches the server-held
//! credential, asks upstream for an ephemeral realtime session and relays the
//! result. Upstream failures keep their status code.

use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{error, info};
use vibos_core::SessionEnvelope;

use crate::{error::BrokerError, state::AppState};

/// Mint an ephemeral realtime session for the browser.
#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Upstream session payload under `data`", body = SessionEnvelope),
        (status = 500, description = "Credential missing or upstream unreachable", body = SessionEnvelope),
        (status = "4XX", description = "Upstream rejected the request; status and body are relayed", body = SessionEnvelope)
    )
)]
pub async fn create_realtime_session(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionEnvelope>, BrokerError> {
    let Some(api_key) = state.config.openai_api_key.as_deref() else {
        error!("OPENAI_API_KEY environment variable is not set");
        return Err(BrokerError::MissingApiKey);
    };

    let data = state.sessions.create_session(api_key).await?;
    info!(model = %state.config.realtime_model, "Realtime session created");
    Ok(Json(SessionEnvelope::success(data)))
}
