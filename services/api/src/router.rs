//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the session broker endpoint and OpenAPI documentation.

use crate::{handlers, models::CreateRealtimeSessionRequest, state::AppState};

use axum::{Router, routing::get};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use vibos_core::SessionEnvelope;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::create_realtime_session),
    components(schemas(SessionEnvelope, CreateRealtimeSessionRequest)),
    tags(
        (name = "vibOS API", description = "Ephemeral realtime session broker for the vibOS voice agent")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/api/session", get(handlers::create_realtime_session))
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
