//! Upstream request models.

use serde::Serialize;
use utoipa::ToSchema;

/// Body of the upstream `POST /realtime/sessions` call.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct CreateRealtimeSessionRequest {
    #[schema(example = "gpt-4o-realtime-preview-2025-06-03")]
    pub model: String,
    #[schema(example = "verse")]
    pub voice: String,
}
