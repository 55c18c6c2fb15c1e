//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the configuration
//! and the upstream session provider shared by all handlers.

use crate::{
    config::Config,
    provider::{OpenAIRealtimeSessions, RealtimeSessionProvider},
};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<dyn RealtimeSessionProvider>,
}

impl AppState {
    /// Builds the state with the OpenAI-backed provider described by `config`.
    pub fn from_config(config: Config) -> Self {
        let sessions = Arc::new(OpenAIRealtimeSessions::from_config(&config));
        Self {
            config: Arc::new(config),
            sessions,
        }
    }
}
