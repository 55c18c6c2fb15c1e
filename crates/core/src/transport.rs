//! The realtime connection handle, treated as an opaque transport.

use crate::{agent::AgentProfile, session::SessionCredential};
use anyhow::Result;
use async_trait::async_trait;

/// A bidirectional audio/control channel to the voice provider.
///
/// Implementations wrap whatever SDK actually speaks the realtime protocol;
/// the controller only needs to open, close and mute it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RealtimeTransport: Send {
    /// Opens the connection as `agent`, consuming the ephemeral credential.
    async fn connect(&mut self, agent: &AgentProfile, credential: SessionCredential) -> Result<()>;

    fn close(&mut self);

    fn mute(&mut self, muted: bool) -> Result<()>;
}
