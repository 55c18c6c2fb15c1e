//! Voice Session Controller
//!
//! Owns a single realtime connection handle and drives it through the
//! `(ConnectionStatus, MicPermission, muted)` state machine. Every operation
//! converts its failures into a [`VoiceError`] stored on the controller; none
//! of them return an error to the caller and none retry on their own.
//!
//! Operations take `&mut self`, so two `connect()` calls can never overlap on
//! the same controller.

use crate::{
    agent::AgentProfile,
    broker_client::SessionSource,
    error::VoiceError,
    microphone::{MicrophoneAccess, PermissionState},
    session::SessionCredential,
    status::{ConnectionStatus, MicPermission},
    transport::RealtimeTransport,
    view::SessionSnapshot,
};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub struct VoiceSessionController {
    transport: Option<Box<dyn RealtimeTransport>>,
    microphone: Arc<dyn MicrophoneAccess>,
    sessions: Arc<dyn SessionSource>,
    agent: AgentProfile,
    status: ConnectionStatus,
    mic_permission: MicPermission,
    is_muted: bool,
    is_listening: bool,
    error: Option<VoiceError>,
}

impl VoiceSessionController {
    /// Creates a controller in the `disconnected` × `unknown` state.
    ///
    /// `transport` is the connection handle the controller will own; without
    /// one, `connect()` refuses to run. The agent defaults to
    /// [`AgentProfile::default`].
    pub fn new(
        transport: Option<Box<dyn RealtimeTransport>>,
        microphone: Arc<dyn MicrophoneAccess>,
        sessions: Arc<dyn SessionSource>,
    ) -> Self {
        Self {
            transport,
            microphone,
            sessions,
            agent: AgentProfile::default(),
            status: ConnectionStatus::Disconnected,
            mic_permission: MicPermission::Unknown,
            is_muted: false,
            is_listening: false,
            error: None,
        }
    }

    pub fn with_agent(mut self, agent: AgentProfile) -> Self {
        self.agent = agent;
        self
    }

    pub fn agent(&self) -> &AgentProfile {
        &self.agent
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn mic_permission(&self) -> MicPermission {
        self.mic_permission
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn is_listening(&self) -> bool {
        self.is_listening
    }

    pub fn error(&self) -> Option<&VoiceError> {
        self.error.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            status: self.status,
            mic_permission: self.mic_permission,
            is_muted: self.is_muted,
            is_listening: self.is_listening,
            error: self.error.as_ref().map(ToString::to_string),
        }
    }

    /// Passive permission check run when the page mounts. Never prompts.
    pub async fn mount(&mut self) {
        self.check_permission(false).await;
    }

    /// Actively prompts for microphone access. Returns whether it was granted.
    pub async fn request_permission(&mut self) -> bool {
        info!("Explicitly requesting microphone permission");
        self.check_permission(true).await == MicPermission::Granted
    }

    /// Runs a passive or prompting check and returns the resulting permission.
    ///
    /// Every outcome other than `Granted` records an error, except the passive
    /// `Denied`/`Unknown` answers, which are not failures.
    async fn check_permission(&mut self, prompt: bool) -> MicPermission {
        if prompt {
            self.mic_permission = MicPermission::Checking;
        }

        if !self.microphone.supports_capture() {
            self.mic_permission = MicPermission::Error;
            self.error = Some(VoiceError::UnsupportedBrowser);
            return self.mic_permission;
        }

        if !prompt {
            match self.microphone.query_permission().await {
                Ok(PermissionState::Denied) => self.mic_permission = MicPermission::Denied,
                Ok(PermissionState::Granted) => {
                    self.mic_permission = MicPermission::Granted;
                    self.error = None;
                }
                Ok(PermissionState::Prompt) => self.mic_permission = MicPermission::Unknown,
                Err(e) => warn!(error = %e, "Permission query not supported"),
            }
            return self.mic_permission;
        }

        match self.microphone.open_stream().await {
            Ok(mut stream) => {
                stream.stop_all_tracks();
                self.mic_permission = MicPermission::Granted;
                self.error = None;
                info!("Microphone permission granted");
            }
            Err(e) => {
                error!(error = %e, "Microphone permission error");
                let err = VoiceError::from(e);
                self.mic_permission = err.permission_state();
                self.error = Some(err);
            }
        }
        self.mic_permission
    }

    /// Opens the realtime connection.
    ///
    /// Re-prompts for the microphone first and only proceeds when permission
    /// is exactly `granted`. Permission problems land in `disconnected`;
    /// broker and transport problems land in `error`.
    #[instrument(name = "voice_connect", skip_all)]
    pub async fn connect(&mut self) -> ConnectionStatus {
        self.error = None;
        self.status = ConnectionStatus::Connecting;

        if self.transport.is_none() {
            self.error = Some(VoiceError::MissingConnectionHandle);
            self.status = ConnectionStatus::Disconnected;
            return self.status;
        }

        let permission = self.check_permission(true).await;
        if permission != MicPermission::Granted {
            warn!(%permission, "Microphone permission not granted, aborting connection");
            self.status = ConnectionStatus::Disconnected;
            return self.status;
        }

        match self.open_session().await {
            Ok(()) => {
                self.status = ConnectionStatus::Connected;
                self.is_listening = true;
                self.is_muted = false;
                info!("Connected to the realtime session");
            }
            Err(e) => {
                error!(error = %e, "Connection error");
                self.error = Some(e);
                self.status = ConnectionStatus::Error;
            }
        }
        self.status
    }

    async fn open_session(&mut self) -> Result<(), VoiceError> {
        let payload = self.sessions.fetch_session().await?;
        let credential =
            SessionCredential::from_payload(&payload).ok_or(VoiceError::InvalidSessionPayload)?;

        let transport = self
            .transport
            .as_mut()
            .ok_or(VoiceError::MissingConnectionHandle)?;
        transport
            .connect(&self.agent, credential)
            .await
            .map_err(|e| VoiceError::Connection(e.to_string()))
    }

    pub fn disconnect(&mut self) {
        if let Some(transport) = self.transport.as_mut() {
            transport.close();
        }
        self.status = ConnectionStatus::Disconnected;
        self.error = None;
        self.is_listening = false;
        self.is_muted = false;
        info!("Disconnected from the session");
    }

    /// Flips the mute flag on a live connection and returns the resulting value.
    ///
    /// If the transport rejects the change the flag is restored and a
    /// mute-toggle error is recorded. Does nothing unless connected.
    pub fn toggle_mute(&mut self) -> bool {
        if self.status != ConnectionStatus::Connected {
            return self.is_muted;
        }
        let Some(transport) = self.transport.as_mut() else {
            return self.is_muted;
        };

        let muted = !self.is_muted;
        self.is_muted = muted;
        match transport.mute(muted) {
            Ok(()) => info!(muted, "Session mute toggled"),
            Err(e) => {
                error!(error = %e, "Error toggling mute");
                self.is_muted = !muted;
                self.error = Some(VoiceError::MuteToggle { muting: muted });
            }
        }
        self.is_muted
    }
}

impl Drop for VoiceSessionController {
    fn drop(&mut self) {
        if let Some(transport) = self.transport.as_mut() {
            transport.close();
        }
    }
}
