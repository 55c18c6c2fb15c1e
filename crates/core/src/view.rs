//! UI view model derived from the controller state.
//!
//! Permission problems take priority over connection status in every label,
//! so a blocked microphone is never hidden behind "Disconnected".

use crate::status::{ConnectionStatus, MicPermission};
use serde::Serialize;
use std::fmt;

/// Point-in-time copy of the controller state, suitable for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub status: ConnectionStatus,
    pub mic_permission: MicPermission,
    pub is_muted: bool,
    pub is_listening: bool,
    pub error: Option<String>,
}

/// Short status badge shown next to the status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Badge {
    Muted,
    Live,
    Connecting,
    Blocked,
    Error,
    Checking,
    Offline,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Badge::Muted => "MUTED",
            Badge::Live => "LIVE",
            Badge::Connecting => "CONNECTING",
            Badge::Blocked => "BLOCKED",
            Badge::Error => "ERROR",
            Badge::Checking => "CHECKING",
            Badge::Offline => "OFFLINE",
        };
        f.write_str(label)
    }
}

/// The action the UI should offer as its main control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrimaryControl {
    /// Connected: mute toggle plus "End Call".
    MuteAndHangUp { muted: bool },
    /// Re-prompt after a denial.
    GrantPermission,
    /// A prompt is in flight; the control is disabled.
    CheckingPermission,
    /// Re-prompt after a device or platform error.
    FixMicrophone,
    /// Permission never asked for yet.
    CheckAccess,
    /// Start a session. Disabled while a connection attempt is in flight.
    StartSession { enabled: bool },
}

impl SessionSnapshot {
    pub fn status_text(&self) -> &'static str {
        match self.mic_permission {
            MicPermission::Denied => return "Microphone Access Denied",
            MicPermission::Checking => return "Checking Microphone...",
            MicPermission::Error => return "Microphone Error",
            _ => {}
        }
        match self.status {
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Error => "Connection Failed",
            ConnectionStatus::Disconnected if self.mic_permission == MicPermission::Granted => {
                "Ready to Connect"
            }
            ConnectionStatus::Disconnected => "Disconnected",
        }
    }

    pub fn badge(&self) -> Badge {
        match (self.status, self.mic_permission) {
            (ConnectionStatus::Connected, _) if self.is_muted => Badge::Muted,
            (ConnectionStatus::Connected, _) => Badge::Live,
            (ConnectionStatus::Connecting, _) => Badge::Connecting,
            (_, MicPermission::Denied) => Badge::Blocked,
            (_, MicPermission::Error) => Badge::Error,
            (_, MicPermission::Checking) => Badge::Checking,
            _ => Badge::Offline,
        }
    }

    /// One-line prompt shown under the microphone indicator.
    pub fn hint(&self) -> &'static str {
        match (self.status, self.mic_permission) {
            (ConnectionStatus::Connected, _) if self.is_muted => {
                "Microphone muted - Click unmute to speak"
            }
            (ConnectionStatus::Connected, _) => "Listening for your voice...",
            (ConnectionStatus::Connecting, _) => "Establishing connection...",
            (_, MicPermission::Checking) => "Checking microphone access...",
            (_, MicPermission::Denied) => "Microphone access required",
            (_, MicPermission::Error) => "Microphone error detected",
            (_, MicPermission::Granted) => "Ready to connect",
            (_, MicPermission::Unknown) => "Microphone access needed",
        }
    }

    /// Whether the pulsing "listening" indicator should be drawn.
    pub fn shows_listening_pulse(&self) -> bool {
        self.status == ConnectionStatus::Connected && self.is_listening && !self.is_muted
    }

    pub fn primary_control(&self) -> PrimaryControl {
        if self.status == ConnectionStatus::Connected {
            return PrimaryControl::MuteAndHangUp {
                muted: self.is_muted,
            };
        }
        match self.mic_permission {
            MicPermission::Denied => PrimaryControl::GrantPermission,
            MicPermission::Checking => PrimaryControl::CheckingPermission,
            MicPermission::Error => PrimaryControl::FixMicrophone,
            MicPermission::Unknown => PrimaryControl::CheckAccess,
            MicPermission::Granted => PrimaryControl::StartSession {
                enabled: self.status != ConnectionStatus::Connecting,
            },
        }
    }
}
