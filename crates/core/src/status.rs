//! Connection and microphone status enums driving the voice session state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of the single realtime connection owned by a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Error,
}

/// What the host platform has told us about microphone access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MicPermission {
    #[default]
    Unknown,
    Checking,
    Granted,
    Denied,
    Error,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Disconnected => write!(f, "disconnected"),
            ConnectionStatus::Connecting => write!(f, "connecting"),
            ConnectionStatus::Connected => write!(f, "connected"),
            ConnectionStatus::Error => write!(f, "error"),
        }
    }
}

impl fmt::Display for MicPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MicPermission::Unknown => write!(f, "unknown"),
            MicPermission::Checking => write!(f, "checking"),
            MicPermission::Granted => write!(f, "granted"),
            MicPermission::Denied => write!(f, "denied"),
            MicPermission::Error => write!(f, "error"),
        }
    }
}
