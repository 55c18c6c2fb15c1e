//! Error taxonomy surfaced to the UI layer.
//!
//! Every failure the controller can hit is converted into a [`VoiceError`]
//! whose `Display` output is the user-facing message. Nothing is retried
//! automatically; the UI offers a retry control instead.

use crate::status::MicPermission;

/// A failure reported by the platform's media-capture subsystem.
///
/// `name` carries the platform error name (e.g. `NotAllowedError`), which is
/// what classification is based on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{name}: {message}")]
pub struct MediaError {
    pub name: String,
    pub message: String,
}

/// Coarse categories of microphone acquisition failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaErrorKind {
    Denied,
    NoDevice,
    DeviceBusy,
    Other,
}

impl MediaError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> MediaErrorKind {
        match self.name.as_str() {
            "NotAllowedError" | "PermissionDeniedError" => MediaErrorKind::Denied,
            "NotFoundError" | "DevicesNotFoundError" => MediaErrorKind::NoDevice,
            "NotReadableError" => MediaErrorKind::DeviceBusy,
            _ => MediaErrorKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoiceError {
    #[error(
        "Microphone access denied. Please click 'Allow' when the browser prompts you, or check your browser settings."
    )]
    PermissionDenied,
    #[error("No microphone found. Please connect a microphone and try again.")]
    NoMicrophone,
    #[error(
        "Microphone is already in use by another application. Please close other applications using the microphone and try again."
    )]
    DeviceInUse,
    #[error("Microphone error: {0}")]
    Microphone(String),
    #[error(
        "Your browser doesn't support microphone access. Please use a modern browser like Chrome, Firefox, or Safari."
    )]
    UnsupportedBrowser,
    #[error("No connection reference available")]
    MissingConnectionHandle,
    #[error("Failed to create session: {0}")]
    SessionFetch(String),
    #[error("Invalid session data received")]
    InvalidSessionPayload,
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Failed to {} the session", mute_verb(.muting))]
    MuteToggle { muting: bool },
}

fn mute_verb(muting: &bool) -> &'static str {
    if *muting { "mute" } else { "unmute" }
}

impl VoiceError {
    /// The microphone permission state a failure leaves behind.
    ///
    /// Only meaningful for errors raised while acquiring the microphone.
    pub fn permission_state(&self) -> MicPermission {
        match self {
            VoiceError::PermissionDenied => MicPermission::Denied,
            _ => MicPermission::Error,
        }
    }
}

impl From<MediaError> for VoiceError {
    fn from(err: MediaError) -> Self {
        match err.kind() {
            MediaErrorKind::Denied => VoiceError::PermissionDenied,
            MediaErrorKind::NoDevice => VoiceError::NoMicrophone,
            MediaErrorKind::DeviceBusy => VoiceError::DeviceInUse,
            MediaErrorKind::Other => VoiceError::Microphone(err.message),
        }
    }
}
