//! Seam over the host platform's microphone permission and capture APIs.

use crate::error::MediaError;
use async_trait::async_trait;

/// Answer from the platform's passive permission query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    /// The user has not decided yet; asking would show a prompt.
    Prompt,
}

/// A live capture stream. Only ever opened to test for permission.
#[cfg_attr(test, mockall::automock)]
pub trait MediaStream: Send {
    /// Stops every track so the device is released.
    fn stop_all_tracks(&mut self);
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MicrophoneAccess: Send + Sync {
    /// Whether the platform can capture audio at all.
    fn supports_capture(&self) -> bool;

    /// Queries the current permission without prompting.
    ///
    /// An `Err` means the platform has no permission query API; callers
    /// treat it as "no answer" rather than a failure.
    async fn query_permission(&self) -> Result<PermissionState, MediaError>;

    /// Opens an audio capture stream, prompting the user if needed.
    async fn open_stream(&self) -> Result<Box<dyn MediaStream>, MediaError>;
}
