pub mod agent;
pub mod broker_client;
pub mod controller;
pub mod error;
pub mod microphone;
pub mod session;
pub mod status;
pub mod transport;
pub mod view;

pub use agent::AgentProfile;
pub use broker_client::{BrokerClient, SessionSource};
pub use controller::VoiceSessionController;
pub use error::{MediaError, MediaErrorKind, VoiceError};
pub use microphone::{MediaStream, MicrophoneAccess, PermissionState};
pub use session::{SessionCredential, SessionEnvelope};
pub use status::{ConnectionStatus, MicPermission};
pub use transport::RealtimeTransport;
pub use view::{Badge, PrimaryControl, SessionSnapshot};
