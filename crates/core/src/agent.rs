//! Persona handed to the realtime transport when a session opens.

use serde::{Deserialize, Serialize};

const DEFAULT_NAME: &str = "Assistant";

const DEFAULT_INSTRUCTIONS: &str = "You are a helpful and respectful voice assistant that communicates in English and responds to voice commands in a natural, conversational manner. You are specialized in providing information about robots — including their technologies, types, components, applications, behavior, and real-world use cases. Users can ask you anything related to robotics, from industrial robots to humanoid, autonomous, or AI-powered systems. You must never generate or respond with any offensive, inappropriate, or harmful content. Always prioritize user safety and well-being. If you are unsure about a request or if it's unrelated to robotics, politely decline to assist or redirect the user appropriately.";

/// Name and system instructions of the voice agent.
///
/// The default is the robotics assistant served on the voice agent page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub name: String,
    pub instructions: String,
}

impl AgentProfile {
    pub fn new(name: impl Into<String>, instructions: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
        }
    }
}

impl Default for AgentProfile {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_INSTRUCTIONS)
    }
}
