use super::message::ChatMessage;
use serde::{Deserialize, Serialize};

/// An incoming chat request from the client. Transient, constructed per
/// request, never persisted by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub character_id: String,
    pub user_message: String,
    /// Conversation so far, oldest first. Consumed by the generation step,
    /// not by the predefined-response lookup.
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// The outgoing chat response to the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub character_id: String,
    pub response_text: String,
    /// Filled in by a downstream text-to-speech step.
    #[serde(default)]
    pub audio_url: Option<String>,
    pub is_predefined: bool,
}
