use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    /// Behavioral instructions for a downstream generation step. Opaque here.
    pub system_prompt: String,
    /// Trigger phrase -> canned response. Keys are stored verbatim but only
    /// ever queried in lowercase, so a mixed-case key is unreachable.
    #[serde(default)]
    pub predefined_responses: HashMap<String, String>,
    /// Opaque identifier for a downstream audio-synthesis step.
    pub voice_id: String,
}
