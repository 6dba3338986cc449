use super::{CharacterSource, RegistryResult};
use shared::models::Character;

/// Parses an in-memory JSON array of character records. Fetching the
/// document (file, database, network) is the caller's job; this source does
/// no I/O of its own.
pub struct JsonSource {
    document: String,
}

impl JsonSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl CharacterSource for JsonSource {
    fn load(&self) -> RegistryResult<Vec<Character>> {
        let characters: Vec<Character> = serde_json::from_str(&self.document)?;
        Ok(characters)
    }
}
