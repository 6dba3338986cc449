use crate::sources::{BuiltinSource, CharacterSource, RegistryError, RegistryResult};
use shared::models::{Character, ChatRequest, ChatResponse};
use std::collections::HashMap;

/// Outcome of a predefined-response lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum PredefinedLookup {
    Matched(String),
    NotMatched,
}

impl PredefinedLookup {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    /// The canned text, or the empty string when nothing matched. Callers
    /// always get a concrete string in the no-match case.
    pub fn response_text(&self) -> &str {
        match self {
            Self::Matched(text) => text,
            Self::NotMatched => "",
        }
    }
}

/// The in-memory catalog of characters. Built once at process start and
/// read-only afterwards; there are no update or delete operations.
#[derive(Debug)]
pub struct CharacterRegistry {
    characters: HashMap<String, Character>,
}

impl CharacterRegistry {
    pub fn from_source(source: &dyn CharacterSource) -> RegistryResult<Self> {
        Self::from_characters(source.load()?)
    }

    pub fn from_characters(
        characters: impl IntoIterator<Item = Character>,
    ) -> RegistryResult<Self> {
        let mut map = HashMap::new();
        for character in characters {
            if map.contains_key(&character.id) {
                return Err(RegistryError::DuplicateId(character.id));
            }
            map.insert(character.id.clone(), character);
        }
        tracing::debug!("Registry populated with {} characters", map.len());
        Ok(Self { characters: map })
    }

    /// Registry over the builtin development seed.
    pub fn builtin() -> RegistryResult<Self> {
        Self::from_source(&BuiltinSource)
    }

    /// Exact id match, no case normalization on the id.
    pub fn get_character(&self, character_id: &str) -> RegistryResult<&Character> {
        self.characters
            .get(character_id)
            .ok_or_else(|| RegistryError::NotFound(character_id.to_string()))
    }

    /// All registered characters, sorted by id.
    pub fn characters(&self) -> Vec<&Character> {
        let mut all: Vec<&Character> = self.characters.values().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    /// Checks whether the user's message matches a predefined trigger phrase
    /// for the character. The message is trimmed and lowercased, then
    /// compared for exact equality against the stored keys; the keys
    /// themselves are never normalized. Fuzzy and regex matching are
    /// deliberately absent.
    pub fn check_predefined_response(
        &self,
        character_id: &str,
        user_message: &str,
    ) -> RegistryResult<PredefinedLookup> {
        let character = self.get_character(character_id)?;
        let normalized = user_message.trim().to_lowercase();

        match character.predefined_responses.get(&normalized) {
            Some(text) => {
                tracing::debug!("Predefined hit for '{}' on {:?}", character_id, normalized);
                Ok(PredefinedLookup::Matched(text.clone()))
            }
            None => Ok(PredefinedLookup::NotMatched),
        }
    }

    /// Short-circuits a chat request when a canned reply exists. `Ok(None)`
    /// means the caller has to run its generation step instead. The request
    /// history is not consulted here; it belongs to generation.
    pub fn respond_predefined(
        &self,
        request: &ChatRequest,
    ) -> RegistryResult<Option<ChatResponse>> {
        match self.check_predefined_response(&request.character_id, &request.user_message)? {
            PredefinedLookup::Matched(text) => Ok(Some(ChatResponse {
                character_id: request.character_id.clone(),
                response_text: text,
                audio_url: None,
                is_predefined: true,
            })),
            PredefinedLookup::NotMatched => Ok(None),
        }
    }
}
