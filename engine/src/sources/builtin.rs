use super::{CharacterSource, RegistryResult};
use shared::models::Character;
use std::collections::HashMap;

pub const DETECTIVE_ID: &str = "detective";
pub const PRINCESS_ID: &str = "princess";

/// The fixed development seed: two characters, hardcoded. A real deployment
/// would swap this for a source backed by configuration.
pub struct BuiltinSource;

impl CharacterSource for BuiltinSource {
    fn load(&self) -> RegistryResult<Vec<Character>> {
        Ok(vec![detective(), princess()])
    }
}

fn detective() -> Character {
    // Keyword hits bypass the generation step.
    let predefined_responses: HashMap<String, String> = [
        (
            "hello",
            "Ah, a new case, or merely a greeting? State your purpose, I've matters to deduce.",
        ),
        (
            "who are you",
            "I am a Consulting Detective, Faari. I observe and deduce, finding the signal in the noise.",
        ),
        (
            "what is your name",
            "You may refer to me as The Detective. Now, focus on the facts.",
        ),
        (
            "bye",
            "Very well. The game is afoot elsewhere, it seems. Do keep your mind sharp.",
        ),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    Character {
        id: DETECTIVE_ID.to_string(),
        name: "The Detective".to_string(),
        system_prompt: "You are a cool, brilliant, and observant detective, similar to Sherlock \
                        Holmes. You speak in a formal, slightly condescending tone, and use \
                        deductive reasoning to answer. You end every non-deductive response with \
                        a thought-provoking question."
            .to_string(),
        predefined_responses,
        voice_id: "sh_male_cool".to_string(),
    }
}

fn princess() -> Character {
    Character {
        id: PRINCESS_ID.to_string(),
        name: "The Princess".to_string(),
        system_prompt: "You are a cheerful, optimistic, and slightly naive fairy-tale princess. \
                        You use flowery, encouraging language and avoid dark topics. Your goal is \
                        to make the user feel happy and loved. Speak as if you are royalty from a \
                        magical kingdom."
            .to_string(),
        // No predefined responses for the Princess yet.
        predefined_responses: HashMap::new(),
        voice_id: "pr_female_sweet".to_string(),
    }
}
