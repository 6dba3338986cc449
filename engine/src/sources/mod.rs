use shared::models::Character;
use thiserror::Error;

pub mod builtin;
pub mod json;

pub use builtin::BuiltinSource;
pub use json::JsonSource;

pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Character not found: {0}")]
    NotFound(String),
    #[error("Duplicate character id in seed data: {0}")]
    DuplicateId(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Supplies the character records a registry is built from. Stands in for
/// whatever configuration or database loader a deployment ends up with.
pub trait CharacterSource {
    fn load(&self) -> RegistryResult<Vec<Character>>;
}
