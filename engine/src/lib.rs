pub mod registry;
pub mod sources;

pub use registry::{CharacterRegistry, PredefinedLookup};
pub use sources::{CharacterSource, RegistryError, RegistryResult};
