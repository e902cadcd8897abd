mod algorithm;
mod line;
mod token;

pub use algorithm::DiffAlgorithm;
pub use line::LineEngine;
pub use token::{CharEngine, WordEngine};

use duplex_engine_api::EngineRegistry;

/// Identifier of the engine used when nothing else is configured.
pub const DEFAULT_ENGINE: &str = "lines";

/// Build an engine registry populated with the builtin engines.
#[must_use]
pub fn default_registry(algorithm: DiffAlgorithm) -> EngineRegistry {
    let mut registry = EngineRegistry::new();
    registry.register(LineEngine::new(algorithm));
    registry.register(WordEngine::new(algorithm));
    registry.register(CharEngine::new(algorithm));
    registry
}
