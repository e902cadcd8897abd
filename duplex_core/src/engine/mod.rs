//! Diff engine entry points.

mod service;

pub use duplex_engine_api::{
    normalize_operations, DiffEngine, EngineCapabilities, EngineError, EngineRegistry,
    EngineResult, EngineSummary, Granularity,
};
pub use duplex_engines::{
    default_registry, CharEngine, DiffAlgorithm, LineEngine, WordEngine, DEFAULT_ENGINE,
};

pub use service::EngineService;
