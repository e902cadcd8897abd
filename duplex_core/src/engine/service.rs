use std::sync::Arc;

use duplex_api::EditOperation;

use super::{
    default_registry, normalize_operations, DiffAlgorithm, DiffEngine, EngineCapabilities,
    EngineRegistry, EngineResult, EngineSummary,
};
use crate::{Error, Result};

/// High-level façade for invoking diff engines.
#[derive(Clone)]
pub struct EngineService {
    registry: Arc<EngineRegistry>,
}

impl EngineService {
    /// Create an engine service backed by the provided registry.
    #[must_use]
    pub fn new(registry: EngineRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Create a service over the builtin engines running `algorithm`.
    #[must_use]
    pub fn with_algorithm(algorithm: DiffAlgorithm) -> Self {
        Self::new(default_registry(algorithm))
    }

    /// Access the underlying registry.
    #[must_use]
    pub fn registry(&self) -> Arc<EngineRegistry> {
        Arc::clone(&self.registry)
    }

    /// List summaries for all registered engines.
    #[must_use]
    pub fn summaries(&self) -> Vec<EngineSummary> {
        self.registry.summaries()
    }

    /// Fetch capabilities for an engine, if registered.
    #[must_use]
    pub fn capabilities(&self, engine_id: &str) -> Option<EngineCapabilities> {
        self.registry.capabilities(engine_id)
    }

    /// Ensure an engine is registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineNotRegistered`] when the id is unknown.
    pub fn require(&self, engine_id: &str) -> Result<()> {
        self.engine(engine_id).map(|_| ())
    }

    /// Compute a normalized edit script with the specified engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EngineNotRegistered`] when the id is unknown or
    /// propagates engine failures as [`Error::Engine`].
    pub fn diff(&self, engine_id: &str, a: &str, b: &str) -> Result<Vec<EditOperation>> {
        let engine = self.engine(engine_id)?;
        let operations = normalize_operations(Self::invoke(engine_id, engine.diff(a, b))?);
        log::debug!(
            "engine '{engine_id}' produced {} operations",
            operations.len()
        );
        Ok(operations)
    }

    fn engine(&self, engine_id: &str) -> Result<Arc<dyn DiffEngine>> {
        self.registry
            .get(engine_id)
            .ok_or_else(|| Error::EngineNotRegistered {
                engine: engine_id.to_string(),
            })
    }

    fn invoke<T>(engine_id: &str, result: EngineResult<T>) -> Result<T> {
        result.map_err(|source| Error::Engine {
            engine: engine_id.to_string(),
            source,
        })
    }
}

impl Default for EngineService {
    fn default() -> Self {
        Self::with_algorithm(DiffAlgorithm::default())
    }
}

impl std::fmt::Debug for EngineService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let engine_ids: Vec<String> = self
            .registry
            .ids()
            .map(std::string::ToString::to_string)
            .collect();
        f.debug_struct("EngineService")
            .field("engines", &engine_ids)
            .finish()
    }
}
