//! Engine registry keeps track of available diff engines.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::{DiffEngine, EngineCapabilities, EngineSummary};

/// In-memory registry for diff engines, ordered by identifier.
#[derive(Default, Clone)]
pub struct EngineRegistry {
    engines: BTreeMap<&'static str, Arc<dyn DiffEngine>>,
}

impl EngineRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an engine keyed by its `DiffEngine::id`, replacing any previous one.
    pub fn register<E>(&mut self, engine: E)
    where
        E: DiffEngine + 'static,
    {
        self.register_arc(Arc::new(engine));
    }

    /// Register an already shared engine.
    pub fn register_arc(&mut self, engine: Arc<dyn DiffEngine>) {
        self.engines.insert(engine.id(), engine);
    }

    /// Retrieve an engine by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<dyn DiffEngine>> {
        self.engines.get(id).cloned()
    }

    /// Whether an engine with the identifier is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.engines.contains_key(id)
    }

    /// Returns the registered identifiers in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.engines.keys().copied()
    }

    /// Number of registered engines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Whether no engine is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    /// Capabilities of a registered engine.
    #[must_use]
    pub fn capabilities(&self, id: &str) -> Option<EngineCapabilities> {
        self.engines.get(id).map(|engine| engine.capabilities())
    }

    /// Summaries of every registered engine.
    #[must_use]
    pub fn summaries(&self) -> Vec<EngineSummary> {
        self.engines
            .values()
            .map(|engine| EngineSummary {
                id: engine.id().to_owned(),
                label: engine.label().to_owned(),
                capabilities: engine.capabilities(),
            })
            .collect()
    }
}

impl std::fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineRegistry")
            .field("engines", &self.engines.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use duplex_api::EditOperation;

    use super::*;
    use crate::{EngineResult, Granularity};

    struct Echo(&'static str);

    impl DiffEngine for Echo {
        fn id(&self) -> &'static str {
            self.0
        }

        fn label(&self) -> &'static str {
            "Echo"
        }

        fn capabilities(&self) -> EngineCapabilities {
            EngineCapabilities::new(Granularity::Line, true)
        }

        fn diff(&self, a: &str, _b: &str) -> EngineResult<Vec<EditOperation>> {
            Ok(vec![EditOperation::equal(a)])
        }
    }

    #[test]
    fn ids_are_sorted_and_lookup_works() {
        let mut registry = EngineRegistry::new();
        registry.register(Echo("zeta"));
        registry.register(Echo("alpha"));

        assert_eq!(registry.ids().collect::<Vec<_>>(), ["alpha", "zeta"]);
        assert!(registry.contains("zeta"));
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.len(), 2);

        let summaries = registry.summaries();
        assert_eq!(summaries[0].id, "alpha");
        assert_eq!(summaries[0].label, "Echo");
        assert_eq!(
            registry.capabilities("zeta"),
            Some(EngineCapabilities::new(Granularity::Line, true))
        );
    }

    #[test]
    fn registering_same_id_replaces() {
        let mut registry = EngineRegistry::new();
        registry.register(Echo("one"));
        registry.register(Echo("one"));
        assert_eq!(registry.len(), 1);
    }
}
