mod normalize;
mod registry;
mod types;

pub use normalize::normalize_operations;
pub use registry::EngineRegistry;
pub use types::{EngineCapabilities, EngineError, EngineResult, EngineSummary, Granularity};

use duplex_api::EditOperation;

/// Trait implemented by edit-script providers.
///
/// Implementations must return operations that partition both inputs:
/// replaying `Equal` and `Delete` text yields `a`, replaying `Equal` and
/// `Insert` text yields `b`.
pub trait DiffEngine: Send + Sync {
    /// Stable identifier used for lookup and logging.
    fn id(&self) -> &'static str;

    /// Human-friendly label for UI surfaces.
    fn label(&self) -> &'static str;

    /// Capabilities advertised by the engine.
    fn capabilities(&self) -> EngineCapabilities;

    /// Compute the edit script turning `a` into `b`.
    ///
    /// # Errors
    ///
    /// Implementors should surface any backend failure.
    fn diff(&self, a: &str, b: &str) -> EngineResult<Vec<EditOperation>>;
}
