use serde::{Deserialize, Serialize};

/// Smallest unit an engine compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Whole lines.
    Line,
    /// Words and the whitespace between them.
    Word,
    /// Single characters.
    Char,
}

/// Capabilities advertised by an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineCapabilities {
    /// Token size the engine diffs on.
    pub granularity: Granularity,
    /// Whether every operation starts at a line boundary of the side(s) it touches.
    pub line_aligned: bool,
}

impl EngineCapabilities {
    /// Construct a capabilities struct with explicit values.
    #[must_use]
    pub const fn new(granularity: Granularity, line_aligned: bool) -> Self {
        Self {
            granularity,
            line_aligned,
        }
    }
}

/// Summary information about a registered engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSummary {
    /// Stable identifier for the engine.
    pub id: String,
    /// Human-friendly label for display.
    pub label: String,
    /// Capability flags.
    pub capabilities: EngineCapabilities,
}

/// Errors surfaced by diff engines.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Input is not supported by the engine.
    #[error("input is not supported by this engine: {reason}")]
    Unsupported {
        /// Why the engine rejected the input.
        reason: String,
    },
    /// Generic failure surfaced by the engine.
    #[error("{message}")]
    Failure {
        /// Human-readable error message.
        message: String,
    },
}

impl EngineError {
    /// Helper to construct a failure from any displayable message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }
}

/// Convenience result alias for engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;
