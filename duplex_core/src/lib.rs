//! Core library for Duplex's side-by-side text comparison.
//!
//! The crate is layered around three primary responsibilities:
//! - turning an edit script into classified per-side lines
//! - aggregating statistics and rendering escaped markup
//! - dispatching comparisons to pluggable diff engines

#![warn(
    clippy::all,
    clippy::cargo,
    clippy::nursery,
    clippy::pedantic,
    missing_docs
)]
#![cfg_attr(
    not(test),
    deny(
        clippy::dbg_macro,
        clippy::expect_used,
        clippy::panic,
        clippy::print_stderr,
        clippy::print_stdout,
        clippy::todo,
        clippy::unwrap_used
    )
)]

/// Line classification: the edit-script walk.
pub mod classify;
/// Configuration loading.
pub mod config;
/// Engine registry access and dispatch.
pub mod engine;
/// Owned, editable merge view over a finished comparison.
pub mod merge;
/// Markup and plain-text rendering.
pub mod render;
/// Request/response comparison surface.
pub mod session;
/// Splitting edit operations into lines.
pub mod split;
/// Difference and word statistics.
pub mod stats;

pub use classify::{classify, LineClassifier};
pub use config::{ComparisonConfig, RenderConfig, CONFIG_PATH_ENV};
pub use engine::EngineService;
pub use merge::{MergeRow, MergeView};
pub use render::{escape_markup, plain_text, Renderer};
pub use session::ComparisonSession;
pub use split::{split_operations, SplitLine};
pub use stats::{count_words, StatsAggregator};

pub use duplex_api::{
    ClassifiedLine, CompareRequest, CompareResponse, ComparisonResult, ComparisonStats, EditKind,
    EditOperation, LineBlock, LineCategory, Side,
};

/// Common result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the core library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Requested engine is not registered.
    #[error("diff engine is not registered: {engine}")]
    EngineNotRegistered {
        /// Identifier that failed to resolve.
        engine: String,
    },
    /// Engine failed to produce an edit script.
    #[error("diff engine '{engine}' failed: {source}")]
    Engine {
        /// Identifier of the failing engine.
        engine: String,
        /// Error reported by the engine.
        #[source]
        source: duplex_engine_api::EngineError,
    },
    /// Filesystem interaction failed.
    #[error("failed to access {path}: {source}")]
    Io {
        /// Filesystem path involved in the failed operation.
        path: String,
        /// Source I/O error returned by the standard library.
        #[source]
        source: std::io::Error,
    },
    /// Configuration file could not be parsed.
    #[error("invalid configuration in {path}: {source}")]
    Config {
        /// Path of the offending file.
        path: String,
        /// Parse error reported by `toml`.
        #[source]
        source: toml::de::Error,
    },
    /// Merge row index outside the view.
    #[error("merge row {row} is out of range (view has {rows} rows)")]
    MergeRowOutOfRange {
        /// Requested row.
        row: usize,
        /// Number of rows in the view.
        rows: usize,
    },
    /// Merge row is already equal on both sides.
    #[error("merge row {row} is already equal")]
    MergeRowEqual {
        /// Requested row.
        row: usize,
    },
    /// Merge row lacks a line on one of the sides.
    #[error("merge row {row} has no line on one side")]
    MergeSideMissing {
        /// Requested row.
        row: usize,
    },
    /// Merge row pairs a changed line with an equal line of the other side.
    #[error("merge row {row} pairs a changed line with an unchanged one")]
    MergeRowMisaligned {
        /// Requested row.
        row: usize,
    },
}
