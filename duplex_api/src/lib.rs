//! Shared Duplex data models consumed by the comparison core and the diff engines.
//!
//! The structures in this crate are designed to be:
//! - serializable via `serde` for transport to the surrounding service
//! - free of behavior beyond small constructors and accessors

/// Edit operations produced by diff engines.
pub mod edit;
/// Classified per-side lines and their categories.
pub mod line;
/// The finished comparison and its statistics.
pub mod comparison;
/// Request and response shapes exchanged with the surrounding service.
pub mod request;

pub use comparison::{ComparisonResult, ComparisonStats};
pub use edit::{replay_a, replay_b, EditKind, EditOperation};
pub use line::{ClassifiedLine, LineCategory, Side};
pub use request::{CompareRequest, CompareResponse, LineBlock};
