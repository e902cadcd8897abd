use serde::{Deserialize, Serialize};

/// Diff algorithm the builtin engines run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiffAlgorithm {
    /// Myers' O(ND) algorithm: minimal edit scripts.
    Myers,
    /// Patience diff: anchors on unique tokens, favoring long equal runs.
    #[default]
    Patience,
}

impl From<DiffAlgorithm> for similar::Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => Self::Myers,
            DiffAlgorithm::Patience => Self::Patience,
        }
    }
}
