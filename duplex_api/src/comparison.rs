use serde::{Deserialize, Serialize};

use super::line::ClassifiedLine;

/// Headline numbers of a comparison, shaped like the `stats` object clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonStats {
    /// Number of substantive difference groups (a modified pair counts once).
    pub differences: u32,
    /// Words added on side B.
    pub words_added: u32,
    /// Words removed from side A.
    pub words_removed: u32,
}

impl ComparisonStats {
    /// A stats instance with no differences.
    pub const ZERO: Self = Self {
        differences: 0,
        words_added: 0,
        words_removed: 0,
    };
}

/// The complete, immutable outcome of comparing two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ComparisonResult {
    /// Classified lines of document A in display order.
    #[serde(default)]
    pub lines_a: Vec<ClassifiedLine>,
    /// Classified lines of document B in display order.
    #[serde(default)]
    pub lines_b: Vec<ClassifiedLine>,
    /// Number of substantive difference groups.
    pub difference_count: u32,
    /// Words added on side B.
    pub words_added: u32,
    /// Words removed from side A.
    pub words_removed: u32,
    /// Ordered human-readable change log, e.g. `Line 2: modified`.
    #[serde(default)]
    pub change_summary: Vec<String>,
}

impl ComparisonResult {
    /// Collapse the counters into a [`ComparisonStats`].
    #[must_use]
    pub const fn stats(&self) -> ComparisonStats {
        ComparisonStats {
            differences: self.difference_count,
            words_added: self.words_added,
            words_removed: self.words_removed,
        }
    }

    /// True when no substantive difference was counted.
    ///
    /// Blank and placeholder lines never count, so documents that differ
    /// only in a trailing newline or blank lines report no differences.
    #[must_use]
    pub const fn has_no_differences(&self) -> bool {
        self.difference_count == 0
    }
}
