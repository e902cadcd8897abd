//! Difference counting, word statistics and the change log.

use duplex_api::{ClassifiedLine, ComparisonResult, LineCategory};

/// Number of whitespace-delimited words in `text`.
#[must_use]
pub fn count_words(text: &str) -> u32 {
    u32::try_from(text.split_whitespace().count()).unwrap_or(u32::MAX)
}

/// Accumulates statistics while classified lines are produced.
///
/// Only substantive lines (non-blank after trimming) are counted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatsAggregator {
    difference_count: u32,
    words_added: u32,
    words_removed: u32,
    change_summary: Vec<String>,
}

impl StatsAggregator {
    /// Create an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a standalone line on side A that has no counterpart on side B.
    pub fn record_deleted(&mut self, line: &ClassifiedLine) {
        if !line.is_substantive() {
            return;
        }
        self.words_removed = self.words_removed.saturating_add(count_words(&line.content));
        self.note(line.line_number, LineCategory::Deleted);
    }

    /// Record a standalone line on side B that has no counterpart on side A.
    pub fn record_inserted(&mut self, line: &ClassifiedLine) {
        if !line.is_substantive() {
            return;
        }
        self.words_added = self.words_added.saturating_add(count_words(&line.content));
        self.note(line.line_number, LineCategory::Inserted);
    }

    /// Record a modified pair: `removed` from side A, `added` on side B.
    ///
    /// The pair counts once and is attributed to side A's line number.
    pub fn record_modified(&mut self, removed: &ClassifiedLine, added: &ClassifiedLine) {
        if !removed.is_substantive() && !added.is_substantive() {
            return;
        }
        self.words_removed = self.words_removed.saturating_add(count_words(&removed.content));
        self.words_added = self.words_added.saturating_add(count_words(&added.content));
        self.note(removed.line_number, LineCategory::Modified);
    }

    /// Differences recorded so far.
    #[must_use]
    pub const fn difference_count(&self) -> u32 {
        self.difference_count
    }

    /// Change log recorded so far.
    #[must_use]
    pub fn change_summary(&self) -> &[String] {
        &self.change_summary
    }

    /// Seal the statistics together with the classified lines.
    #[must_use]
    pub fn finish(
        self,
        lines_a: Vec<ClassifiedLine>,
        lines_b: Vec<ClassifiedLine>,
    ) -> ComparisonResult {
        ComparisonResult {
            lines_a,
            lines_b,
            difference_count: self.difference_count,
            words_added: self.words_added,
            words_removed: self.words_removed,
            change_summary: self.change_summary,
        }
    }

    fn note(&mut self, line_number: u32, category: LineCategory) {
        self.difference_count = self.difference_count.saturating_add(1);
        self.change_summary
            .push(format!("Line {line_number}: {}", category.as_str()));
    }
}
