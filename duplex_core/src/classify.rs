//! The edit-script walk that turns operations into classified per-side lines.
//!
//! Line numbers are assigned independently per side. A delete immediately
//! followed by an insert is a replacement: its lines pair up positionally
//! (the k-th deleted line with the k-th inserted line) as a modified pair,
//! regardless of content. Deleted lines without a partner pair with a
//! single-space placeholder; inserted lines without a partner are emitted
//! as plain insertions after the pairs.

use duplex_api::{ClassifiedLine, ComparisonResult, EditKind, EditOperation, LineCategory, Side};

use crate::split::{split_operations, SplitLine};
use crate::stats::StatsAggregator;

/// Entry point for line classification.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineClassifier;

impl LineClassifier {
    /// Construct a new classifier instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Classify an edit script into two parallel line sequences plus statistics.
    #[must_use]
    pub fn classify(&self, operations: &[EditOperation]) -> ComparisonResult {
        let split = split_operations(operations);
        let mut walk = Walk::default();

        let mut index = 0;
        while index < operations.len() {
            let lines = &split[index];
            match operations[index].kind {
                EditKind::Equal => {
                    for line in lines {
                        walk.equal(line);
                    }
                }
                EditKind::Insert => {
                    for line in lines {
                        walk.inserted(line);
                    }
                }
                EditKind::Delete => {
                    let replaced_by = operations
                        .get(index + 1)
                        .filter(|next| next.kind == EditKind::Insert)
                        .map(|_| &split[index + 1]);
                    match replaced_by {
                        Some(inserted) => {
                            for (position, line) in lines.iter().enumerate() {
                                walk.modified(line, inserted.get(position));
                            }
                            for line in inserted.iter().skip(lines.len()) {
                                walk.inserted(line);
                            }
                            index += 1;
                        }
                        None => {
                            for line in lines {
                                walk.deleted(line);
                            }
                        }
                    }
                }
            }
            index += 1;
        }

        walk.finish()
    }
}

/// Classify an edit script with a default [`LineClassifier`].
#[must_use]
pub fn classify(operations: &[EditOperation]) -> ComparisonResult {
    LineClassifier::new().classify(operations)
}

/// State of a single classification call.
#[derive(Default)]
struct Walk {
    lines_a: Vec<ClassifiedLine>,
    lines_b: Vec<ClassifiedLine>,
    number_a: u32,
    number_b: u32,
    stats: StatsAggregator,
}

impl Walk {
    fn equal(&mut self, line: &SplitLine) {
        let a = self.next_a(LineCategory::Equal, Some(line));
        let b = self.next_b(LineCategory::Equal, Some(line));
        self.lines_a.push(a);
        self.lines_b.push(b);
    }

    fn deleted(&mut self, line: &SplitLine) {
        let a = self.next_a(LineCategory::Deleted, Some(line));
        self.stats.record_deleted(&a);
        self.lines_a.push(a);
    }

    fn inserted(&mut self, line: &SplitLine) {
        let b = self.next_b(LineCategory::Inserted, Some(line));
        self.stats.record_inserted(&b);
        self.lines_b.push(b);
    }

    fn modified(&mut self, removed: &SplitLine, added: Option<&SplitLine>) {
        let a = self.next_a(LineCategory::Modified, Some(removed));
        let b = self.next_b(LineCategory::Modified, added);
        self.stats.record_modified(&a, &b);
        self.lines_a.push(a);
        self.lines_b.push(b);
    }

    fn next_a(&mut self, category: LineCategory, source: Option<&SplitLine>) -> ClassifiedLine {
        self.number_a += 1;
        materialize(Side::A, self.number_a, category, source)
    }

    fn next_b(&mut self, category: LineCategory, source: Option<&SplitLine>) -> ClassifiedLine {
        self.number_b += 1;
        materialize(Side::B, self.number_b, category, source)
    }

    fn finish(self) -> ComparisonResult {
        self.stats.finish(self.lines_a, self.lines_b)
    }
}

fn materialize(
    side: Side,
    line_number: u32,
    category: LineCategory,
    source: Option<&SplitLine>,
) -> ClassifiedLine {
    match source {
        Some(line) if !line.is_ghost() => {
            ClassifiedLine::new(side, line_number, category, line.content.clone())
        }
        _ => ClassifiedLine::placeholder(side, line_number, category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(lines: &[ClassifiedLine]) -> Vec<(u32, LineCategory, &str)> {
        lines
            .iter()
            .map(|line| (line.line_number, line.category, line.content.as_str()))
            .collect()
    }

    #[test]
    fn replacement_becomes_modified_pair() {
        let result = classify(&[
            EditOperation::equal("line1\n"),
            EditOperation::delete("line2\n"),
            EditOperation::insert("lineTWO\n"),
            EditOperation::equal("line3"),
        ]);

        let expected_a = [
            (1, LineCategory::Equal, "line1"),
            (2, LineCategory::Modified, "line2"),
            (3, LineCategory::Equal, "line3"),
        ];
        let expected_b = [
            (1, LineCategory::Equal, "line1"),
            (2, LineCategory::Modified, "lineTWO"),
            (3, LineCategory::Equal, "line3"),
        ];
        assert_eq!(view(&result.lines_a), expected_a);
        assert_eq!(view(&result.lines_b), expected_b);
        assert_eq!(result.difference_count, 1);
        assert_eq!(result.words_added, 1);
        assert_eq!(result.words_removed, 1);
        assert_eq!(result.change_summary, ["Line 2: modified"]);
    }

    #[test]
    fn delete_without_following_insert_is_pure() {
        let result = classify(&[
            EditOperation::equal("keep"),
            EditOperation::delete("\nremoveMe"),
        ]);
        assert_eq!(
            view(&result.lines_a),
            [
                (1, LineCategory::Equal, "keep"),
                (2, LineCategory::Deleted, "removeMe")
            ]
        );
        assert_eq!(view(&result.lines_b), [(1, LineCategory::Equal, "keep")]);
        assert_eq!(result.difference_count, 1);
        assert_eq!(result.words_removed, 1);
        assert_eq!(result.words_added, 0);
        assert_eq!(result.change_summary, ["Line 2: deleted"]);
    }

    #[test]
    fn short_insert_pads_with_placeholders() {
        let result = classify(&[
            EditOperation::delete("a\nb\nc\n"),
            EditOperation::insert("x\n"),
            EditOperation::equal("tail"),
        ]);
        assert_eq!(
            view(&result.lines_b),
            [
                (1, LineCategory::Modified, "x"),
                (2, LineCategory::Modified, " "),
                (3, LineCategory::Modified, " "),
                (4, LineCategory::Equal, "tail"),
            ]
        );
        assert!(result.lines_b[1].is_placeholder);
        assert_eq!(result.lines_a.len(), 4);
        assert_eq!(result.difference_count, 3);
        assert_eq!(result.words_removed, 3);
        assert_eq!(result.words_added, 1);
        assert_eq!(
            result.change_summary,
            ["Line 1: modified", "Line 2: modified", "Line 3: modified"]
        );
    }

    #[test]
    fn long_insert_keeps_surplus_lines_as_insertions() {
        let result = classify(&[
            EditOperation::delete("a\n"),
            EditOperation::insert("x\ny\nz\n"),
            EditOperation::equal("tail"),
        ]);
        assert_eq!(
            view(&result.lines_a),
            [(1, LineCategory::Modified, "a"), (2, LineCategory::Equal, "tail")]
        );
        assert_eq!(
            view(&result.lines_b),
            [
                (1, LineCategory::Modified, "x"),
                (2, LineCategory::Inserted, "y"),
                (3, LineCategory::Inserted, "z"),
                (4, LineCategory::Equal, "tail"),
            ]
        );
        assert_eq!(
            result.change_summary,
            ["Line 1: modified", "Line 2: inserted", "Line 3: inserted"]
        );
    }

    #[test]
    fn insert_before_delete_is_not_paired() {
        let result = classify(&[EditOperation::insert("new\n"), EditOperation::delete("old")]);
        assert_eq!(view(&result.lines_a), [(1, LineCategory::Deleted, "old")]);
        assert_eq!(view(&result.lines_b), [(1, LineCategory::Inserted, "new")]);
        assert_eq!(result.difference_count, 2);
    }

    #[test]
    fn trailing_newline_materializes_ghost_line() {
        let result = classify(&[EditOperation::equal("a\n")]);
        assert_eq!(result.lines_a.len(), 2);
        assert_eq!(result.lines_a[1].content, " ");
        assert!(result.lines_a[1].is_placeholder);
        assert_eq!(result.lines_b[1].category, LineCategory::Equal);
        assert!(result.has_no_differences());
    }

    #[test]
    fn blank_deleted_line_pairs_with_content() {
        let result = classify(&[
            EditOperation::equal("a\n"),
            EditOperation::delete("\n"),
            EditOperation::insert("x\n"),
            EditOperation::equal("b"),
        ]);
        assert_eq!(result.lines_a[1].content, "");
        assert!(!result.lines_a[1].is_placeholder);
        assert_eq!(result.lines_b[1].content, "x");
        assert_eq!(result.difference_count, 1);
        assert_eq!(result.words_removed, 0);
        assert_eq!(result.words_added, 1);
    }

    #[test]
    fn empty_script_yields_empty_result() {
        let result = classify(&[]);
        assert!(result.lines_a.is_empty());
        assert!(result.lines_b.is_empty());
        assert!(result.change_summary.is_empty());
    }

    #[test]
    fn classification_is_idempotent() {
        let ops = [
            EditOperation::equal("x\n"),
            EditOperation::delete("y\nz\n"),
            EditOperation::insert("w\n"),
            EditOperation::equal("end\n"),
        ];
        assert_eq!(classify(&ops), classify(&ops));
    }
}
