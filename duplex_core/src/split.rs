//! Slicing edit operations into per-line fragments.
//!
//! A fragment survives when it is real line content. Empty fragments are
//! kept when they are genuine blank lines and dropped when they are only the
//! by-product of splitting on a newline that terminates a line (the last
//! fragment of an operation) or that ends a line begun by an earlier
//! operation (the first fragment of an operation starting mid-line). The
//! last fragment of the whole sequence is always kept so the final line of a
//! comparison is rendered.

use duplex_api::{EditKind, EditOperation};

/// One line fragment of an edit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitLine {
    /// Index of the operation that produced the fragment.
    pub operation_index: usize,
    /// Index of the fragment within its operation's split.
    pub line_index: usize,
    /// Fragment text, without newline.
    pub content: String,
    /// Whether this is the last fragment of the last operation.
    pub is_trailing_final_line: bool,
}

impl SplitLine {
    /// The empty final fragment, rendered as a placeholder.
    #[must_use]
    pub fn is_ghost(&self) -> bool {
        self.is_trailing_final_line && self.content.is_empty()
    }
}

/// Split every operation into its retained line fragments, one list per operation.
#[must_use]
pub fn split_operations(operations: &[EditOperation]) -> Vec<Vec<SplitLine>> {
    let last_operation = operations.len().saturating_sub(1);
    let mut starts = LineStarts { a: true, b: true };

    operations
        .iter()
        .enumerate()
        .map(|(operation_index, op)| {
            let lines = split_operation(
                operation_index,
                op,
                starts.at_start(op.kind),
                operation_index == last_operation,
            );
            starts.advance(op);
            lines
        })
        .collect()
}

fn split_operation(
    operation_index: usize,
    op: &EditOperation,
    at_line_start: bool,
    is_last_operation: bool,
) -> Vec<SplitLine> {
    let fragments: Vec<&str> = op.text.split('\n').collect();
    let last_fragment = fragments.len().saturating_sub(1);

    fragments
        .into_iter()
        .enumerate()
        .filter_map(|(line_index, fragment)| {
            let is_trailing_final_line = is_last_operation && line_index == last_fragment;
            let keep = !fragment.is_empty()
                || is_trailing_final_line
                || match line_index {
                    0 if last_fragment == 0 => false,
                    0 => at_line_start,
                    index => index != last_fragment,
                };
            keep.then(|| SplitLine {
                operation_index,
                line_index,
                content: fragment.to_owned(),
                is_trailing_final_line,
            })
        })
        .collect()
}

/// Whether each side's replay currently sits at the start of a line.
struct LineStarts {
    a: bool,
    b: bool,
}

impl LineStarts {
    const fn at_start(&self, kind: EditKind) -> bool {
        match kind {
            EditKind::Equal => self.a && self.b,
            EditKind::Delete => self.a,
            EditKind::Insert => self.b,
        }
    }

    fn advance(&mut self, op: &EditOperation) {
        if op.text.is_empty() {
            return;
        }
        let ends_line = op.text.ends_with('\n');
        if op.kind.touches_a() {
            self.a = ends_line;
        }
        if op.kind.touches_b() {
            self.b = ends_line;
        }
    }
}
