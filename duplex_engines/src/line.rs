use std::ops::Range;

use duplex_api::EditOperation;
use duplex_engine_api::{
    normalize_operations, DiffEngine, EngineCapabilities, EngineResult, Granularity,
};
use similar::{DiffTag, TextDiff};

use crate::DiffAlgorithm;

/// Line-aligned engine: whole lines are the diff tokens.
///
/// Lines are compared without their terminators, so a final line lacking a
/// newline still matches the same line followed by one. The terminator that
/// exists on only one side is emitted as its own one-character operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineEngine {
    algorithm: DiffAlgorithm,
}

impl LineEngine {
    /// Construct an engine running the given algorithm.
    #[must_use]
    pub const fn new(algorithm: DiffAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl DiffEngine for LineEngine {
    fn id(&self) -> &'static str {
        "lines"
    }

    fn label(&self) -> &'static str {
        "Line by line"
    }

    fn capabilities(&self) -> EngineCapabilities {
        EngineCapabilities::new(Granularity::Line, true)
    }

    fn diff(&self, a: &str, b: &str) -> EngineResult<Vec<EditOperation>> {
        let old: Vec<&str> = a.split('\n').collect();
        let new: Vec<&str> = b.split('\n').collect();

        let mut script = LineScript {
            old: &old,
            new: &new,
            operations: Vec::new(),
        };
        let diff = TextDiff::configure()
            .algorithm(self.algorithm.into())
            .diff_slices(&old, &new);
        for op in diff.ops() {
            let (tag, old_range, new_range) = op.as_tag_tuple();
            match tag {
                DiffTag::Equal => script.equal(old_range, new_range),
                DiffTag::Delete => script.delete(old_range),
                DiffTag::Insert => script.insert(new_range),
                DiffTag::Replace => {
                    script.delete(old_range);
                    script.insert(new_range);
                }
            }
        }

        let operations = normalize_operations(script.operations);
        log::trace!(
            "lines engine produced {} operations from {} and {} lines",
            operations.len(),
            old.len(),
            new.len()
        );
        Ok(operations)
    }
}

struct LineScript<'a> {
    old: &'a [&'a str],
    new: &'a [&'a str],
    operations: Vec<EditOperation>,
}

impl LineScript<'_> {
    fn equal(&mut self, old_range: Range<usize>, new_range: Range<usize>) {
        let old_terminated = old_range.end < self.old.len();
        let new_terminated = new_range.end < self.new.len();

        self.operations
            .push(EditOperation::equal(self.old[old_range].join("\n")));
        match (old_terminated, new_terminated) {
            (true, true) => self.operations.push(EditOperation::equal("\n")),
            (true, false) => self.operations.push(EditOperation::delete("\n")),
            (false, true) => self.operations.push(EditOperation::insert("\n")),
            (false, false) => {}
        }
    }

    fn delete(&mut self, range: Range<usize>) {
        let text = terminated_lines(self.old, range);
        self.operations.push(EditOperation::delete(text));
    }

    fn insert(&mut self, range: Range<usize>) {
        let text = terminated_lines(self.new, range);
        self.operations.push(EditOperation::insert(text));
    }
}

/// Lines in `range`, each followed by a newline unless it ends the document.
fn terminated_lines(lines: &[&str], range: Range<usize>) -> String {
    let mut text = String::new();
    for index in range {
        text.push_str(lines[index]);
        if index + 1 < lines.len() {
            text.push('\n');
        }
    }
    text
}
