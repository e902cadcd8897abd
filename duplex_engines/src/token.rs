use duplex_api::{EditKind, EditOperation};
use duplex_engine_api::{
    normalize_operations, DiffEngine, EngineCapabilities, EngineResult, Granularity,
};
use similar::{ChangeTag, TextDiff};

use crate::DiffAlgorithm;

/// Word-granular engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordEngine {
    algorithm: DiffAlgorithm,
}

impl WordEngine {
    /// Construct an engine running the given algorithm.
    #[must_use]
    pub const fn new(algorithm: DiffAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl DiffEngine for WordEngine {
    fn id(&self) -> &'static str {
        "words"
    }

    fn label(&self) -> &'static str {
        "Word by word"
    }

    fn capabilities(&self) -> EngineCapabilities {
        EngineCapabilities::new(Granularity::Word, false)
    }

    fn diff(&self, a: &str, b: &str) -> EngineResult<Vec<EditOperation>> {
        let diff = TextDiff::configure()
            .algorithm(self.algorithm.into())
            .diff_words(a, b);
        Ok(collect_operations(self.id(), &diff))
    }
}

/// Character-granular engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharEngine {
    algorithm: DiffAlgorithm,
}

impl CharEngine {
    /// Construct an engine running the given algorithm.
    #[must_use]
    pub const fn new(algorithm: DiffAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl DiffEngine for CharEngine {
    fn id(&self) -> &'static str {
        "chars"
    }

    fn label(&self) -> &'static str {
        "Character by character"
    }

    fn capabilities(&self) -> EngineCapabilities {
        EngineCapabilities::new(Granularity::Char, false)
    }

    fn diff(&self, a: &str, b: &str) -> EngineResult<Vec<EditOperation>> {
        let diff = TextDiff::configure()
            .algorithm(self.algorithm.into())
            .diff_chars(a, b);
        Ok(collect_operations(self.id(), &diff))
    }
}

fn collect_operations<'a>(engine: &str, diff: &TextDiff<'a, 'a, '_, str>) -> Vec<EditOperation> {
    let changes = diff
        .iter_all_changes()
        .map(|change| EditOperation::new(edit_kind(change.tag()), change.value()))
        .collect();
    let operations = normalize_operations(changes);
    log::trace!("{engine} engine produced {} operations", operations.len());
    operations
}

const fn edit_kind(tag: ChangeTag) -> EditKind {
    match tag {
        ChangeTag::Equal => EditKind::Equal,
        ChangeTag::Delete => EditKind::Delete,
        ChangeTag::Insert => EditKind::Insert,
    }
}
