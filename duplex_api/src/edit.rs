use serde::{Deserialize, Serialize};

/// Role an edit operation plays in transforming document A into document B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    /// Text shared by both documents.
    Equal,
    /// Text present only in document A.
    Delete,
    /// Text present only in document B.
    Insert,
}

impl EditKind {
    /// Whether text of this kind belongs to document A.
    #[must_use]
    pub const fn touches_a(self) -> bool {
        matches!(self, Self::Equal | Self::Delete)
    }

    /// Whether text of this kind belongs to document B.
    #[must_use]
    pub const fn touches_b(self) -> bool {
        matches!(self, Self::Equal | Self::Insert)
    }
}

/// One unit of an edit script. The text may span several lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOperation {
    /// Kind of edit.
    pub kind: EditKind,
    /// Payload, possibly containing embedded newlines.
    pub text: String,
}

impl EditOperation {
    /// Construct an operation of an explicit kind.
    pub fn new(kind: EditKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Shorthand for an [`EditKind::Equal`] operation.
    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(EditKind::Equal, text)
    }

    /// Shorthand for an [`EditKind::Delete`] operation.
    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(EditKind::Delete, text)
    }

    /// Shorthand for an [`EditKind::Insert`] operation.
    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(EditKind::Insert, text)
    }
}

/// Replay the document A side of an edit script.
#[must_use]
pub fn replay_a(operations: &[EditOperation]) -> String {
    operations
        .iter()
        .filter(|op| op.kind.touches_a())
        .map(|op| op.text.as_str())
        .collect()
}

/// Replay the document B side of an edit script.
#[must_use]
pub fn replay_b(operations: &[EditOperation]) -> String {
    operations
        .iter()
        .filter(|op| op.kind.touches_b())
        .map(|op| op.text.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_reconstructs_both_documents() {
        let ops = vec![
            EditOperation::equal("keep"),
            EditOperation::delete("\nold"),
            EditOperation::insert("\nnew"),
        ];
        assert_eq!(replay_a(&ops), "keep\nold");
        assert_eq!(replay_b(&ops), "keep\nnew");
    }

    #[test]
    fn kind_encodes_as_snake_case() {
        let json = serde_json::to_string(&EditKind::Delete).expect("serialize kind");
        assert_eq!(json, "\"delete\"");
    }
}
