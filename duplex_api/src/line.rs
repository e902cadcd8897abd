use serde::{Deserialize, Serialize};

/// Which of the two compared documents a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// The left, original document.
    A,
    /// The right, revised document.
    B,
}

/// Rendering category of a classified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    /// Line present unchanged on both sides.
    Equal,
    /// Line present only on side A.
    Deleted,
    /// Line present only on side B.
    Inserted,
    /// One half of a positional delete/insert pair.
    Modified,
}

impl LineCategory {
    /// Wire tag used in responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Deleted => "deleted",
            Self::Inserted => "inserted",
            Self::Modified => "modified",
        }
    }

    /// CSS class name used by the markup renderer.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Equal => "diff-equal",
            Self::Deleted => "diff-deleted",
            Self::Inserted => "diff-inserted",
            Self::Modified => "diff-modified",
        }
    }
}

/// One line of one side's rendered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// Side the line is rendered on.
    pub side: Side,
    /// 1-based line number, independent per side.
    pub line_number: u32,
    /// Rendering category.
    pub category: LineCategory,
    /// Raw (unescaped) line content without its terminator.
    pub content: String,
    /// Set for the single-space lines materialized by the classifier itself.
    #[serde(default)]
    pub is_placeholder: bool,
}

impl ClassifiedLine {
    /// A line carrying document content.
    pub fn new(
        side: Side,
        line_number: u32,
        category: LineCategory,
        content: impl Into<String>,
    ) -> Self {
        Self {
            side,
            line_number,
            category,
            content: content.into(),
            is_placeholder: false,
        }
    }

    /// A single-space placeholder line.
    #[must_use]
    pub fn placeholder(side: Side, line_number: u32, category: LineCategory) -> Self {
        Self {
            side,
            line_number,
            category,
            content: " ".to_owned(),
            is_placeholder: true,
        }
    }

    /// Whether the line counts towards statistics and the change summary.
    #[must_use]
    pub fn is_substantive(&self) -> bool {
        !self.content.trim().is_empty()
    }
}
