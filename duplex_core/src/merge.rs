//! Owned merge view over a finished comparison.
//!
//! Row `k` pairs the `k`-th line of side A with the `k`-th line of side B.
//! Copying one side of a row onto the other marks both halves equal. The
//! [`ComparisonResult`] the view was built from is never touched.

use duplex_api::{ClassifiedLine, ComparisonResult, LineCategory, Side};

use crate::{Error, Result};

/// Same-position lines of the two sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRow {
    /// Line of side A at this position, if side A is long enough.
    pub a: Option<ClassifiedLine>,
    /// Line of side B at this position, if side B is long enough.
    pub b: Option<ClassifiedLine>,
}

impl MergeRow {
    /// Whether both halves exist and are equal.
    #[must_use]
    pub fn is_equal(&self) -> bool {
        matches!(
            (&self.a, &self.b),
            (Some(a), Some(b)) if a.category == LineCategory::Equal && b.category == LineCategory::Equal
        )
    }
}

/// Editable copy of a comparison's rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergeView {
    rows: Vec<MergeRow>,
}

impl MergeView {
    /// Build a view from a comparison.
    #[must_use]
    pub fn from_result(result: &ComparisonResult) -> Self {
        let len = result.lines_a.len().max(result.lines_b.len());
        let rows = (0..len)
            .map(|position| MergeRow {
                a: result.lines_a.get(position).cloned(),
                b: result.lines_b.get(position).cloned(),
            })
            .collect();
        Self { rows }
    }

    /// All rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[MergeRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the view has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows that are not yet equal on both sides.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_equal()).count()
    }

    /// Copy side A's content of `row` onto side B.
    ///
    /// # Errors
    ///
    /// Fails when the row does not exist, is already equal, lacks a side, or
    /// pairs a changed line with an unrelated equal one.
    pub fn copy_to_b(&mut self, row: usize) -> Result<()> {
        self.copy(row, Side::A)
    }

    /// Copy side B's content of `row` onto side A.
    ///
    /// # Errors
    ///
    /// Fails when the row does not exist, is already equal, lacks a side, or
    /// pairs a changed line with an unrelated equal one.
    pub fn copy_to_a(&mut self, row: usize) -> Result<()> {
        self.copy(row, Side::B)
    }

    /// Side A's document as currently merged, without placeholders.
    #[must_use]
    pub fn text_a(&self) -> String {
        join_side(self.rows.iter().filter_map(|row| row.a.as_ref()))
    }

    /// Side B's document as currently merged, without placeholders.
    #[must_use]
    pub fn text_b(&self) -> String {
        join_side(self.rows.iter().filter_map(|row| row.b.as_ref()))
    }

    fn copy(&mut self, row: usize, from: Side) -> Result<()> {
        let rows = self.rows.len();
        let entry = self
            .rows
            .get_mut(row)
            .ok_or(Error::MergeRowOutOfRange { row, rows })?;
        if entry.is_equal() {
            return Err(Error::MergeRowEqual { row });
        }
        let (Some(a), Some(b)) = (entry.a.as_mut(), entry.b.as_mut()) else {
            return Err(Error::MergeSideMissing { row });
        };
        // An equal half is only a positional neighbor, not a counterpart.
        if a.category == LineCategory::Equal || b.category == LineCategory::Equal {
            return Err(Error::MergeRowMisaligned { row });
        }

        match from {
            Side::A => {
                b.content.clone_from(&a.content);
                b.is_placeholder = a.is_placeholder;
            }
            Side::B => {
                a.content.clone_from(&b.content);
                a.is_placeholder = b.is_placeholder;
            }
        }
        a.category = LineCategory::Equal;
        b.category = LineCategory::Equal;
        Ok(())
    }
}

fn join_side<'a>(lines: impl Iterator<Item = &'a ClassifiedLine>) -> String {
    lines
        .filter(|line| !line.is_placeholder)
        .map(|line| line.content.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
