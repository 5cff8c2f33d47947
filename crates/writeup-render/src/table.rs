//! The table data model shared by every renderer.
//!
//! A [`Table`] is a passive holder: ordered column headers, a per-column
//! [`Align`], and ordered rows of string cells. It is populated through the
//! mutation methods (or the fluent `TableBuilder` in the `writeup` crate)
//! and then consumed read-only by one or more renderers.
//!
//! Rows are allowed to be ragged. A row with fewer cells than there are
//! headers is padded with empty cells at render time; extra cells beyond the
//! header count are ignored. That is a deliberate policy, not an error.

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Center text (pad on both sides).
    Center,
    /// Right-align text (pad on the left).
    Right,
}

/// A table of string cells with per-column alignment.
///
/// # Example
///
/// ```rust
/// use writeup_render::{Align, MarkdownRenderer, Table, TableRenderer};
///
/// let mut table = Table::new();
/// table
///     .add_header("Name", Align::Left)
///     .add_header("Score", Align::Right);
/// table.add_row(["Alice", "95"]);
/// table.add_row(["Bob", "87"]);
///
/// let output = MarkdownRenderer.render(&table);
/// assert!(output.contains("| Alice | 95 |"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    alignments: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with no headers and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a header column with the given alignment.
    pub fn add_header(&mut self, header: impl Into<String>, align: Align) -> &mut Self {
        self.headers.push(header.into());
        self.alignments.push(align);
        self
    }

    /// Append a data row.
    ///
    /// Cells are converted with `ToString`, so numbers and other displayable
    /// values can be passed directly. The row need not have the same length
    /// as the header list.
    pub fn add_row<I>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.rows
            .push(cells.into_iter().map(|c| c.to_string()).collect());
        self
    }

    /// Remove all headers, alignments, and rows so the table can be reused.
    pub fn clear(&mut self) -> &mut Self {
        self.headers.clear();
        self.alignments.clear();
        self.rows.clear();
        self
    }

    /// The column headers, in order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The per-column alignments, in order.
    pub fn alignments(&self) -> &[Align] {
        &self.alignments
    }

    /// The data rows, in order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Alignment for the given column, defaulting to [`Align::Left`] when the
    /// index is beyond the alignment list.
    pub fn alignment(&self, column: usize) -> Align {
        self.alignments.get(column).copied().unwrap_or_default()
    }

    /// Number of columns, as defined by the header list.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// True when the table holds no data rows.
    ///
    /// Renderers emit nothing for an empty table; a header-only table
    /// produces no visual artifact in any format.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_header_records_text_and_alignment() {
        let mut table = Table::new();
        table
            .add_header("Name", Align::Left)
            .add_header("Score", Align::Right);

        assert_eq!(table.headers(), ["Name", "Score"]);
        assert_eq!(table.alignments(), [Align::Left, Align::Right]);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn add_row_stringifies_cells() {
        let mut table = Table::new();
        table.add_header("Name", Align::Left);
        table.add_header("Score", Align::Left);
        table.add_row(["Alice", "95"]);
        table.add_row([87, 92]);

        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0], ["Alice", "95"]);
        assert_eq!(table.rows()[1], ["87", "92"]);
    }

    #[test]
    fn alignment_defaults_to_left_past_the_list() {
        let mut table = Table::new();
        table.add_header("Only", Align::Right);

        assert_eq!(table.alignment(0), Align::Right);
        assert_eq!(table.alignment(5), Align::Left);
    }

    #[test]
    fn clear_resets_everything() {
        let mut table = Table::new();
        table.add_header("Name", Align::Left);
        table.add_row(["Alice"]);
        table.clear();

        assert!(table.headers().is_empty());
        assert!(table.alignments().is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn align_serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Align::Right).unwrap(), "\"right\"");
        let parsed: Align = serde_json::from_str("\"center\"").unwrap();
        assert_eq!(parsed, Align::Center);
    }
}
