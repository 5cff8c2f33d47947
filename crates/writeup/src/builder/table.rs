//! Fluent table construction.

use std::collections::BTreeMap;

use writeup_render::{Align, BuildError, ConsoleRenderer, MarkdownRenderer, Table, TableRenderer};

use crate::format::ReportFormat;

/// Fluent builder for a [`Table`], terminated by a build call.
///
/// At least one header must be added before building; a headerless build
/// returns [`BuildError::MissingHeaders`]. Rows are free-form: a row may be
/// shorter or longer than the header list and renderers normalize it.
///
/// # Example
///
/// ```rust
/// use writeup::{Align, TableBuilder, MarkdownRenderer};
///
/// let output = TableBuilder::new()
///     .header("Name")
///     .header_aligned("Score", Align::Right)
///     .row(["Alice", "95"])
///     .row(["Bob", "87"])
///     .build_with(&MarkdownRenderer)?;
///
/// assert!(output.contains("| Alice | 95 |"));
/// # Ok::<(), writeup::BuildError>(())
/// ```
#[derive(Default)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a left-aligned header column.
    pub fn header(self, header: impl Into<String>) -> Self {
        self.header_aligned(header, Align::Left)
    }

    /// Add a header column with an explicit alignment.
    pub fn header_aligned(mut self, header: impl Into<String>, align: Align) -> Self {
        self.table.add_header(header, align);
        self
    }

    /// Add a data row. Cells are converted with `ToString`.
    pub fn row<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        self.table.add_row(cells);
        self
    }

    /// Discard all accumulated headers and rows, keeping the builder.
    pub fn clear(mut self) -> Self {
        self.table.clear();
        self
    }

    /// The table accumulated so far.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Render the table with a single renderer, returning the bare string.
    pub fn build_with(&self, renderer: &dyn TableRenderer) -> Result<String, BuildError> {
        self.check_headers()?;
        Ok(renderer.render(&self.table))
    }

    /// Render the table with every given renderer, returning a map from
    /// renderer name to output.
    ///
    /// An empty renderer list is a usage error, not an empty map.
    pub fn build_with_all(
        &self,
        renderers: &[&dyn TableRenderer],
    ) -> Result<BTreeMap<String, String>, BuildError> {
        self.check_headers()?;
        if renderers.is_empty() {
            return Err(BuildError::MissingRenderers);
        }

        Ok(renderers
            .iter()
            .map(|r| (r.name().to_string(), r.render(&self.table)))
            .collect())
    }

    /// Render the table in the given shortcut format.
    ///
    /// `Console` picks the console renderer; anything else renders Markdown.
    pub fn build(&self, format: ReportFormat) -> Result<String, BuildError> {
        match format {
            ReportFormat::Console => self.build_with(&ConsoleRenderer),
            _ => self.build_with(&MarkdownRenderer),
        }
    }

    fn check_headers(&self) -> Result<(), BuildError> {
        if self.table.headers().is_empty() {
            return Err(BuildError::MissingHeaders);
        }
        Ok(())
    }
}
