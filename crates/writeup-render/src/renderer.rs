//! Renderer contracts.
//!
//! Every output format implements [`TableRenderer`] (turn one [`Table`] into
//! a string) and [`ReportRenderer`] (the superset used for multi-section
//! reports: title banner, section headers, free text, and final document
//! assembly). Renderers are stateless strategies: every method is a pure
//! function of its arguments, so a single renderer value can be shared
//! freely across threads and reused across calls.

use crate::table::Table;

/// Renders a [`Table`] to one specific output format.
pub trait TableRenderer {
    /// Identity of this renderer: `"Console"`, `"Markdown"`, or `"HTML"`
    /// for the built-in formats.
    fn name(&self) -> &'static str;

    /// Render a table to this format.
    ///
    /// A table with no data rows renders as the empty string in every
    /// format; header-only tables are never emitted. Callers are expected
    /// to have enforced the non-empty-headers invariant already (the
    /// builders do), so `render` does not re-validate it.
    fn render(&self, table: &Table) -> String;
}

/// Renders the pieces of a complete report.
///
/// Extends [`TableRenderer`] with the four report operations plus document
/// assembly. All five are pure string producers; only [`combine_parts`]
/// sees the report as a whole.
///
/// [`combine_parts`]: ReportRenderer::combine_parts
pub trait ReportRenderer: TableRenderer {
    /// Render the report title banner, with an optional reference URL.
    fn render_title(&self, title: &str, reference_url: Option<&str>) -> String;

    /// Render a section header.
    fn render_section_header(&self, title: &str) -> String;

    /// Render a table inside a report. Delegates to [`TableRenderer::render`].
    fn render_table(&self, table: &Table) -> String {
        self.render(table)
    }

    /// Render free-form text content.
    fn render_text(&self, text: &str) -> String;

    /// Join rendered parts into the final document, dropping parts that are
    /// blank or whitespace-only.
    fn combine_parts(&self, parts: &[String]) -> String;
}

/// Joins non-blank parts with single newlines.
///
/// Shared by the console and Markdown `combine_parts`; HTML wraps its parts
/// in a full document instead.
pub(crate) fn join_parts(parts: &[String]) -> String {
    parts
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_parts_filters_blank_entries() {
        let parts = vec![
            "first".to_string(),
            String::new(),
            "   ".to_string(),
            "second".to_string(),
        ];
        assert_eq!(join_parts(&parts), "first\nsecond");
    }

    #[test]
    fn join_parts_of_nothing_is_empty() {
        assert_eq!(join_parts(&[]), "");
        assert_eq!(join_parts(&["  \n ".to_string()]), "");
    }
}
