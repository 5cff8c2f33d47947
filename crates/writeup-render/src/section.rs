//! Report sections.
//!
//! A report is an ordered list of sections, each of which knows how to
//! produce its fragment of the document given the report's data and the
//! active renderer. Two kinds exist: [`TableSection`] builds and renders a
//! table, [`TextSection`] formats free text with a per-format closure.

use crate::renderer::ReportRenderer;
use crate::table::Table;

/// A fragment generator within a report.
pub trait Section<T> {
    /// Produce this section's output for the given data and renderer.
    fn generate(&self, data: &[T], renderer: &dyn ReportRenderer) -> String;
}

type PopulateFn<T> = Box<dyn Fn(&mut Table, &[T])>;

/// A section that renders a table built from the report data.
///
/// Holds a population closure which receives a fresh empty [`Table`] and
/// the data slice, and fills in headers and rows. The closure runs once per
/// `generate` call, so each renderer sees its own freshly built table.
pub struct TableSection<T> {
    populate: PopulateFn<T>,
    title: Option<String>,
}

impl<T> TableSection<T> {
    /// Create a table section without a header line.
    pub fn new(populate: impl Fn(&mut Table, &[T]) + 'static) -> Self {
        Self {
            populate: Box::new(populate),
            title: None,
        }
    }

    /// Create a table section preceded by a section header.
    pub fn titled(title: impl Into<String>, populate: impl Fn(&mut Table, &[T]) + 'static) -> Self {
        Self {
            populate: Box::new(populate),
            title: Some(title.into()),
        }
    }
}

impl<T> Section<T> for TableSection<T> {
    fn generate(&self, data: &[T], renderer: &dyn ReportRenderer) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(&renderer.render_section_header(title));
        }

        let mut table = Table::new();
        (self.populate)(&mut table, data);
        out.push_str(&renderer.render_table(&table));
        out
    }
}

type FormatFn<T> = Box<dyn Fn(&[T]) -> String>;

/// A section that renders custom text built from the report data.
///
/// Carries one formatter for console output and one for Markdown. The
/// formatter is chosen by renderer name; any renderer that is neither
/// `"Console"` nor `"Markdown"` gets the Markdown formatter's text, which
/// the renderer then wraps through
/// [`render_text`](ReportRenderer::render_text). The HTML renderer takes
/// that fallback path.
pub struct TextSection<T> {
    console: FormatFn<T>,
    markdown: FormatFn<T>,
    title: Option<String>,
}

impl<T> TextSection<T> {
    /// Create a text section without a header line.
    pub fn new(
        console: impl Fn(&[T]) -> String + 'static,
        markdown: impl Fn(&[T]) -> String + 'static,
    ) -> Self {
        Self {
            console: Box::new(console),
            markdown: Box::new(markdown),
            title: None,
        }
    }

    /// Create a text section preceded by a section header.
    pub fn titled(
        title: impl Into<String>,
        console: impl Fn(&[T]) -> String + 'static,
        markdown: impl Fn(&[T]) -> String + 'static,
    ) -> Self {
        Self {
            console: Box::new(console),
            markdown: Box::new(markdown),
            title: Some(title.into()),
        }
    }
}

impl<T> Section<T> for TextSection<T> {
    fn generate(&self, data: &[T], renderer: &dyn ReportRenderer) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            out.push_str(&renderer.render_section_header(title));
        }

        let text = match renderer.name() {
            "Console" => (self.console)(data),
            _ => (self.markdown)(data),
        };
        out.push_str(&renderer.render_text(&text));
        out
    }
}
