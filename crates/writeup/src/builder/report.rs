//! Fluent report construction.

use std::collections::BTreeMap;

use writeup_render::{
    BuildError, ConsoleRenderer, MarkdownRenderer, Report, ReportRenderer, Table, TableSection,
    TextSection,
};

use crate::format::ReportFormat;
use crate::output::ReportOutput;

/// Fluent builder for a multi-section [`Report`] over data items of type `T`.
///
/// Sections are added as closures: table sections receive a fresh
/// [`Table`] plus the data slice and fill it in; text sections carry one
/// formatter for console output and one for Markdown (which is also the
/// fallback for any other renderer, HTML included).
///
/// # Example
///
/// ```rust
/// use writeup::{Align, MarkdownRenderer, ReportBuilder};
///
/// let report = ReportBuilder::new()
///     .title("Test Results")
///     .titled_table("Outcomes", |table, data: &[(&'static str, bool)]| {
///         table.add_header("Test", Align::Left);
///         table.add_header("Passed", Align::Center);
///         for (name, passed) in data {
///             table.add_row([name.to_string(), passed.to_string()]);
///         }
///     })
///     .section(
///         |data: &[(&'static str, bool)]| format!("{} tests ran", data.len()),
///         |data: &[(&'static str, bool)]| format!("**{}** tests ran", data.len()),
///     );
///
/// let output = report.generate_with(&[("login", true)], &MarkdownRenderer);
/// assert!(output.contains("# Test Results"));
/// assert!(output.contains("| login | true |"));
/// ```
pub struct ReportBuilder<T> {
    report: Report<T>,
}

impl<T> ReportBuilder<T> {
    /// Create a builder for a report titled `"Report"`.
    pub fn new() -> Self {
        Self {
            report: Report::new(),
        }
    }

    /// Set the report title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.report.set_title(title);
        self
    }

    /// Set a reference URL to show in the title banner.
    pub fn reference_url(mut self, url: impl Into<String>) -> Self {
        self.report.set_reference_url(url);
        self
    }

    /// Add a table section without a header line.
    pub fn table(mut self, populate: impl Fn(&mut Table, &[T]) + 'static) -> Self
    where
        T: 'static,
    {
        self.report.add_section(Box::new(TableSection::new(populate)));
        self
    }

    /// Add a table section preceded by a section header.
    pub fn titled_table(
        mut self,
        section_title: impl Into<String>,
        populate: impl Fn(&mut Table, &[T]) + 'static,
    ) -> Self
    where
        T: 'static,
    {
        self.report
            .add_section(Box::new(TableSection::titled(section_title, populate)));
        self
    }

    /// Add a custom text section without a header line.
    pub fn section(
        mut self,
        console_formatter: impl Fn(&[T]) -> String + 'static,
        markdown_formatter: impl Fn(&[T]) -> String + 'static,
    ) -> Self
    where
        T: 'static,
    {
        self.report
            .add_section(Box::new(TextSection::new(console_formatter, markdown_formatter)));
        self
    }

    /// Add a custom text section preceded by a section header.
    pub fn titled_section(
        mut self,
        section_title: impl Into<String>,
        console_formatter: impl Fn(&[T]) -> String + 'static,
        markdown_formatter: impl Fn(&[T]) -> String + 'static,
    ) -> Self
    where
        T: 'static,
    {
        self.report.add_section(Box::new(TextSection::titled(
            section_title,
            console_formatter,
            markdown_formatter,
        )));
        self
    }

    /// Generate the report with a single renderer, returning the bare
    /// document string.
    pub fn generate_with(&self, data: &[T], renderer: &dyn ReportRenderer) -> String {
        self.report.generate(data, renderer)
    }

    /// Generate the report with every given renderer, returning a map from
    /// renderer name to document.
    ///
    /// An empty renderer list is a usage error, not an empty map.
    pub fn generate_with_all(
        &self,
        data: &[T],
        renderers: &[&dyn ReportRenderer],
    ) -> Result<BTreeMap<String, String>, BuildError> {
        if renderers.is_empty() {
            return Err(BuildError::MissingRenderers);
        }

        Ok(renderers
            .iter()
            .map(|r| (r.name().to_string(), self.report.generate(data, *r)))
            .collect())
    }

    /// Generate the report in the given shortcut format(s).
    pub fn generate(&self, data: &[T], format: ReportFormat) -> ReportOutput {
        let console_text = matches!(format, ReportFormat::Console | ReportFormat::Both)
            .then(|| self.report.generate(data, &ConsoleRenderer));
        let markdown_text = matches!(format, ReportFormat::Markdown | ReportFormat::Both)
            .then(|| self.report.generate(data, &MarkdownRenderer));

        ReportOutput {
            console_text,
            markdown_text,
        }
    }
}

impl<T> Default for ReportBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
