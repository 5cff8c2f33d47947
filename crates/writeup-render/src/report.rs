//! The report model and document assembly.
//!
//! A [`Report`] is a title, an optional reference URL, and an ordered list
//! of sections. Assembly asks the renderer for the title banner, asks each
//! section for its fragment, drops blank fragments, and hands the rest to
//! the renderer's `combine_parts`.

use crate::renderer::ReportRenderer;
use crate::section::Section;

/// A multi-section report over data items of type `T`.
///
/// The report owns its sections exclusively; they hold only the closures
/// needed to produce their output from the data passed to [`generate`].
///
/// [`generate`]: Report::generate
pub struct Report<T> {
    title: String,
    reference_url: Option<String>,
    sections: Vec<Box<dyn Section<T>>>,
}

impl<T> Report<T> {
    /// Create an empty report titled `"Report"`.
    pub fn new() -> Self {
        Self {
            title: "Report".to_string(),
            reference_url: None,
            sections: Vec::new(),
        }
    }

    /// Set the report title.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = title.into();
        self
    }

    /// Set the reference URL shown in the title banner.
    pub fn set_reference_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.reference_url = Some(url.into());
        self
    }

    /// Append a section.
    pub fn add_section(&mut self, section: Box<dyn Section<T>>) -> &mut Self {
        self.sections.push(section);
        self
    }

    /// The report title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The reference URL, if one was set.
    pub fn reference_url(&self) -> Option<&str> {
        self.reference_url.as_deref()
    }

    /// Generate the complete document with the given renderer.
    ///
    /// The title banner always comes first. Section output that is blank or
    /// whitespace-only is skipped before assembly.
    pub fn generate(&self, data: &[T], renderer: &dyn ReportRenderer) -> String {
        let mut parts = vec![renderer.render_title(&self.title, self.reference_url.as_deref())];

        for section in &self.sections {
            let text = section.generate(data, renderer);
            if !text.trim().is_empty() {
                parts.push(text);
            }
        }

        renderer.combine_parts(&parts)
    }
}

impl<T> Default for Report<T> {
    fn default() -> Self {
        Self::new()
    }
}
