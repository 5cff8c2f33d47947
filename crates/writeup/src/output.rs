//! Report output container and sinks.
//!
//! The rendering core only returns strings; this is the one place where
//! output touches the console or the filesystem.

use std::fs;
use std::io;
use std::path::Path;

/// Generated report text in one or both of the shortcut formats.
///
/// Produced by [`ReportBuilder::generate`](crate::ReportBuilder::generate).
/// A field is `None` when that format was not requested.
#[derive(Clone, Debug, Default)]
pub struct ReportOutput {
    /// Console-formatted text, if generated.
    pub console_text: Option<String>,
    /// Markdown-formatted text, if generated.
    pub markdown_text: Option<String>,
}

impl ReportOutput {
    /// Print the console text to standard output, if present.
    pub fn write_to_console(&self) {
        if let Some(text) = &self.console_text {
            println!("{text}");
        }
    }

    /// Write the Markdown text to a file, if present.
    ///
    /// Does nothing (and succeeds) when no Markdown text was generated.
    pub fn save_markdown(&self, path: impl AsRef<Path>) -> io::Result<()> {
        if let Some(text) = &self.markdown_text {
            fs::write(path, text)?;
        }
        Ok(())
    }
}
