//! # Writeup - One Report, Three Formats
//!
//! `writeup` renders tabular and multi-section report data as aligned
//! console text, Markdown, or standalone HTML from a single data model.
//! Build the table or report once with the fluent API, then pick renderers
//! at the call site.
//!
//! The rendering core (models, renderer contracts, the three formats) lives
//! in [`writeup_render`] and is re-exported here; this crate adds the
//! builders and the output sinks.
//!
//! ## Tables
//!
//! ```rust
//! use writeup::{Align, MarkdownRenderer, TableBuilder};
//!
//! let output = TableBuilder::new()
//!     .header("Name")
//!     .header_aligned("Score", Align::Right)
//!     .row(["Alice", "95"])
//!     .row(["Bob", "87"])
//!     .build_with(&MarkdownRenderer)?;
//!
//! assert_eq!(
//!     output,
//!     "| Name | Score |\n| --- | ---: |\n| Alice | 95 |\n| Bob | 87 |\n"
//! );
//! # Ok::<(), writeup::BuildError>(())
//! ```
//!
//! ## Reports
//!
//! A report is a title plus ordered sections, rendered through any number
//! of renderers. One renderer returns the bare document; several return a
//! map keyed by renderer name:
//!
//! ```rust
//! use writeup::{
//!     Align, ConsoleRenderer, HtmlRenderer, MarkdownRenderer, ReportBuilder,
//! };
//!
//! let builder = ReportBuilder::new()
//!     .title("Deploy Summary")
//!     .reference_url("https://example.com/deploys/42")
//!     .titled_table("Services", |table, data: &[(&'static str, &'static str)]| {
//!         table.add_header("Service", Align::Left);
//!         table.add_header("Status", Align::Center);
//!         for (service, status) in data {
//!             table.add_row([*service, *status]);
//!         }
//!     });
//!
//! let data = [("api", "ok"), ("worker", "degraded")];
//!
//! let console = builder.generate_with(&data, &ConsoleRenderer);
//! assert!(console.contains("Deploy Summary"));
//!
//! let all = builder
//!     .generate_with_all(&data, &[&ConsoleRenderer, &MarkdownRenderer, &HtmlRenderer])?;
//! assert_eq!(all.len(), 3);
//! assert!(all["HTML"].starts_with("<!DOCTYPE html>"));
//! # Ok::<(), writeup::BuildError>(())
//! ```
//!
//! ## Shortcut formats and sinks
//!
//! [`ReportBuilder::generate`] covers the common console/Markdown pair via
//! [`ReportFormat`], returning a [`ReportOutput`] that can print itself or
//! save the Markdown to disk. That container is the only part of the crate
//! that performs I/O.

pub mod builder;
pub mod format;
pub mod output;
pub mod prelude;

pub use builder::{ReportBuilder, TableBuilder};
pub use format::ReportFormat;
pub use output::ReportOutput;

// Re-export the rendering core so `writeup` works as a single dependency.
pub use writeup_render::{
    escape_html, Align, BuildError, ConsoleRenderer, HtmlRenderer, MarkdownRenderer, Report,
    ReportRenderer, Section, Table, TableRenderer, TableSection, TextSection,
};
