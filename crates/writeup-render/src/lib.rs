//! # Writeup Render - Multi-Format Table & Report Rendering
//!
//! `writeup-render` turns one abstract data model into plain-text console
//! output, Markdown, or standalone HTML, without duplicating formatting
//! logic per format.
//!
//! This crate is the rendering core of the `writeup` crate, which layers a
//! fluent builder API and output sinks on top, but it can be used on its
//! own wherever the model types and renderers are enough.
//!
//! ## Core Concepts
//!
//! - [`Table`]: ordered headers, per-column [`Align`], ordered rows of
//!   string cells
//! - [`TableRenderer`]: the contract a format must satisfy to render tables
//! - [`ReportRenderer`]: the superset contract for full reports (title,
//!   section headers, free text, document assembly)
//! - [`ConsoleRenderer`] / [`MarkdownRenderer`] / [`HtmlRenderer`]: the
//!   three built-in formats
//! - [`Report`] and [`Section`]: a title plus an ordered list of
//!   table-producing or text-producing sections
//!
//! ## Quick Start
//!
//! ```rust
//! use writeup_render::{Align, MarkdownRenderer, Table, TableRenderer};
//!
//! let mut table = Table::new();
//! table
//!     .add_header("Name", Align::Left)
//!     .add_header("Score", Align::Right);
//! table.add_row(["Alice", "95"]);
//! table.add_row(["Bob", "87"]);
//!
//! let output = MarkdownRenderer.render(&table);
//! assert_eq!(
//!     output,
//!     "| Name | Score |\n| --- | ---: |\n| Alice | 95 |\n| Bob | 87 |\n"
//! );
//! ```
//!
//! ## Reports
//!
//! A [`Report`] combines a title banner with any number of sections. The
//! same report renders to any format by swapping the renderer:
//!
//! ```rust
//! use writeup_render::{
//!     Align, ConsoleRenderer, HtmlRenderer, Report, TableSection, TextSection,
//! };
//!
//! let mut report = Report::new();
//! report
//!     .set_title("Sprint Summary")
//!     .add_section(Box::new(TableSection::titled(
//!         "Completed",
//!         |table, data: &[(&'static str, u32)]| {
//!             table.add_header("Task", Align::Left);
//!             table.add_header("Points", Align::Right);
//!             for (task, points) in data {
//!                 table.add_row([task.to_string(), points.to_string()]);
//!             }
//!         },
//!     )))
//!     .add_section(Box::new(TextSection::new(
//!         |data: &[(&'static str, u32)]| format!("{} tasks done", data.len()),
//!         |data: &[(&'static str, u32)]| format!("**{}** tasks done", data.len()),
//!     )));
//!
//! let data = [("Login flow", 5), ("Search", 3)];
//! let console = report.generate(&data, &ConsoleRenderer);
//! let html = report.generate(&data, &HtmlRenderer);
//!
//! assert!(console.contains("Sprint Summary"));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Rendering Policies
//!
//! - A table with zero data rows renders as the empty string in every
//!   format; header-only tables are never emitted.
//! - Ragged rows are tolerated: missing cells render empty, extra cells
//!   beyond the header count are ignored.
//! - HTML output escapes all content text; markup-like cell values are
//!   displayed, never interpreted.
//! - Width is character count. Renderers hold no state, so rendering the
//!   same model twice is byte-identical.

pub mod error;
pub mod format;
pub mod renderer;
pub mod report;
pub mod section;
pub mod table;
pub mod util;

pub use error::BuildError;
pub use format::{escape_html, ConsoleRenderer, HtmlRenderer, MarkdownRenderer};
pub use renderer::{ReportRenderer, TableRenderer};
pub use report::Report;
pub use section::{Section, TableSection, TextSection};
pub use table::{Align, Table};
pub use util::{pad_left, pad_right, text_width};
