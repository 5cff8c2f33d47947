//! Convenience prelude re-exporting the working set.
//!
//! ```rust
//! use writeup::prelude::*;
//!
//! let output = TableBuilder::new()
//!     .header("Name")
//!     .row(["Alice"])
//!     .build_with(&MarkdownRenderer)
//!     .unwrap();
//! assert!(output.contains("| Alice |"));
//! ```

pub use crate::builder::{ReportBuilder, TableBuilder};
pub use crate::format::ReportFormat;
pub use crate::output::ReportOutput;
pub use writeup_render::{
    Align, BuildError, ConsoleRenderer, HtmlRenderer, MarkdownRenderer, Report, ReportRenderer,
    Section, Table, TableRenderer, TableSection, TextSection,
};
