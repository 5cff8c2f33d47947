//! Fluent builders for tables and reports.
//!
//! These are the only intended way to populate the render core's models:
//! [`TableBuilder`] accumulates headers and rows, [`ReportBuilder`]
//! accumulates a title and sections. Both end in explicit build/generate
//! calls, with the single-renderer calls returning a bare string and the
//! multi-renderer calls returning a name-to-output map.

mod report;
mod table;

pub use report::ReportBuilder;
pub use table::TableBuilder;
