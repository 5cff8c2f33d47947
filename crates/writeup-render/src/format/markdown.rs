//! Markdown format.
//!
//! Tables use pipe-delimited rows with the standard alignment markers in
//! the separator line (`---`, `:---:`, `---:`). Titles become `#` headings,
//! section headers `##` headings, and free text passes through untouched.

use crate::renderer::{join_parts, ReportRenderer, TableRenderer};
use crate::table::{Align, Table};

/// Renders tables and reports as Markdown.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownRenderer;

impl TableRenderer for MarkdownRenderer {
    fn name(&self) -> &'static str {
        "Markdown"
    }

    fn render(&self, table: &Table) -> String {
        if table.is_empty() {
            return String::new();
        }

        let columns = table.column_count();
        let mut out = String::new();

        out.push_str("| ");
        out.push_str(&table.headers().join(" | "));
        out.push_str(" |\n");

        out.push_str("| ");
        for i in 0..columns {
            if i > 0 {
                out.push_str(" | ");
            }
            out.push_str(separator_marker(table.alignment(i)));
        }
        out.push_str(" |\n");

        for row in table.rows() {
            // Short rows pad with empty cells; extra cells are dropped.
            let cells: Vec<&str> = (0..columns)
                .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                .collect();
            out.push_str("| ");
            out.push_str(&cells.join(" | "));
            out.push_str(" |\n");
        }

        out
    }
}

impl ReportRenderer for MarkdownRenderer {
    fn render_title(&self, title: &str, reference_url: Option<&str>) -> String {
        let mut out = format!("# {title}\n\n");
        if let Some(url) = reference_url {
            out.push_str(&format!("Reference: {url}\n\n"));
        }
        out
    }

    fn render_section_header(&self, title: &str) -> String {
        format!("## {title}\n\n")
    }

    fn render_text(&self, text: &str) -> String {
        text.to_string()
    }

    fn combine_parts(&self, parts: &[String]) -> String {
        join_parts(parts)
    }
}

fn separator_marker(align: Align) -> &'static str {
    match align {
        Align::Center => ":---:",
        Align::Right => "---:",
        Align::Left => "---",
    }
}
