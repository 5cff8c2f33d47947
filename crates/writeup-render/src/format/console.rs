//! Plain-text console format.
//!
//! Columns are sized to their widest content, separated by two spaces, with
//! a `─` rule between the header and the data rows. The report title is
//! drawn inside a double-line box (`╔═╗`) at least 80 characters wide.

use crate::renderer::{join_parts, ReportRenderer, TableRenderer};
use crate::table::{Align, Table};
use crate::util::{pad_left, pad_right, text_width};

/// Minimum width of the title box, in characters.
const TITLE_BOX_MIN_WIDTH: usize = 80;

/// Renders tables and reports as aligned plain text for terminal output.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleRenderer;

impl TableRenderer for ConsoleRenderer {
    fn name(&self) -> &'static str {
        "Console"
    }

    fn render(&self, table: &Table) -> String {
        if table.is_empty() {
            return String::new();
        }

        let columns = table.column_count();

        // Each column is as wide as its widest content, header included.
        // Cells beyond the header count never influence widths.
        let mut widths: Vec<usize> = table.headers().iter().map(|h| text_width(h)).collect();
        for row in table.rows() {
            for (i, cell) in row.iter().take(columns).enumerate() {
                widths[i] = widths[i].max(text_width(cell));
            }
        }

        let mut out = String::new();

        for (i, header) in table.headers().iter().enumerate() {
            out.push_str(&format_cell(header, widths[i], table.alignment(i)));
            if i + 1 < columns {
                out.push_str("  ");
            }
        }
        out.push('\n');

        let rule_len = widths.iter().sum::<usize>() + 2 * columns.saturating_sub(1);
        out.push_str(&"─".repeat(rule_len));
        out.push('\n');

        for row in table.rows() {
            for i in 0..columns {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&format_cell(value, widths[i], table.alignment(i)));
                if i + 1 < columns {
                    out.push_str("  ");
                }
            }
            out.push('\n');
        }

        out
    }
}

impl ReportRenderer for ConsoleRenderer {
    fn render_title(&self, title: &str, reference_url: Option<&str>) -> String {
        let title_len = text_width(title);
        let url_len = reference_url.map(text_width).unwrap_or(0);
        let box_width = (title_len + 4)
            .max(if reference_url.is_some() { url_len + 4 } else { 0 })
            .max(TITLE_BOX_MIN_WIDTH);

        let mut out = String::new();
        out.push('╔');
        out.push_str(&"═".repeat(box_width - 2));
        out.push_str("╗\n");

        push_boxed_line(&mut out, title, title_len, box_width);
        if let Some(url) = reference_url {
            push_boxed_line(&mut out, url, url_len, box_width);
        }

        out.push('╚');
        out.push_str(&"═".repeat(box_width - 2));
        out.push_str("╝\n");
        out.push('\n');
        out
    }

    fn render_section_header(&self, title: &str) -> String {
        let mut out = String::from(title);
        out.push_str("\n\n");
        out
    }

    fn render_text(&self, text: &str) -> String {
        text.to_string()
    }

    fn combine_parts(&self, parts: &[String]) -> String {
        join_parts(parts)
    }
}

/// Pads `value` to `width` characters per the column alignment.
///
/// Centering pads the left side to `(width + len) / 2` first, which floors
/// the split and leaves any odd leftover space on the right. The left bias
/// is intentional and kept for byte-exact output compatibility.
fn format_cell(value: &str, width: usize, align: Align) -> String {
    match align {
        Align::Right => pad_left(value, width),
        Align::Center => {
            let len = text_width(value);
            pad_right(&pad_left(value, (width + len) / 2), width)
        }
        Align::Left => pad_right(value, width),
    }
}

/// Emits one `║ text ║` line of the title box, centering the text.
fn push_boxed_line(out: &mut String, text: &str, text_len: usize, box_width: usize) {
    let padding = (box_width - text_len - 2) / 2;
    out.push('║');
    out.push_str(&" ".repeat(padding));
    out.push_str(text);
    out.push_str(&" ".repeat(box_width - padding - text_len - 2));
    out.push_str("║\n");
}
