//! HTML format.
//!
//! Tables become `<table>` elements with `<thead>`/`<tbody>`, alignment is
//! expressed through inline `text-align` styles, and all content text is
//! escaped. `combine_parts` wraps the report in a complete standalone
//! document with an embedded stylesheet, so the output can be opened in a
//! browser as-is.

use crate::renderer::{ReportRenderer, TableRenderer};
use crate::table::{Align, Table};

/// Escapes the five HTML-significant characters.
///
/// `&` is replaced first so already-escaped entities are not double-escaped.
///
/// # Example
///
/// ```rust
/// use writeup_render::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders tables and reports as HTML.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlRenderer;

impl TableRenderer for HtmlRenderer {
    fn name(&self) -> &'static str {
        "HTML"
    }

    fn render(&self, table: &Table) -> String {
        if table.is_empty() {
            return String::new();
        }

        let columns = table.column_count();
        let mut out = String::new();

        out.push_str("<table>\n");
        out.push_str("  <thead>\n");
        out.push_str("    <tr>\n");
        for (i, header) in table.headers().iter().enumerate() {
            out.push_str(&format!(
                "      <th{}>{}</th>\n",
                style_attr(table.alignment(i)),
                escape_html(header)
            ));
        }
        out.push_str("    </tr>\n");
        out.push_str("  </thead>\n");

        out.push_str("  <tbody>\n");
        for row in table.rows() {
            out.push_str("    <tr>\n");
            for i in 0..columns {
                let value = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&format!(
                    "      <td{}>{}</td>\n",
                    style_attr(table.alignment(i)),
                    escape_html(value)
                ));
            }
            out.push_str("    </tr>\n");
        }
        out.push_str("  </tbody>\n");
        out.push_str("</table>\n");

        out
    }
}

impl ReportRenderer for HtmlRenderer {
    fn render_title(&self, title: &str, reference_url: Option<&str>) -> String {
        let mut out = format!("<h1>{}</h1>\n", escape_html(title));
        if let Some(url) = reference_url {
            let escaped = escape_html(url);
            out.push_str(&format!(
                "<p>Reference: <a href=\"{escaped}\">{escaped}</a></p>\n"
            ));
        }
        out
    }

    fn render_section_header(&self, title: &str) -> String {
        format!("<h2>{}</h2>\n", escape_html(title))
    }

    fn render_text(&self, text: &str) -> String {
        format!("<p>{}</p>\n", escape_html(text))
    }

    fn combine_parts(&self, parts: &[String]) -> String {
        let mut out = String::from(DOC_PRELUDE);
        for part in parts.iter().filter(|p| !p.trim().is_empty()) {
            out.push_str(part);
            out.push('\n');
        }
        out.push_str("</body>\n");
        out.push_str("</html>\n");
        out
    }
}

fn style_attr(align: Align) -> &'static str {
    match align {
        Align::Center => " style=\"text-align: center;\"",
        Align::Right => " style=\"text-align: right;\"",
        Align::Left => "",
    }
}

/// Fixed document head, including the embedded stylesheet. Not configurable
/// per call.
const DOC_PRELUDE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 40px; }
    table { border-collapse: collapse; width: 100%; margin: 20px 0; }
    th, td { border: 1px solid #ddd; padding: 12px 8px; text-align: left; }
    th { background-color: #f5f5f5; font-weight: 600; }
    tr:nth-child(even) { background-color: #f9f9f9; }
    h1 { color: #333; border-bottom: 2px solid #333; padding-bottom: 10px; }
    h2 { color: #555; margin-top: 30px; }
    a { color: #0066cc; text-decoration: none; }
    a:hover { text-decoration: underline; }
  </style>
</head>
<body>
"#;
