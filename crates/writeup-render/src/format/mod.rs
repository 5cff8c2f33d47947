//! The built-in output formats.
//!
//! Three renderers implement the [`TableRenderer`] and [`ReportRenderer`]
//! contracts: [`ConsoleRenderer`] for aligned plain text, [`MarkdownRenderer`]
//! for pipe tables and headings, and [`HtmlRenderer`] for standalone HTML
//! documents. All three are zero-sized, stateless values.
//!
//! [`TableRenderer`]: crate::renderer::TableRenderer
//! [`ReportRenderer`]: crate::renderer::ReportRenderer

mod console;
mod html;
mod markdown;

pub use console::ConsoleRenderer;
pub use html::{escape_html, HtmlRenderer};
pub use markdown::MarkdownRenderer;

#[cfg(test)]
mod proptests {
    use crate::{Align, ConsoleRenderer, HtmlRenderer, MarkdownRenderer, Table, TableRenderer};
    use proptest::prelude::*;

    fn cell_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{0,16}"
    }

    fn table_strategy() -> impl Strategy<Value = Table> {
        let columns = 1usize..5;
        columns.prop_flat_map(|n| {
            let headers = prop::collection::vec("[a-zA-Z]{1,8}", n..=n);
            let rows = prop::collection::vec(prop::collection::vec(cell_strategy(), 0..6), 1..8);
            (headers, rows).prop_map(|(headers, rows)| {
                let mut table = Table::new();
                for header in headers {
                    table.add_header(header, Align::Left);
                }
                for row in rows {
                    table.add_row(row);
                }
                table
            })
        })
    }

    proptest! {
        #[test]
        fn rendering_is_idempotent(table in table_strategy()) {
            prop_assert_eq!(ConsoleRenderer.render(&table), ConsoleRenderer.render(&table));
            prop_assert_eq!(MarkdownRenderer.render(&table), MarkdownRenderer.render(&table));
            prop_assert_eq!(HtmlRenderer.render(&table), HtmlRenderer.render(&table));
        }

        #[test]
        fn console_rule_spans_all_columns(table in table_strategy()) {
            let output = ConsoleRenderer.render(&table);
            let rule = output.lines().nth(1).unwrap();
            let columns = table.column_count();

            let mut widths: Vec<usize> = table.headers().iter().map(|h| h.chars().count()).collect();
            for row in table.rows() {
                for (i, cell) in row.iter().take(columns).enumerate() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
            let expected = widths.iter().sum::<usize>() + 2 * (columns - 1);
            prop_assert_eq!(rule.chars().count(), expected);
        }

        #[test]
        fn markdown_line_count_is_rows_plus_two(table in table_strategy()) {
            let output = MarkdownRenderer.render(&table);
            prop_assert_eq!(output.lines().count(), table.rows().len() + 2);
        }
    }
}
