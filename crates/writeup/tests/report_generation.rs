//! End-to-end tests driving the builders through all three renderers.

use writeup::prelude::*;

#[derive(Clone)]
struct TestResult {
    name: &'static str,
    passed: bool,
    duration_ms: u32,
}

fn test_results() -> Vec<TestResult> {
    vec![
        TestResult {
            name: "Login",
            passed: true,
            duration_ms: 250,
        },
        TestResult {
            name: "API",
            passed: true,
            duration_ms: 150,
        },
        TestResult {
            name: "UI",
            passed: false,
            duration_ms: 500,
        },
    ]
}

fn report_builder() -> ReportBuilder<TestResult> {
    ReportBuilder::new()
        .title("Test Execution Report")
        .reference_url("https://example.com/test-suite")
        .titled_table("Test Results", |table, data: &[TestResult]| {
            table.add_header("Test Name", Align::Left);
            table.add_header("Status", Align::Center);
            table.add_header("Duration (ms)", Align::Right);
            for result in data {
                table.add_row([
                    result.name.to_string(),
                    if result.passed { "pass" } else { "fail" }.to_string(),
                    result.duration_ms.to_string(),
                ]);
            }
        })
        .section(
            |data: &[TestResult]| {
                let passed = data.iter().filter(|r| r.passed).count();
                format!("Total: {} tests, {} passed", data.len(), passed)
            },
            |data: &[TestResult]| {
                let passed = data.iter().filter(|r| r.passed).count();
                format!("**Total:** {} tests, {} passed", data.len(), passed)
            },
        )
}

#[test]
fn console_report_contains_banner_table_and_summary() {
    let output = report_builder().generate_with(&test_results(), &ConsoleRenderer);

    assert!(output.contains('╔') && output.contains('╚'));
    assert!(output.contains("Test Execution Report"));
    assert!(output.contains("https://example.com/test-suite"));
    assert!(output.contains('─'));
    assert!(output.contains("Login"));
    assert!(output.contains("Total: 3 tests, 2 passed"));
}

#[test]
fn markdown_report_contains_headings_and_pipe_table() {
    let output = report_builder().generate_with(&test_results(), &MarkdownRenderer);

    assert!(output.contains("# Test Execution Report"));
    assert!(output.contains("Reference: https://example.com/test-suite"));
    assert!(output.contains("## Test Results"));
    assert!(output.contains("| Test Name | Status | Duration (ms) |"));
    assert!(output.contains("| --- | :---: | ---: |"));
    assert!(output.contains("| Login | pass | 250 |"));
    assert!(output.contains("**Total:** 3 tests, 2 passed"));
}

#[test]
fn html_report_is_a_complete_escaped_document() {
    let output = report_builder().generate_with(&test_results(), &HtmlRenderer);

    assert!(output.starts_with("<!DOCTYPE html>"));
    assert!(output.contains("<h1>Test Execution Report</h1>"));
    assert!(output.contains(
        "<a href=\"https://example.com/test-suite\">https://example.com/test-suite</a>"
    ));
    assert!(output.contains("<h2>Test Results</h2>"));
    assert!(output.contains("<th style=\"text-align: right;\">Duration (ms)</th>"));
    assert!(output.contains("<td>Login</td>"));
    // text sections fall back to the Markdown formatter under HTML
    assert!(output.contains("<p>**Total:** 3 tests, 2 passed</p>"));
    assert!(output.ends_with("</html>\n"));
}

#[test]
fn three_renderers_yield_three_keyed_documents() {
    let outputs = report_builder()
        .generate_with_all(
            &test_results(),
            &[&ConsoleRenderer, &MarkdownRenderer, &HtmlRenderer],
        )
        .unwrap();

    assert_eq!(outputs.len(), 3);
    for key in ["Console", "Markdown", "HTML"] {
        assert!(outputs.contains_key(key), "missing {key} output");
        assert!(outputs[key].contains("Login"));
    }
}

#[test]
fn report_generation_is_idempotent() {
    let builder = report_builder();
    let data = test_results();

    for renderer in [&ConsoleRenderer as &dyn ReportRenderer, &MarkdownRenderer, &HtmlRenderer] {
        assert_eq!(
            builder.generate_with(&data, renderer),
            builder.generate_with(&data, renderer)
        );
    }
}

#[test]
fn output_line_counts_scale_with_row_count() {
    let make = |rows: usize| {
        let mut builder = TableBuilder::new().header("N");
        for i in 0..rows {
            builder = builder.row([i]);
        }
        builder
    };

    let console_lines = |rows: usize| {
        make(rows)
            .build_with(&ConsoleRenderer)
            .unwrap()
            .lines()
            .count()
    };
    let html_lines = |rows: usize| {
        make(rows).build_with(&HtmlRenderer).unwrap().lines().count()
    };

    assert_eq!(console_lines(10) - console_lines(5), 5);
    // each HTML row is <tr>, one <td>, </tr>
    assert_eq!(html_lines(10) - html_lines(5), 15);
}

#[test]
fn empty_rows_render_empty_in_every_format() {
    let builder = TableBuilder::new().header("Name").header("Score");

    for renderer in [&ConsoleRenderer as &dyn TableRenderer, &MarkdownRenderer, &HtmlRenderer] {
        assert_eq!(builder.build_with(renderer).unwrap(), "");
    }
}

#[test]
fn markup_in_data_is_never_interpreted() {
    let builder = ReportBuilder::new()
        .title("Injection <Check>")
        .table(|table, data: &[&'static str]| {
            table.add_header("Payload", Align::Left);
            for payload in data {
                table.add_row([*payload]);
            }
        });

    let html = builder.generate_with(&["<script>alert('x')</script>"], &HtmlRenderer);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("<h1>Injection &lt;Check&gt;</h1>"));
}

#[test]
fn report_output_saves_markdown_to_disk() {
    let output = report_builder().generate(&test_results(), ReportFormat::Both);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.md");
    output.save_markdown(&path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(Some(saved), output.markdown_text);
    assert!(output.console_text.is_some());
}
