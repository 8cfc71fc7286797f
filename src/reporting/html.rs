//! # HTML Reporting Module / HTML 报告模块
//!
//! This module renders a test run into a self-contained static HTML
//! document: one table per group (standalone cases get their own table),
//! source links in `file#Lline` form, color-coded result cells, and a
//! totals paragraph.
//!
//! 此模块将测试运行渲染为独立的静态 HTML 文档：
//! 每个用例组一张表格（独立用例有自己的表格），`file#Lline` 形式的源码链接、
//! 按颜色编码的结果单元格，以及一个总计段落。

use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

use crate::core::models::{Case, Group, Module, RunItem, TestResult, TestRun};
use crate::reporting::format_timestamp;

/// Renders the report document. Rendering is a pure function of the run
/// and the timestamp, so identical inputs produce byte-identical output.
pub fn render_report(run: &TestRun, completed_at: &DateTime<Utc>) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n    <head>\n        <title>Unit Test Report</title>\n    </head>\n    <body>\n");
    html.push_str(&format!(
        "        <h1>Unit Test Report &ndash; {}</h1><hr/>\n",
        escape_html(run.project_name())
    ));
    html.push_str(&format!(
        "        <p><b>Framework Version:</b> suite-runner {}<br/>\n           <b>Test run completed at:</b> {}</p>\n",
        env!("CARGO_PKG_VERSION"),
        format_timestamp(completed_at)
    ));

    let mut num = 0;
    for item in run.items() {
        match item {
            RunItem::Case(case) => {
                push_table_header(&mut html);
                push_case_row(&mut html, &mut num, case);
                push_table_footer(&mut html);
            }
            RunItem::Group(group) => push_group(&mut html, &mut num, group),
            RunItem::Module(module) => push_module(&mut html, &mut num, module),
        }
    }

    let stats = run.stats();
    html.push_str(&format!(
        "        <hr/><p>{} runs, {} passes, {} fails</p>\n    </body>\n</html>",
        stats.total, stats.passed, stats.failed
    ));

    html
}

/// Renders the report and writes it to `path`. Best-effort: when the
/// destination cannot be written the report is skipped silently, since the
/// console summary is the primary output.
pub fn write_report(run: &TestRun, completed_at: &DateTime<Utc>, path: &Path) {
    let _ = fs::write(path, render_report(run, completed_at));
}

fn push_table_header(html: &mut String) {
    html.push_str("<table border=\"1\"><tr><th>Nr.</th><th>Name</th><th>File</th><th>Result</th><th>Message</th></tr>");
}

fn push_table_footer(html: &mut String) {
    html.push_str("</table>\n");
}

/// Appends one result row. Failed cases link to the failing assertion;
/// everything else links to the declaration.
fn push_case_row(html: &mut String, num: &mut usize, case: &Case) {
    *num += 1;

    let (color, verdict) = match case.result() {
        TestResult::Passed => ("lime", "pass"),
        TestResult::Failed => ("red", "fail"),
        TestResult::Undefined => ("silver", "invalid"),
    };

    let failed = case.result().is_failed();
    let location = if failed {
        case.message_location()
    } else {
        case.location()
    };
    let message = if failed { case.message() } else { "" };
    let anchor = format!("{}#L{}", escape_html(location.file()), location.line());

    html.push_str(&format!(
        "<tr><td>{}</td><td>{}</td><td><a href=\"{}\">{}</a></td><td style=\"background-color: {}\">{}</td><td>{}</td></tr>",
        num,
        escape_html(case.name()),
        anchor,
        anchor,
        color,
        verdict,
        escape_html(message)
    ));
}

fn push_group(html: &mut String, num: &mut usize, group: &Group) {
    html.push_str(&format!("<h3>{}</h3>", escape_html(group.name())));
    push_table_header(html);
    for case in group.cases() {
        push_case_row(html, num, case);
    }
    push_table_footer(html);
}

fn push_module(html: &mut String, num: &mut usize, module: &Module) {
    html.push_str(&format!("<h2>{}</h2>", escape_html(module.name())));
    for group in module.groups() {
        push_group(html, num, group);
    }
}

/// Simple HTML escape function to replace special characters with their HTML entities
/// 简单的 HTML 转义函数，用 HTML 实体替换特殊字符
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
