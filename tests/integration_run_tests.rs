//! # End-to-End Run Tests / 端到端运行测试
//!
//! This module drives whole test runs through the public surface and
//! checks the rendered console and HTML output, the statistics, and the
//! best-effort behavior of report-file writing.
//!
//! 此模块通过公共接口驱动完整的测试运行，
//! 并检查渲染的控制台和 HTML 输出、统计数据以及报告文件写入的尽力而为行为。

use chrono::{DateTime, TimeZone, Utc};
use std::fs;
use std::path::Path;
use suite_runner::core::config::RunConfig;
use suite_runner::core::models::{Case, CheckResult, Group, Module, TestResult, TestRun};
use suite_runner::core::stats::Stats;
use suite_runner::reporting::{console, format_timestamp, html};
use tempfile::tempdir;

fn noop(_tc: &mut Case) -> CheckResult {
    Ok(())
}

fn passing(tc: &mut Case) -> CheckResult {
    tc.pass()
}

fn failing(tc: &mut Case) -> CheckResult {
    tc.fail("always fails")
}

fn quiet_case(name: &'static str, test_fn: fn(&mut Case) -> CheckResult) -> Case {
    Case::new(name, test_fn).with_result_lines(false)
}

/// A fixed timestamp so rendered output is reproducible.
/// 固定时间戳，使渲染输出可复现。
fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap()
}

/// Builds the canonical demo run: one module holding one group with a
/// passing and an always-failing case.
fn demo_run() -> TestRun {
    let mut run = TestRun::new("Demo Project");
    run.run_module(
        Module::new("demo_module").with_group(
            Group::new("demo_group")
                .with_case(quiet_case("case_one", passing))
                .with_case(quiet_case("case_two", failing)),
        ),
    );
    run
}

fn render_console(run: &TestRun) -> String {
    colored::control::set_override(false);
    let mut buffer = Vec::new();
    console::write_run_results(&mut buffer, run, &fixed_timestamp()).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod console_report_tests {
    use super::*;

    #[test]
    fn test_demo_run_summary_tape_and_details() {
        let run = demo_run();

        assert_eq!(run.stats(), Stats { total: 2, passed: 1, failed: 1 });
        assert_eq!(run.result(), TestResult::Failed);

        let text = render_console(&run);
        assert!(text.contains("=================== Unit Test Report ==================="));
        assert!(text.contains("Project:            Demo Project"));
        assert!(text.contains("Summary (F=fail, .=pass, ?=invalid):\n\t.F\r\n"));
        assert!(text.contains("Details (1 fails, 0 invalid):"));
        assert!(text.contains("1) case_two -- "));
        assert!(text.contains(": always fails\n"));
        assert!(!text.contains("case_one --"));
        assert!(text.contains("Result:\n\tFAIL (2 runs, 1 passes, 1 fails)"));
        assert!(text.contains("Done.\t 2026-01-02T03:04:05+0000"));
        assert!(text.contains("========================================================"));
    }

    #[test]
    fn test_all_passing_run_prints_pass_without_details() {
        let mut run = TestRun::new("Green");
        run.run_case(quiet_case("ok", passing));

        let text = render_console(&run);
        assert!(text.contains("Summary (F=fail, .=pass, ?=invalid):\n\t.\r\n"));
        assert!(text.contains("Result:\n\tPASS (1 runs, 1 passes, 0 fails)"));
        assert!(!text.contains("Details ("));
    }

    #[test]
    fn test_unevaluated_case_shows_as_invalid() {
        let mut run = TestRun::new("Idle");
        run.run_case(quiet_case("idle", noop));

        assert_eq!(run.stats(), Stats { total: 1, passed: 0, failed: 0 });
        assert_eq!(run.result(), TestResult::Failed);

        let text = render_console(&run);
        assert!(text.contains("Summary (F=fail, .=pass, ?=invalid):\n\t?\r\n"));
        assert!(text.contains("Details (0 fails, 1 invalid):"));
        assert!(text.contains("1) idle -- "));
        assert!(text.contains(": not evaluated\n"));
        assert!(text.contains("Result:\n\tFAIL (1 runs, 0 passes, 0 fails)"));
    }

    #[test]
    fn test_empty_run_is_a_vacuous_pass() {
        let run = TestRun::new("Empty");

        let text = render_console(&run);
        assert!(text.contains("Summary (F=fail, .=pass, ?=invalid):\n\t\r\n"));
        assert!(text.contains("Result:\n\tPASS (0 runs, 0 passes, 0 fails)"));
    }
}

#[cfg(test)]
mod case_result_line_tests {
    use super::*;

    fn render_result_lines(case: &Case) -> String {
        let mut buffer = Vec::new();
        case.write_result_lines(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_passed_case_emits_one_info_line() {
        let mut case = quiet_case("ok", passing);
        case.run();

        let text = render_result_lines(&case);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(":0: info: "));
        assert!(lines[0].ends_with("ok passed."));
    }

    #[test]
    fn test_failed_case_emits_two_error_lines() {
        let mut case = quiet_case("bad", failing);
        case.run();

        let text = render_result_lines(&case);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(":0: error: "));
        assert!(lines[0].ends_with("bad failed."));
        assert!(lines[1].contains(":0: error: "));
        assert!(lines[1].ends_with("always fails"));
    }

    #[test]
    fn test_unevaluated_case_emits_one_warning_line() {
        let mut case = quiet_case("idle", noop);
        case.run();

        let text = render_result_lines(&case);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(":0: warning: "));
        assert!(lines[0].ends_with("idle not evaluated."));
    }
}

#[cfg(test)]
mod html_report_tests {
    use super::*;

    #[test]
    fn test_rendering_is_deterministic_for_identical_inputs() {
        let run = demo_run();
        let timestamp = fixed_timestamp();

        let first = html::render_report(&run, &timestamp);
        let second = html::render_report(&run, &timestamp);
        assert_eq!(first, second);
    }

    #[test]
    fn test_document_structure_follows_the_tree() {
        let run = demo_run();
        let doc = html::render_report(&run, &fixed_timestamp());

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Unit Test Report</title>"));
        assert!(doc.contains("<h1>Unit Test Report &ndash; Demo Project</h1>"));
        assert!(doc.contains("<h2>demo_module</h2>"));
        assert!(doc.contains("<h3>demo_group</h3>"));
        assert!(doc.contains("<th>Nr.</th><th>Name</th><th>File</th><th>Result</th><th>Message</th>"));
        assert!(doc.contains("background-color: lime\">pass"));
        assert!(doc.contains("background-color: red\">fail"));
        assert!(doc.contains("always fails"));
        assert!(doc.contains("#L"));
        assert!(doc.contains("2 runs, 1 passes, 1 fails"));
        assert!(doc.ends_with("</html>"));
    }

    #[test]
    fn test_standalone_case_gets_its_own_table() {
        let mut run = TestRun::new("Standalone");
        run.run_case(quiet_case("idle", noop));

        let doc = html::render_report(&run, &fixed_timestamp());
        assert!(doc.contains("<table border=\"1\">"));
        assert!(doc.contains("background-color: silver\">invalid"));
        assert!(!doc.contains("<h2>"));
        assert!(!doc.contains("<h3>"));
    }

    #[test]
    fn test_markup_in_names_and_messages_is_escaped() {
        fn markup_failure(tc: &mut Case) -> CheckResult {
            tc.check_str_eq("<b>", Some("&amp"))
        }

        let mut run = TestRun::new("Escape <Me>");
        run.run_case(quiet_case("markup", markup_failure));

        let doc = html::render_report(&run, &fixed_timestamp());
        assert!(doc.contains("Escape &lt;Me&gt;"));
        assert!(doc.contains("expected &lt;&lt;b&gt;&gt;, but was &lt;&amp;amp&gt;"));
    }

    #[test]
    fn test_write_report_produces_the_rendered_document() {
        let run = demo_run();
        let timestamp = fixed_timestamp();
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.html");

        html::write_report(&run, &timestamp, &path);

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, html::render_report(&run, &timestamp));
    }

    #[test]
    fn test_unwritable_report_destination_is_skipped_silently() {
        let run = demo_run();
        let path = Path::new("/nonexistent-suite-runner-dir/report.html");

        // Must neither panic nor leave a partial file behind.
        html::write_report(&run, &fixed_timestamp(), path);
        assert!(!path.exists());
    }
}

#[cfg(test)]
mod finish_tests {
    use super::*;

    #[test]
    fn test_finish_at_honors_the_report_toggles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.html");
        let config = RunConfig {
            summary: false,
            report: true,
            report_file: path.clone(),
            ..RunConfig::default()
        };

        let run = demo_run();
        let result = run.finish_at(&config, fixed_timestamp());

        assert_eq!(result, TestResult::Failed);
        assert!(path.exists());
    }

    #[test]
    fn test_finish_at_skips_the_report_when_disabled() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.html");
        let config = RunConfig {
            summary: false,
            report: false,
            report_file: path.clone(),
            ..RunConfig::default()
        };

        let run = demo_run();
        run.finish_at(&config, fixed_timestamp());

        assert!(!path.exists());
    }
}

#[cfg(test)]
mod timestamp_tests {
    use super::*;

    #[test]
    fn test_timestamps_use_iso8601_with_offset() {
        assert_eq!(format_timestamp(&fixed_timestamp()), "2026-01-02T03:04:05+0000");
    }
}
