//! # Console Reporting Module / 控制台报告模块
//!
//! This module prints the end-of-run report: a banner with framework
//! version and project name, the one-character-per-case summary tape, the
//! detail listing for failed and unevaluated cases, and a timestamp
//! trailer.
//!
//! 此模块打印运行结束报告：带有框架版本和项目名称的横幅、
//! 每个用例一个字符的摘要纸带、失败和未评估用例的详细列表，以及时间戳结尾。

use chrono::{DateTime, Utc};
use colored::*;
use std::io::{self, Write};

use crate::core::models::{Case, TestResult, TestRun};
use crate::reporting::format_timestamp;

/// Summary tape character for a passed case.
const TAPE_CHR_PASSED: char = '.';

/// Summary tape character for a failed case.
const TAPE_CHR_FAILED: char = 'F';

/// Summary tape character for anything else.
const TAPE_CHR_INVALID: char = '?';

/// Prints the full run report to stdout.
///
/// # Output Format / 输出格式
/// ```text
/// =================== Unit Test Report ===================
/// Framework version:  0.1.0
/// Project:            My Project
///
/// Summary (F=fail, .=pass, ?=invalid):
///         .F?
///
/// Details (1 fails, 1 invalid):
///         1) case_two -- tests/demo.rs:42: always fails
///         2) case_three -- tests/demo.rs:17: not evaluated
///
/// Result:
///         FAIL (3 runs, 1 passes, 1 fails)
///
/// Done.    2026-08-06T12:00:00+0000
/// ========================================================
/// ```
pub fn print_run_results(run: &TestRun, completed_at: &DateTime<Utc>) {
    let stdout = io::stdout();
    let _ = write_run_results(&mut stdout.lock(), run, completed_at);
}

/// Writes the full run report into `w`. The stdout wrapper above delegates
/// here; tests render into a buffer.
pub fn write_run_results<W: Write>(
    w: &mut W,
    run: &TestRun,
    completed_at: &DateTime<Utc>,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "=================== Unit Test Report ===================")?;
    writeln!(w, "Framework version:  {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(w, "Project:            {}", run.project_name())?;
    writeln!(w)?;
    write_summary(w, run)?;
    write_details(w, run)?;
    writeln!(w)?;
    writeln!(w, "Done.\t {}", format_timestamp(completed_at))?;
    writeln!(w, "========================================================")
}

fn tape_char(case: &Case) -> char {
    match case.result() {
        TestResult::Passed => TAPE_CHR_PASSED,
        TestResult::Failed => TAPE_CHR_FAILED,
        TestResult::Undefined => TAPE_CHR_INVALID,
    }
}

/// Writes the legend line and the result tape, one character per case in
/// registration order.
fn write_summary<W: Write>(w: &mut W, run: &TestRun) -> io::Result<()> {
    write!(
        w,
        "Summary ({}=fail, {}=pass, {}=invalid):\n\t",
        TAPE_CHR_FAILED, TAPE_CHR_PASSED, TAPE_CHR_INVALID
    )?;
    for case in run.cases() {
        write!(w, "{}", tape_char(case))?;
    }
    write!(w, "\r\n")
}

/// Writes the PASS/FAIL verdict and, for an imperfect run, the numbered
/// detail entries for every failed or unevaluated case.
fn write_details<W: Write>(w: &mut W, run: &TestRun) -> io::Result<()> {
    let stats = run.stats();
    if stats.all_passed() {
        write!(w, "\nResult:\n\t{}", "PASS".green().bold())?;
    } else {
        writeln!(
            w,
            "\nDetails ({} fails, {} invalid):",
            stats.failed,
            stats.invalid()
        )?;

        let mut num = 0u32;
        for case in run.cases() {
            match case.result() {
                TestResult::Failed => {
                    num += 1;
                    writeln!(
                        w,
                        "\t{}) {} -- {}: {}",
                        num,
                        case.name(),
                        case.message_location(),
                        case.message()
                    )?;
                }
                TestResult::Undefined => {
                    num += 1;
                    writeln!(
                        w,
                        "\t{}) {} -- {}: not evaluated",
                        num,
                        case.name(),
                        case.location()
                    )?;
                }
                TestResult::Passed => {}
            }
        }

        write!(w, "\nResult:\n\t{}", "FAIL".red().bold())?;
    }

    writeln!(
        w,
        " ({} runs, {} passes, {} fails)",
        stats.total, stats.passed, stats.failed
    )
}
