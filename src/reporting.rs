//! # Reporting Module / 报告模块
//!
//! This module turns a finished test run into human-readable output: a
//! console summary with a result tape and detail listing, and a
//! self-contained HTML report.
//!
//! 此模块将完成的测试运行转换为人类可读的输出：
//! 带有结果纸带和详细列表的控制台摘要，以及独立的 HTML 报告。

use chrono::{DateTime, Utc};

pub mod console;
pub mod html;

// Re-export common reporting functions
pub use console::{print_run_results, write_run_results};
pub use html::{render_report, write_report};

/// Renders a completion timestamp in the fixed ISO-8601-with-offset shape
/// shared by the console trailer and the HTML header.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%z").to_string()
}
