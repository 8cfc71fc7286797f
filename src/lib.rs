//! # Suite Runner Library / Suite Runner 库
//!
//! This library provides the core functionality for the Suite Runner harness,
//! a lightweight, registration-driven unit-testing framework for
//! embedded-style projects.
//!
//! 此库为 Suite Runner 测试框架提供核心功能，
//! 这是一个轻量级的、基于注册的单元测试框架，面向嵌入式风格的项目。
//!
//! ## Modules / 模块
//!
//! - `core` - Test tree model, assertion engine and execution logic
//! - `reporting` - Console summaries and HTML report generation
//! - `cli` - Command-line interface of the showcase driver
//!
//! - `core` - 测试树模型、断言引擎和执行逻辑
//! - `reporting` - 控制台摘要和 HTML 报告生成
//! - `cli` - 演示驱动程序的命令行接口
//!
//! ## Usage / 用法
//!
//! Cases bind a name to a test function; groups collect cases; modules
//! collect groups. A [`core::models::TestRun`] registers and runs any of the
//! three at top level, then hands the collected outcomes to the reporters.
//!
//! ```no_run
//! use suite_runner::core::config::RunConfig;
//! use suite_runner::core::models::{Case, CheckResult, Group, TestRun};
//!
//! fn addition_holds(tc: &mut Case) -> CheckResult {
//!     tc.check_int_eq(4, 2 + 2)
//! }
//!
//! let mut run = TestRun::new("My Project");
//! run.run_group(Group::new("arithmetic").with_case(Case::new("addition_holds", addition_holds)));
//! run.finish(&RunConfig::default());
//! std::process::exit(if run.result().is_passed() { 0 } else { 1 });
//! ```

pub mod cli;
pub mod core;
pub mod reporting;

// Re-export commonly used items
pub use self::core::config;
pub use self::core::models;
pub use self::core::stats;
