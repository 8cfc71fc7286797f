//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Suite Runner,
//! including the test tree model, the assertion engine, run configuration
//! and the execution logic.
//!
//! 此模块包含 Suite Runner 的核心功能，
//! 包括测试树模型、断言引擎、运行配置和执行逻辑。

pub mod assert;
pub mod config;
pub mod execution;
pub mod models;
pub mod stats;

// Re-exports
pub use self::config::RunConfig;
pub use self::models::{Case, CheckResult, Group, Module, RunItem, TestResult, TestRun};
pub use self::stats::Stats;
