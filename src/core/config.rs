//! # Run Configuration / 运行配置
//!
//! The recognized report toggles of a test run, loadable from a TOML file.
//! Every field has a default, so a config file only states what it changes.
//!
//! 测试运行可识别的报告开关，可从 TOML 文件加载。
//! 每个字段都有默认值，因此配置文件只需写出要更改的内容。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Report toggles for a test run.
/// 测试运行的报告开关。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunConfig {
    /// The project name shown in the console banner and the HTML header.
    /// 显示在控制台横幅和 HTML 头部的项目名称。
    #[serde(default = "default_project_name")]
    pub project_name: String,
    /// Whether to print the console summary at the end of the run.
    /// 是否在运行结束时打印控制台摘要。
    #[serde(default = "default_true")]
    pub summary: bool,
    /// Whether to generate the HTML report file.
    /// 是否生成 HTML 报告文件。
    #[serde(default = "default_true")]
    pub report: bool,
    /// Where the HTML report is written.
    /// HTML 报告的写入位置。
    #[serde(default = "default_report_file")]
    pub report_file: PathBuf,
    /// Whether cases emit per-case result lines while running.
    /// 用例在运行时是否输出逐用例的结果行。
    #[serde(default = "default_true")]
    pub case_results: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            project_name: default_project_name(),
            summary: true,
            report: true,
            report_file: default_report_file(),
            case_results: true,
        }
    }
}

impl RunConfig {
    /// Loads a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<RunConfig> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

fn default_project_name() -> String {
    "Unnamed Project".to_string()
}

fn default_report_file() -> PathBuf {
    PathBuf::from("report.html")
}

fn default_true() -> bool {
    true
}
