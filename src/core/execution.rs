//! # Execution Engine / 执行引擎
//!
//! This module runs the test tree: it resets and invokes individual cases,
//! walks groups and modules in registration order, and drives a whole
//! [`TestRun`] including the final reporting step.
//!
//! 此模块负责运行测试树：重置并调用单个用例，
//! 按注册顺序遍历用例组和模块，并驱动整个 [`TestRun`]，包括最终的报告步骤。

use chrono::{DateTime, Utc};
use std::io::{self, Write};
use std::process::ExitCode;

use crate::core::config::RunConfig;
use crate::core::models::{Case, Group, Module, RunItem, TestResult, TestRun};
use crate::reporting;

impl Case {
    /// Executes the test function once.
    ///
    /// The result and message buffer are reset first, so a case can be run
    /// repeatedly. An `Err` escaping from the test function means an
    /// assertion already recorded its failure on the case; the remainder of
    /// the test function was abandoned at that point.
    pub fn run(&mut self) {
        self.result = TestResult::Undefined;
        self.message.clear();

        let test_fn = self.test_fn();
        let _ = test_fn(self);

        if self.print_results {
            let stdout = io::stdout();
            let _ = self.write_result_lines(&mut stdout.lock());
        }
    }

    /// Writes the machine-parsable result lines for this case.
    ///
    /// The `file:line:col: severity: text` shape matches the problem-matcher
    /// convention of common build tools, which lets IDEs hyperlink failures.
    pub fn write_result_lines<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let location = self.location();
        match self.result() {
            TestResult::Passed => {
                writeln!(w, "{}:0: info: {} passed.", location, self.name())
            }
            TestResult::Failed => {
                writeln!(w, "{}:0: error: {} failed.", location, self.name())?;
                writeln!(
                    w,
                    "{}:0: error: {}",
                    self.message_location(),
                    self.message()
                )
            }
            TestResult::Undefined => {
                writeln!(w, "{}:0: warning: {} not evaluated.", location, self.name())
            }
        }
    }
}

impl Group {
    /// Runs every case in registration order.
    pub fn run(&mut self) {
        for case in self.cases_mut() {
            case.run();
        }
    }
}

impl Module {
    /// Runs every group in registration order.
    pub fn run(&mut self) {
        for group in self.groups_mut() {
            group.run();
        }
    }
}

impl TestRun {
    /// Registers and immediately runs a standalone case.
    ///
    /// # Panics
    /// Panics when the run item capacity is exceeded.
    pub fn run_case(&mut self, mut case: Case) {
        case.run();
        self.push_item(RunItem::Case(case));
    }

    /// Registers and immediately runs a group.
    ///
    /// # Panics
    /// Panics when the run item capacity is exceeded.
    pub fn run_group(&mut self, mut group: Group) {
        group.run();
        self.push_item(RunItem::Group(group));
    }

    /// Registers and immediately runs a module.
    ///
    /// # Panics
    /// Panics when the run item capacity is exceeded.
    pub fn run_module(&mut self, mut module: Module) {
        module.run();
        self.push_item(RunItem::Module(module));
    }

    /// The overall run result: `Passed` iff every registered case passed.
    /// An `Undefined` case counts into the total but into neither passes
    /// nor fails, so it forces `Failed`; unexecuted assertions are not
    /// silently acceptable. A run with no cases is a vacuous pass.
    pub fn result(&self) -> TestResult {
        let stats = self.stats();
        if stats.all_passed() {
            TestResult::Passed
        } else {
            TestResult::Failed
        }
    }

    /// Maps the overall result onto the process exit-code contract:
    /// success iff the run passed.
    pub fn exit_code(&self) -> ExitCode {
        if self.result().is_passed() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// Emits the configured reports with the current time as the completion
    /// timestamp and returns the overall result.
    pub fn finish(&self, config: &RunConfig) -> TestResult {
        self.finish_at(config, Utc::now())
    }

    /// Emits the configured reports for a caller-supplied completion
    /// timestamp. Report output is best-effort: a report file that cannot
    /// be written is skipped silently and does not affect the result.
    pub fn finish_at(&self, config: &RunConfig, completed_at: DateTime<Utc>) -> TestResult {
        if config.summary {
            reporting::console::print_run_results(self, &completed_at);
        }
        if config.report {
            reporting::html::write_report(self, &completed_at, &config.report_file);
        }
        self.result()
    }
}
