//! # Test Tree Model / 测试树模型
//!
//! This module defines the data structures that make up the test tree:
//! cases, groups, modules and the top-level test run. It also defines the
//! result and escape types shared with the assertion engine.
//!
//! 此模块定义了组成测试树的数据结构：
//! 用例、用例组、测试模块和顶层测试运行。
//! 它还定义了与断言引擎共享的结果类型和逃逸类型。

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a recorded failure message, in bytes. Longer messages
/// are clipped at a character boundary.
/// 记录的失败消息的最大长度（字节）。更长的消息会在字符边界处被截断。
pub const MAX_MESSAGE_LEN: usize = 256;

/// Maximum number of test cases per group.
/// 每个用例组的最大测试用例数。
pub const MAX_CASES_PER_GROUP: usize = 256;

/// Maximum number of groups per module.
/// 每个模块的最大用例组数。
pub const MAX_GROUPS_PER_MODULE: usize = 128;

/// Maximum number of items registered directly on a test run.
/// 直接注册在测试运行上的最大条目数。
pub const MAX_ROOT_ITEMS: usize = 32;

/// The outcome of a single test case.
/// A case starts out `Undefined` on every run and only leaves that state
/// through the assertion engine.
///
/// 单个测试用例的结果。
/// 用例在每次运行开始时都是 `Undefined` 状态，只有通过断言引擎才会离开该状态。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestResult {
    /// No assertion has been evaluated yet. / 尚未评估任何断言。
    #[default]
    Undefined,
    /// The most recent assertion passed. / 最近的断言已通过。
    Passed,
    /// An assertion failed; the case carries the failure message.
    /// 某个断言失败；用例携带失败消息。
    Failed,
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestResult::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TestResult::Failed)
    }
}

/// A captured `file:line` pair identifying a declaration or a failing
/// assertion call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    file: &'static str,
    line: u32,
}

impl SourceLocation {
    /// Captures the location of the caller. Constructors and assertion
    /// methods are `#[track_caller]`, so this resolves to the user's code.
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Marker returned by a failing assertion. All failure detail (message and
/// location) is recorded on the case itself; the marker only drives the
/// early return out of the test function.
///
/// 失败断言返回的标记。所有失败细节（消息和位置）都记录在用例上；
/// 该标记仅用于驱动从测试函数中提前返回。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckFailed;

/// The return type of a test function and of every assertion method.
/// Test functions propagate the first failure with `?`, which gives the
/// unwind-to-runner behavior: no assertion after a failed one executes.
///
/// 测试函数和每个断言方法的返回类型。
/// 测试函数使用 `?` 传播第一个失败，从而获得回退到运行器的行为：
/// 失败断言之后的断言不会被执行。
pub type CheckResult = Result<(), CheckFailed>;

/// A test function. It receives the case it belongs to and performs zero or
/// more assertions against it.
/// 测试函数。它接收其所属的用例，并对其执行零个或多个断言。
pub type TestFn = fn(&mut Case) -> CheckResult;

/// A single test case: a named test function plus its recorded outcome.
///
/// 单个测试用例：一个命名的测试函数及其记录的结果。
#[derive(Debug, Clone)]
pub struct Case {
    name: &'static str,
    location: SourceLocation,
    test_fn: TestFn,
    pub(crate) result: TestResult,
    pub(crate) message: String,
    pub(crate) message_location: SourceLocation,
    pub(crate) print_results: bool,
}

impl Case {
    /// Creates a new case binding `name` to `test_fn`. The declaring source
    /// location is captured from the call site.
    #[track_caller]
    pub fn new(name: &'static str, test_fn: TestFn) -> Self {
        let location = SourceLocation::caller();
        Self {
            name,
            location,
            test_fn,
            result: TestResult::Undefined,
            message: String::new(),
            message_location: location,
            print_results: true,
        }
    }

    /// Controls whether running this case emits machine-parsable result
    /// lines on stdout. Enabled by default.
    pub fn with_result_lines(mut self, enabled: bool) -> Self {
        self.print_results = enabled;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub(crate) fn test_fn(&self) -> TestFn {
        self.test_fn
    }

    pub fn result(&self) -> TestResult {
        self.result
    }

    /// The recorded failure message. Empty unless the case failed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The call site of the failing assertion. Falls back to the declaring
    /// location while no failure has been recorded.
    pub fn message_location(&self) -> SourceLocation {
        self.message_location
    }
}

/// An ordered collection of test cases.
/// 测试用例的有序集合。
#[derive(Debug)]
pub struct Group {
    name: &'static str,
    location: SourceLocation,
    cases: Vec<Case>,
}

impl Group {
    #[track_caller]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            location: SourceLocation::caller(),
            cases: Vec::new(),
        }
    }

    /// Appends a case. Registration order is the execution and reporting
    /// order.
    ///
    /// # Panics
    /// Panics when the group already holds [`MAX_CASES_PER_GROUP`] cases.
    pub fn with_case(mut self, case: Case) -> Self {
        assert!(
            self.cases.len() < MAX_CASES_PER_GROUP,
            "group '{}' exceeds the case capacity of {}",
            self.name,
            MAX_CASES_PER_GROUP
        );
        self.cases.push(case);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub(crate) fn cases_mut(&mut self) -> &mut [Case] {
        &mut self.cases
    }
}

/// An ordered collection of groups.
/// 用例组的有序集合。
#[derive(Debug)]
pub struct Module {
    name: &'static str,
    location: SourceLocation,
    groups: Vec<Group>,
}

impl Module {
    #[track_caller]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            location: SourceLocation::caller(),
            groups: Vec::new(),
        }
    }

    /// Appends a group.
    ///
    /// # Panics
    /// Panics when the module already holds [`MAX_GROUPS_PER_MODULE`] groups.
    pub fn with_group(mut self, group: Group) -> Self {
        assert!(
            self.groups.len() < MAX_GROUPS_PER_MODULE,
            "module '{}' exceeds the group capacity of {}",
            self.name,
            MAX_GROUPS_PER_MODULE
        );
        self.groups.push(group);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub(crate) fn groups_mut(&mut self) -> &mut [Group] {
        &mut self.groups
    }
}

/// An entity registered at the top level of a test run. The reporters and
/// the statistics walk dispatch on the variant.
///
/// 注册在测试运行顶层的实体。报告器和统计遍历会基于变体进行分发。
#[derive(Debug)]
pub enum RunItem {
    Case(Case),
    Group(Group),
    Module(Module),
}

impl RunItem {
    /// All cases contained in this item, in registration order.
    pub fn cases(&self) -> Box<dyn Iterator<Item = &Case> + '_> {
        match self {
            RunItem::Case(case) => Box::new(std::iter::once(case)),
            RunItem::Group(group) => Box::new(group.cases().iter()),
            RunItem::Module(module) => Box::new(
                module
                    .groups()
                    .iter()
                    .flat_map(|group| group.cases().iter()),
            ),
        }
    }
}

/// The top-level container of one harness invocation. Items are appended in
/// registration order, which is the canonical iteration order for the
/// summary tape and the HTML report.
///
/// 一次框架调用的顶层容器。条目按注册顺序追加，
/// 该顺序是摘要纸带和 HTML 报告的规范迭代顺序。
#[derive(Debug)]
pub struct TestRun {
    project_name: String,
    items: Vec<RunItem>,
}

impl TestRun {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            items: Vec::new(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn items(&self) -> &[RunItem] {
        &self.items
    }

    /// All cases registered on this run, in registration order, recursing
    /// into groups and modules.
    pub fn cases(&self) -> impl Iterator<Item = &Case> + '_ {
        self.items.iter().flat_map(|item| item.cases())
    }

    pub(crate) fn push_item(&mut self, item: RunItem) {
        assert!(
            self.items.len() < MAX_ROOT_ITEMS,
            "test run '{}' exceeds the item capacity of {}",
            self.project_name,
            MAX_ROOT_ITEMS
        );
        self.items.push(item);
    }
}
