//! # Statistics Aggregation / 统计聚合
//!
//! Pure, on-demand counting over the test tree. `Stats` is a value type
//! with no identity; nothing here mutates the tree.
//!
//! 对测试树进行纯粹的、按需的计数。`Stats` 是没有身份的值类型；
//! 此处不会修改测试树。

use serde::Serialize;
use std::ops::{Add, AddAssign};

use crate::core::models::{Case, Group, Module, RunItem, TestRun};

/// Pass/fail counters over some part of the test tree.
/// 测试树某个部分的通过/失败计数器。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Total number of cases. / 测试用例总数。
    pub total: usize,
    /// Number of passed cases. / 通过的用例数。
    pub passed: usize,
    /// Number of failed cases. / 失败的用例数。
    pub failed: usize,
}

impl Stats {
    /// Cases that are neither passed nor failed (never evaluated).
    pub fn invalid(&self) -> usize {
        self.total - self.passed - self.failed
    }

    /// True iff every counted case passed. Holds vacuously for an empty
    /// tree.
    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(self, rhs: Stats) -> Stats {
        Stats {
            total: self.total + rhs.total,
            passed: self.passed + rhs.passed,
            failed: self.failed + rhs.failed,
        }
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, rhs: Stats) {
        *self = *self + rhs;
    }
}

impl Case {
    /// Counters for a single case: one total, at most one pass or fail.
    pub fn stats(&self) -> Stats {
        Stats {
            total: 1,
            passed: usize::from(self.result().is_passed()),
            failed: usize::from(self.result().is_failed()),
        }
    }
}

impl Group {
    pub fn stats(&self) -> Stats {
        self.cases()
            .iter()
            .fold(Stats::default(), |acc, case| acc + case.stats())
    }
}

impl Module {
    pub fn stats(&self) -> Stats {
        self.groups()
            .iter()
            .fold(Stats::default(), |acc, group| acc + group.stats())
    }
}

impl RunItem {
    pub fn stats(&self) -> Stats {
        match self {
            RunItem::Case(case) => case.stats(),
            RunItem::Group(group) => group.stats(),
            RunItem::Module(module) => module.stats(),
        }
    }
}

impl TestRun {
    pub fn stats(&self) -> Stats {
        self.items()
            .iter()
            .fold(Stats::default(), |acc, item| acc + item.stats())
    }
}
