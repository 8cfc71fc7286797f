//! # Statistics Aggregation Unit Tests / 统计聚合单元测试
//!
//! This module verifies the counter arithmetic and the recursive
//! aggregation over cases, groups, modules and whole runs, including the
//! overall-result policy for unevaluated cases.
//!
//! 此模块验证计数器算术，以及对用例、用例组、模块和整个运行的递归聚合，
//! 包括未评估用例的总体结果策略。

use suite_runner::core::models::{Case, CheckResult, Group, Module, TestResult, TestRun};
use suite_runner::core::stats::Stats;

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

fn run_case(name: &'static str, test_fn: fn(&mut Case) -> CheckResult) -> Case {
    let mut case = quiet_case(name, test_fn);
    case.run();
    case
}

#[cfg(test)]
mod stats_value_tests {
    use super::*;

    #[test]
    fn test_default_stats_are_zero() {
        let stats = Stats::default();

        assert_eq!(stats.total, 0);
        assert_eq!(stats.passed, 0);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.invalid(), 0);
    }

    #[test]
    fn test_stats_add_elementwise() {
        let a = Stats { total: 3, passed: 2, failed: 1 };
        let b = Stats { total: 2, passed: 0, failed: 1 };

        let sum = a + b;
        assert_eq!(sum, Stats { total: 5, passed: 2, failed: 2 });
        assert_eq!(sum.invalid(), 1);
    }

    #[test]
    fn test_all_passed_holds_vacuously_for_empty_stats() {
        assert!(Stats::default().all_passed());
        assert!(Stats { total: 2, passed: 2, failed: 0 }.all_passed());
        assert!(!Stats { total: 2, passed: 1, failed: 0 }.all_passed());
    }
}

#[cfg(test)]
mod case_stats_tests {
    use super::*;

    #[test]
    fn test_passed_case_counts_one_pass() {
        let case = run_case("ok", passing);
        assert_eq!(case.stats(), Stats { total: 1, passed: 1, failed: 0 });
    }

    #[test]
    fn test_failed_case_counts_one_fail() {
        let case = run_case("bad", failing);
        assert_eq!(case.stats(), Stats { total: 1, passed: 0, failed: 1 });
    }

    #[test]
    fn test_unevaluated_case_counts_into_neither_bucket() {
        let case = run_case("idle", noop);
        let stats = case.stats();

        assert_eq!(stats, Stats { total: 1, passed: 0, failed: 0 });
        assert_eq!(stats.invalid(), 1);
    }
}

#[cfg(test)]
mod aggregation_tests {
    use super::*;

    #[test]
    fn test_group_stats_sum_over_cases() {
        let mut group = Group::new("mixed")
            .with_case(quiet_case("a", passing))
            .with_case(quiet_case("b", failing))
            .with_case(quiet_case("c", noop));
        group.run();

        assert_eq!(group.stats(), Stats { total: 3, passed: 1, failed: 1 });
    }

    #[test]
    fn test_module_stats_sum_over_groups() {
        let mut module = Module::new("m")
            .with_group(
                Group::new("g1")
                    .with_case(quiet_case("a", passing))
                    .with_case(quiet_case("b", passing)),
            )
            .with_group(Group::new("g2").with_case(quiet_case("c", failing)));
        module.run();

        assert_eq!(module.stats(), Stats { total: 3, passed: 2, failed: 1 });
    }

    #[test]
    fn test_run_total_equals_the_sum_over_registered_items() {
        let mut run = TestRun::new("sum");
        run.run_case(quiet_case("standalone", passing));
        run.run_group(
            Group::new("pair")
                .with_case(quiet_case("a", passing))
                .with_case(quiet_case("b", failing)),
        );
        run.run_module(
            Module::new("m")
                .with_group(Group::new("g").with_case(quiet_case("c", noop))),
        );

        let item_total: usize = run.items().iter().map(|item| item.stats().total).sum();
        let stats = run.stats();

        assert_eq!(stats.total, item_total);
        assert_eq!(stats, Stats { total: 4, passed: 2, failed: 1 });
        assert_eq!(stats.invalid(), 1);
    }
}

#[cfg(test)]
mod overall_result_tests {
    use super::*;

    #[test]
    fn test_all_passed_yields_overall_pass() {
        let mut run = TestRun::new("green");
        run.run_case(quiet_case("a", passing));
        run.run_case(quiet_case("b", passing));

        assert_eq!(run.result(), TestResult::Passed);
    }

    #[test]
    fn test_any_failure_yields_overall_fail() {
        let mut run = TestRun::new("red");
        run.run_case(quiet_case("a", passing));
        run.run_case(quiet_case("b", failing));

        assert_eq!(run.result(), TestResult::Failed);
    }

    #[test]
    fn test_unevaluated_case_forces_overall_fail_despite_zero_fails() {
        let mut run = TestRun::new("idle");
        run.run_case(quiet_case("a", passing));
        run.run_case(quiet_case("b", noop));

        let stats = run.stats();
        assert_eq!(stats.failed, 0);
        assert_eq!(run.result(), TestResult::Failed);
    }
}
