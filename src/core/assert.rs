//! # Assertion Engine / 断言引擎
//!
//! This module implements the assertion methods available inside test
//! functions. A passing assertion marks the case `Passed` and returns
//! normally; a failing one records the message and the failing call site on
//! the case, then escapes with [`CheckFailed`] so that `?` returns control
//! to the case runner.
//!
//! 此模块实现了测试函数内部可用的断言方法。
//! 通过的断言将用例标记为 `Passed` 并正常返回；
//! 失败的断言将消息和失败调用位置记录在用例上，
//! 然后以 [`CheckFailed`] 逃逸，使 `?` 将控制权交还给用例运行器。

use crate::core::models::{
    Case, CheckFailed, CheckResult, MAX_MESSAGE_LEN, SourceLocation, TestResult,
};
use std::ptr;

/// Message recorded by a boolean check when the caller supplied none.
const DEFAULT_FAILURE_MESSAGE: &str = "assert failed.";

impl Case {
    /// Marks the case as passed. Shorthand for a boolean check on `true`.
    pub fn pass(&mut self) -> CheckResult {
        self.record_pass();
        Ok(())
    }

    /// Unconditionally fails the case with the supplied message.
    #[track_caller]
    pub fn fail(&mut self, message: &str) -> CheckResult {
        self.check(false, message)
    }

    /// Passes when `condition` is true. On failure the supplied message is
    /// recorded verbatim; an empty message falls back to a default text.
    #[track_caller]
    pub fn check(&mut self, condition: bool, message: &str) -> CheckResult {
        if condition {
            self.record_pass();
            Ok(())
        } else {
            let text = if message.is_empty() {
                DEFAULT_FAILURE_MESSAGE
            } else {
                message
            };
            Err(self.record_failure(text, SourceLocation::caller()))
        }
    }

    /// Passes when both integers are equal. Arguments widen to `i128`, so
    /// any signed integer type compares without truncation.
    #[track_caller]
    pub fn check_int_eq(
        &mut self,
        expected: impl Into<i128>,
        actual: impl Into<i128>,
    ) -> CheckResult {
        let expected = expected.into();
        let actual = actual.into();
        if actual == expected {
            self.record_pass();
            Ok(())
        } else {
            let message = format!("expected <{}>, but was <{}>", expected, actual);
            Err(self.record_failure(&message, SourceLocation::caller()))
        }
    }

    /// Passes when `actual` deviates from `expected` by at most `tolerance`.
    /// The boundary is inclusive; a zero tolerance requires exact equality.
    ///
    /// # Panics
    /// A NaN tolerance is a contract violation and panics.
    #[track_caller]
    pub fn check_flt_eq(&mut self, expected: f64, actual: f64, tolerance: f64) -> CheckResult {
        assert!(!tolerance.is_nan(), "tolerance must not be NaN");

        let deviation = (actual - expected).abs();
        if deviation > tolerance {
            let message = format!(
                "expected <{:.6}>, but was <{:.6}> (Deviation <{:.6}> exceeds <{:.6}>)",
                expected, actual, deviation, tolerance
            );
            Err(self.record_failure(&message, SourceLocation::caller()))
        } else {
            self.record_pass();
            Ok(())
        }
    }

    /// Passes when both references are the same object (pointer identity) or
    /// both are `None`. The message singles out an absent side.
    #[track_caller]
    pub fn check_ref_eq<T: ?Sized>(
        &mut self,
        expected: Option<&T>,
        actual: Option<&T>,
    ) -> CheckResult {
        let location = SourceLocation::caller();
        match (expected, actual) {
            (None, None) => {
                self.record_pass();
                Ok(())
            }
            (Some(e), Some(a)) if ptr::eq(e, a) => {
                self.record_pass();
                Ok(())
            }
            (None, Some(a)) => {
                let message = format!("expected <NULL>, but was <{:p}>", a);
                Err(self.record_failure(&message, location))
            }
            (Some(e), None) => {
                let message = format!("expected <{:p}>, but was <NULL>", e);
                Err(self.record_failure(&message, location))
            }
            (Some(e), Some(a)) => {
                let message = format!("expected <{:p}>, but was <{:p}>", e, a);
                Err(self.record_failure(&message, location))
            }
        }
    }

    /// Passes when `actual` holds a reference.
    #[track_caller]
    pub fn check_not_none<T: ?Sized>(&mut self, actual: Option<&T>) -> CheckResult {
        if actual.is_some() {
            self.record_pass();
            Ok(())
        } else {
            Err(self.record_failure("<NULL> unexpected", SourceLocation::caller()))
        }
    }

    /// Passes when `actual` holds a string equal to `expected`. An absent
    /// actual value is reported as `NULL`.
    #[track_caller]
    pub fn check_str_eq(&mut self, expected: &str, actual: Option<&str>) -> CheckResult {
        match actual {
            Some(a) if a == expected => {
                self.record_pass();
                Ok(())
            }
            Some(a) => {
                let message = format!("expected <{}>, but was <{}>", expected, a);
                Err(self.record_failure(&message, SourceLocation::caller()))
            }
            None => {
                let message = format!("expected <{}>, but was <NULL>", expected);
                Err(self.record_failure(&message, SourceLocation::caller()))
            }
        }
    }

    /// Compares `expected.len()` bytes. The first mismatch is reported with
    /// its offset and both byte values; later offsets stay unchecked.
    ///
    /// # Panics
    /// Panics when `actual` is shorter than `expected`; the comparison
    /// length is taken from the expected buffer.
    #[track_caller]
    pub fn check_mem_eq(&mut self, expected: &[u8], actual: &[u8]) -> CheckResult {
        assert!(
            actual.len() >= expected.len(),
            "actual buffer ({} bytes) is shorter than expected buffer ({} bytes)",
            actual.len(),
            expected.len()
        );

        let location = SourceLocation::caller();
        for (offset, (&e, &a)) in expected.iter().zip(actual).enumerate() {
            if e != a {
                let message = format!(
                    "mismatch at offset <{}>: expected <0x{:02X}>, but was <0x{:02X}>",
                    offset, e, a
                );
                return Err(self.record_failure(&message, location));
            }
        }

        // All bytes matching
        self.record_pass();
        Ok(())
    }

    fn record_pass(&mut self) {
        self.result = TestResult::Passed;
    }

    fn record_failure(&mut self, message: &str, location: SourceLocation) -> CheckFailed {
        self.result = TestResult::Failed;
        self.message = clip_message(message);
        self.message_location = location;
        CheckFailed
    }
}

/// Clips a message to [`MAX_MESSAGE_LEN`] bytes, backing off to the nearest
/// character boundary.
fn clip_message(message: &str) -> String {
    if message.len() <= MAX_MESSAGE_LEN {
        return message.to_string();
    }
    let mut end = MAX_MESSAGE_LEN;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    message[..end].to_string()
}
