//! Logged assertion helpers for framegrid tests.
//!
//! These wrap standard assertions with tracing logs so a failing comparison
//! of rendered grids shows both sides line by line in the captured output.

#![allow(dead_code)]

use std::fmt::Debug;

use framegrid::cells::unit_len;

/// Assert equality with detailed logging.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );
}

/// Assert that a result is `Ok`, returning the value.
#[track_caller]
pub fn assert_ok_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> T {
    match result {
        Ok(value) => {
            tracing::trace!(context = context, "result is Ok");
            value
        }
        Err(e) => {
            tracing::error!(context = context, error = ?e, "expected Ok");
            panic!("{context}: expected Ok, got Err({e:?})");
        }
    }
}

/// Assert that a result is `Err`, returning the error.
#[track_caller]
pub fn assert_err_logged<T: Debug, E: Debug>(context: &str, result: Result<T, E>) -> E {
    match result {
        Err(e) => {
            tracing::debug!(context = context, error = ?e, "result is Err as expected");
            e
        }
        Ok(value) => {
            tracing::error!(context = context, value = ?value, "expected Err");
            panic!("{context}: expected Err, got Ok({value:?})");
        }
    }
}

/// Assert that a rendered grid matches line by line.
#[track_caller]
pub fn assert_grid_eq(context: &str, actual: &str, expected: &str) {
    if actual != expected {
        for (i, (a, e)) in actual.lines().zip(expected.lines()).enumerate() {
            if a != e {
                tracing::error!(
                    context = context,
                    line = i,
                    actual = a,
                    expected = e,
                    "line differs"
                );
            }
        }
        tracing::error!(context = context, "\n{actual}");
    }
    assert_eq!(actual, expected, "{context}: rendered grid differs");
}

/// Assert that every line of a rendered grid has the same number of units.
#[track_caller]
pub fn assert_rectangular(context: &str, rendered: &str) {
    let widths: Vec<usize> = rendered.lines().map(unit_len).collect();
    tracing::debug!(context = context, widths = ?widths, "checking rectangularity");
    if let Some(&first) = widths.first() {
        assert!(
            widths.iter().all(|&w| w == first),
            "{context}: ragged grid {widths:?}\n{rendered}"
        );
    }
}

/// Assert that a string contains a substring with logging.
#[track_caller]
pub fn assert_contains_logged(context: &str, haystack: &str, needle: &str) {
    let contains = haystack.contains(needle);
    if !contains {
        tracing::error!(
            context = context,
            needle = needle,
            haystack = haystack,
            "assertion failed: substring not found"
        );
    }
    assert!(contains, "{context}: expected to contain {needle:?}");
}
