//! The sequential fail-fast checker.
//!
//! [`Spec::check`] walks every test in document order, hands each one to a
//! caller-supplied evaluate function, and stops at the first failure. The
//! evaluate function is expected to exercise the system under test with
//! the test's input, record the produced output in the test's `got` field,
//! and return whether the test passed.

use super::types::{Spec, Test};

impl Spec {
    /// Applies `evaluate` to every test until one fails.
    ///
    /// Walk order is fixed: top-level tests in document order, then each
    /// section in document order, each section's tests in document order.
    /// The first test for which `evaluate` returns `false` ends the walk
    /// immediately; a mutable handle to that test is returned so the
    /// output the evaluate function recorded in `got` can be inspected,
    /// e.g. via [`Test::state`]. Returns `None` when every test passes.
    ///
    /// Evaluation is sequential and synchronous: no retries, no
    /// aggregation of multiple failures, no isolation between tests. A
    /// panic inside `evaluate` propagates to the caller.
    ///
    /// # Examples
    ///
    ///     use confsuite::suite::parse_suite;
    ///
    ///     let yaml = r#"
    ///     tests:
    ///       - i: "a"
    ///         o: "A"
    ///     "#;
    ///     let mut spec = parse_suite(yaml).unwrap();
    ///     let failing = spec.check(|test| {
    ///         test.got = test.input.to_uppercase();
    ///         test.got == test.expected
    ///     });
    ///     assert!(failing.is_none());
    pub fn check<F>(&mut self, mut evaluate: F) -> Option<&mut Test>
    where
        F: FnMut(&mut Test) -> bool,
    {
        let walk = self.tests.iter_mut().chain(
            self.sections
                .iter_mut()
                .flat_map(|section| section.tests.iter_mut()),
        );
        for test in walk {
            if !evaluate(test) {
                return Some(test);
            }
        }
        None
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
