//! Strongly-typed suite structs for conformance-test documents.
//!
//! These types mirror the YAML document format: a top-level `Spec` with
//! opaque metadata strings, a sequence of top-level tests, and a sequence
//! of named sections each holding its own tests. Sequence order is
//! preserved everywhere because it defines check order. Unknown document
//! keys are ignored and absent optional keys decode to empty values.

use serde::Deserialize;
use std::fmt;

// ── Test ────────────────────────────────────────────────────────────

/// A single conformance case: an input, the output the system under test
/// should produce for it, and the output it actually produced the last
/// time it was checked.
///
/// # Examples
///
///     use confsuite::suite::parse_suite;
///
///     let yaml = r#"
///     name: Example
///     tests:
///       - i: "*hi*"
///         o: "<em>hi</em>"
///     "#;
///     let spec = parse_suite(yaml).unwrap();
///     let test = spec.tests.first().unwrap();
///     assert_eq!(test.input, "*hi*");
///     assert_eq!(test.got, "");
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Test {
    /// The string fed to the system under test.
    #[serde(rename = "i", default)]
    pub input: String,

    /// The string the system under test should produce.
    #[serde(rename = "o", default)]
    pub expected: String,

    /// Free-form human annotation; never evaluated.
    #[serde(rename = "n", default)]
    pub notes: String,

    /// The output captured the last time this test was evaluated.
    ///
    /// Never present in the document; starts empty and is written by the
    /// evaluate function during [`Spec::check`].
    #[serde(skip)]
    pub got: String,
}

impl Test {
    /// Returns `true` if the last captured output equals the expected
    /// output.
    ///
    /// Comparison is exact string equality; no trimming or normalization
    /// is applied. A test that has never been evaluated passes only when
    /// its expected output is also empty.
    #[must_use]
    pub fn passing(&self) -> bool {
        self.got == self.expected
    }

    /// Renders a fixed-format multi-line block describing the current
    /// state of the test, for display to a developer debugging a failing
    /// case.
    ///
    /// Fields appear in a fixed order: state, input, wanted, got. All
    /// values are debug-quoted so whitespace and escapes are visible.
    #[must_use]
    pub fn state(&self) -> String {
        let state = if self.passing() { "passing" } else { "failing" };
        format!(
            "\nState:    {state:?}\nInput:    {:?}\nWanted:   {:?}\nGot:      {:?}\n",
            self.input, self.expected, self.got
        )
    }
}

impl fmt::Display for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.state())
    }
}

// ── Section ─────────────────────────────────────────────────────────

/// A named grouping of related tests.
///
/// Sections do not nest. The order of `tests` is the order they appear
/// in the document and the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Section {
    /// Section name.
    #[serde(default)]
    pub name: String,

    /// Free-form human annotation; never evaluated.
    #[serde(default)]
    pub notes: String,

    /// The section's tests, in document order.
    #[serde(default)]
    pub tests: Vec<Test>,
}

// ── Spec ────────────────────────────────────────────────────────────

/// A whole conformance-test suite: metadata, top-level tests, and
/// sections.
///
/// All metadata fields are opaque strings carried through from the
/// document without validation. The `Spec` exclusively owns its tests
/// and sections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Spec {
    /// Suite name, e.g. `CommonMark`.
    #[serde(default)]
    pub name: String,

    /// Suite version, e.g. `v0.29`.
    #[serde(default)]
    pub version: String,

    /// Where the suite came from.
    #[serde(default)]
    pub source: String,

    /// Issue-tracker URL for the suite.
    #[serde(default)]
    pub issues: String,

    /// Discussion-forum URL for the suite.
    #[serde(default)]
    pub discuss: String,

    /// Free-form human annotation; never evaluated.
    #[serde(default)]
    pub notes: String,

    /// Publication date of the suite, as written in the document.
    #[serde(default)]
    pub date: String,

    /// License URL or identifier for the suite.
    #[serde(default)]
    pub license: String,

    /// Tests not belonging to any section, in document order.
    #[serde(default)]
    pub tests: Vec<Test>,

    /// Named sections, in document order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Spec {
    /// Returns the total number of tests across the top level and all
    /// sections.
    #[must_use]
    pub fn test_count(&self) -> usize {
        self.tests.len()
            + self
                .sections
                .iter()
                .map(|section| section.tests.len())
                .sum::<usize>()
    }

    /// Iterates over every test in check order: top-level tests first,
    /// then each section's tests, all in document order.
    pub fn iter_tests(&self) -> impl Iterator<Item = &Test> {
        self.tests.iter().chain(
            self.sections
                .iter()
                .flat_map(|section| section.tests.iter()),
        )
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
