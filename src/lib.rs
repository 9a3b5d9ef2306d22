//! `confsuite` — a loader and checker for input/output conformance-test
//! suites.
//!
//! A suite is a named, versioned collection of input/expected-output cases,
//! optionally grouped into sections, described in a YAML document. This crate
//! loads such documents into typed values and runs a caller-supplied check
//! function over every case in document order, stopping at the first failure
//! so it can be inspected.

/// Suite types, YAML loading, and the fail-fast checker.
pub mod suite;
