//! Behaviour-driven tests for suite loading.
//!
//! These tests use `rstest` parameterization to express Given/When/Then
//! acceptance criteria for the loader's error contract.

mod common;

use common::load_fixture;
use confsuite::suite::parse_suite;
use rstest::rstest;

// ── Given valid documents, decoding succeeds ────────────────────────

#[rstest]
#[case::minimal_document("valid_minimal.yaml")]
#[case::full_document("valid_full.yaml")]
#[case::unknown_keys("valid_unknown_keys.yaml")]
fn given_a_valid_suite_file_when_parsed_then_it_succeeds(#[case] fixture: &str) {
    let yaml = load_fixture(fixture);
    let result = parse_suite(&yaml);
    assert!(
        result.is_ok(),
        "expected {fixture} to parse successfully, got: {:?}",
        result.err()
    );
}

// ── Given a broken document, decoding fails with an actionable error ─

#[rstest]
#[case::malformed_yaml("invalid_malformed.yaml")]
#[case::wrong_shape("invalid_wrong_shape.yaml")]
fn given_a_broken_suite_file_when_parsed_then_error_is_actionable(#[case] fixture: &str) {
    let yaml = load_fixture(fixture);
    let result = parse_suite(&yaml);
    assert!(result.is_err(), "expected {fixture} to fail decoding");
    let msg = result.err().map(|e| e.to_string()).unwrap_or_default();
    assert!(
        msg.contains("YAML deserialization failed"),
        "error for {fixture} should name the decode stage, got: {msg}"
    );
}
