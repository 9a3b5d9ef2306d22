//! Suite types and loading for conformance-test documents.
//!
//! This module provides strongly-typed Rust representations of the suite
//! document format, YAML loading via `serde-saphyr`, and the sequential
//! fail-fast checker that applies a caller-supplied evaluate function to
//! every test in document order.

mod check;
mod error;
mod loader;
mod types;

pub use error::SuiteError;
pub use loader::{load_from_path, parse_suite, read_from_stream};
pub use types::{Section, Spec, Test};
