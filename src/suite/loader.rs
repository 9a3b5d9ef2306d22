//! Suite document loading.
//!
//! Provides [`parse_suite`], which deserializes a YAML document string
//! into a [`Spec`], plus the [`load_from_path`] and [`read_from_stream`]
//! entry points that read a whole source before decoding identically.
//! There is no partial decode: a malformed document yields
//! [`SuiteError::Decode`] and no `Spec`.

use std::fs;
use std::io::Read;
use std::path::Path;

use super::error::SuiteError;
use super::types::Spec;

/// Decodes a suite document from a YAML string.
///
/// Unknown keys anywhere in the document are ignored; absent optional
/// keys decode to empty strings or empty sequences.
///
/// # Errors
///
/// Returns [`SuiteError::Decode`] if the input is not well-formed YAML
/// or does not map onto the suite shape.
///
/// # Examples
///
///     use confsuite::suite::parse_suite;
///
///     let yaml = r#"
///     name: CommonMark
///     version: v0.29
///     tests:
///       - i: "*hello*"
///         o: "<em>hello</em>"
///     "#;
///     let spec = parse_suite(yaml).unwrap();
///     assert_eq!(spec.name, "CommonMark");
///     assert_eq!(spec.test_count(), 1);
pub fn parse_suite(input: &str) -> Result<Spec, SuiteError> {
    serde_saphyr::from_str(input).map_err(|error| SuiteError::Decode(error.to_string()))
}

/// Loads a suite document from the YAML file at `path`.
///
/// # Errors
///
/// Returns [`SuiteError::Io`] if the file cannot be read and
/// [`SuiteError::Decode`] if its contents do not decode into a suite.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Spec, SuiteError> {
    let input = fs::read_to_string(path)?;
    parse_suite(&input)
}

/// Reads a suite document from an arbitrary readable stream.
///
/// The stream is read to completion before decoding; decoding behaves
/// exactly as [`load_from_path`].
///
/// # Errors
///
/// Returns [`SuiteError::Io`] if reading the stream fails (including
/// non-UTF-8 content) and [`SuiteError::Decode`] if the content does
/// not decode into a suite.
pub fn read_from_stream(mut reader: impl Read) -> Result<Spec, SuiteError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_suite(&input)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
