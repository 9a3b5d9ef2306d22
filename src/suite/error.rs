//! Error types for suite document loading.

/// Errors that can occur when loading a suite document.
///
/// Both variants are surfaced directly to the caller; loading is never
/// retried and never partially succeeds.
#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    /// The document source could not be read (missing file, permission
    /// denied, invalid UTF-8, stream failure).
    #[error("failed to read suite document: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes were not a well-formed YAML document, or did not map
    /// onto the suite shape.
    #[error("YAML deserialization failed: {0}")]
    Decode(String),
}
