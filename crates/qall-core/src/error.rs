//! Error types for the Qall extraction engine.

use thiserror::Error;

/// Result type alias using the extraction engine's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for extraction-schema operations.
///
/// Every variant is non-fatal and locally recoverable: a failed schema parse
/// leaves the caller's state untouched and the user free to correct the
/// input and retry.
#[derive(Error, Debug)]
pub enum Error {
    /// Schema text failed to parse as JSON syntax (carries the underlying
    /// parser message)
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Schema text parsed as JSON but was not a plain object
    #[error("Schema must be a JSON object")]
    NotAnObject,

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
