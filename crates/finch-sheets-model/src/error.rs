//! Error types for finch-sheets-model

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in finch-sheets-model
///
/// Validation happens eagerly at construction/parse entry points, so every
/// error is a permanent, input-dependent failure: retrying with the same
/// input will fail the same way.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input: empty/whitespace, failed a grammar check, or has
    /// the wrong structural shape (missing separator, missing quotes)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Numerically out-of-bounds value, naming the field and its bounds
    #[error("{field} {value} out of range (must be within {min}..={max})")]
    OutOfRange {
        /// Which field violated its bound
        field: &'static str,
        /// The offending value
        value: u32,
        /// Inclusive lower bound
        min: u32,
        /// Inclusive upper bound
        max: u32,
    },
}
