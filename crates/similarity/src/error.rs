//! Error types for the similarity crate.

use thiserror::Error;

/// Result type alias for similarity operations.
pub type Result<T> = std::result::Result<T, SimilarityError>;

/// Errors that can occur while comparing strings.
///
/// Comparisons themselves never fail on degenerate input (empty strings,
/// disjoint alphabets, repeated characters). The only contract failure is
/// an absent input at the boundary.
#[derive(Debug, Error)]
pub enum SimilarityError {
    /// An input string was absent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Mode name or code is not one of the known algorithms
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with fuzzmatch-core error handling.
/// Range: 11xxx for similarity errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityErrorCode {
    /// An input string was absent
    InvalidArgument = 11001,
    /// Unknown mode identifier
    UnknownMode = 11002,
    /// JSON parsing error
    JsonParsing = 11003,
}

impl SimilarityError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SimilarityErrorCode {
        match self {
            SimilarityError::InvalidArgument(_) => SimilarityErrorCode::InvalidArgument,
            SimilarityError::UnknownMode(_) => SimilarityErrorCode::UnknownMode,
            SimilarityError::JsonError(_) => SimilarityErrorCode::JsonParsing,
        }
    }

    pub(crate) fn missing(which: &str) -> Self {
        SimilarityError::InvalidArgument(format!("{} is absent", which))
    }
}
