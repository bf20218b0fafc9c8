//! Error types for RIR reshaping.

use thiserror::Error;

/// Errors raised while validating the shape of a RIR collection.
#[derive(Debug, Error)]
pub enum RirError {
    /// Microphone rows disagree on the number of sources.
    #[error("microphone {mic} lists {found} sources, expected {expected}")]
    SourceCountMismatch {
        /// Index of the offending microphone
        mic: usize,
        /// Source count of microphone 0
        expected: usize,
        /// Source count actually found
        found: usize,
    },
}

/// A specialized `Result` type for RIR operations.
pub type Result<T> = std::result::Result<T, RirError>;
