//! Error types for the sequence engine.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The starting value is below 1. No partial sequence is produced.
    #[error("starting value must be a positive integer, got {0}")]
    InvalidStart(u64),

    /// Applying 3n + 1 to `value` would exceed `u64::MAX`.
    #[error("value {value} overflows u64 under the odd rule (3n + 1)")]
    Overflow { value: u64 },
}
