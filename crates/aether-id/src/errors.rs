//! Identifier error types.

use thiserror::Error;

/// Errors raised by identifier derivation inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    /// Sequence positions are 1-based ordinals; zero means the caller never
    /// assigned one.
    #[error("Invalid sequence position: expected >= 1, got {0}")]
    InvalidSequencePosition(u64),
}
