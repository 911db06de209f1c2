//! Error types for the membership identity subsystem.

use thiserror::Error;

use crate::config::FOUNDER_KEY_ENV;

/// Errors that can occur in membership flows.
#[derive(Debug, Error)]
pub enum MembershipError {
    /// The founder key was never configured. Fatal: no identifier can be
    /// issued or verified without it, and defaulting to a placeholder key
    /// would mint identifiers nobody can ever re-derive.
    #[error("Founder key is not configured (set {FOUNDER_KEY_ENV})")]
    MissingFounderKey,

    /// The configured founder key is not a positive integer.
    #[error("Founder key is not a positive integer: {value:?}")]
    InvalidFounderKey {
        /// The rejected raw configuration value.
        value: String,
    },

    /// The signup request failed validation.
    #[error("Invalid signup request: {0}")]
    InvalidSignup(String),

    /// The member directory backend failed.
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),
}

/// Errors from the member directory backend.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Could not reach the backend.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The backend did not answer in time.
    #[error("Timeout")]
    Timeout,

    /// The backend rejected or failed the query.
    #[error("Query error: {0}")]
    Query(String),
}
