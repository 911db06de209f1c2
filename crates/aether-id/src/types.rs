//! Core identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::IdError;

/// 1-based ordinal of a member among all members created so far.
///
/// Supplied by the membership store as `existing record count + 1`. The
/// store must issue positions from an atomic monotonic counter; nothing in
/// this crate deduplicates positions handed to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct SequencePosition(u64);

impl SequencePosition {
    /// Create a position, rejecting the invalid zero ordinal.
    pub fn new(position: u64) -> Result<Self, IdError> {
        if position == 0 {
            return Err(IdError::InvalidSequencePosition(position));
        }
        Ok(Self(position))
    }

    /// Position of the next member given the current record count.
    pub fn from_record_count(count: u64) -> Self {
        Self(count.saturating_add(1))
    }

    /// Raw ordinal value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for SequencePosition {
    type Error = IdError;

    fn try_from(position: u64) -> Result<Self, Self::Error> {
        Self::new(position)
    }
}

impl From<SequencePosition> for u64 {
    fn from(position: SequencePosition) -> Self {
        position.0
    }
}

impl fmt::Display for SequencePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Process-wide integer secret mixed into community-identifier derivation.
///
/// Loaded once from deployment configuration and fixed for the lifetime of
/// the deployment: rotating it leaves every previously issued identifier
/// intact as a string but no longer re-derivable.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FounderKey(u64);

impl FounderKey {
    /// Wrap a configured key value.
    pub fn new(key: u64) -> Self {
        Self(key)
    }

    /// Raw key value.
    pub fn get(self) -> u64 {
        self.0
    }
}

// The key is a secret; keep it out of logs and panic messages.
impl fmt::Debug for FounderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FounderKey(<redacted>)")
    }
}

/// An issued member identifier.
///
/// Either the community shape (`AETH-<code>-<checksum>`) or the team shape
/// (`ATM-<code>-<suffix>`). Immutable once issued.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub(crate) fn from_string(id: String) -> Self {
        Self(id)
    }

    /// Identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a re-derivable community identifier.
    pub fn is_community(&self) -> bool {
        self.0.starts_with("AETH-")
    }

    /// Whether this is a random-suffixed team identifier.
    pub fn is_team(&self) -> bool {
        self.0.starts_with("ATM-")
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Role class driving identifier dispatch.
///
/// The mapping from concrete role names to a class is owned by the
/// membership layer; by the time derivation runs the decision is already a
/// tagged value rather than a string comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentifierRole<'a> {
    /// Public member: deterministic community identifier.
    Community,
    /// Internal staff: random team identifier derived from the team name.
    Internal {
        /// Team or role name the code letters are drawn from.
        team: &'a str,
    },
}
