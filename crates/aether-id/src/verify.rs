//! Authenticity checking by re-derivation.
//!
//! A claimed community identifier is authentic when re-deriving the
//! identifier from the member's recorded sequence position reproduces the
//! claim exactly. Nothing secret is stored per member; the founder key and
//! the position are enough to re-create the expected string.

use serde::{Deserialize, Serialize};

use crate::community::community_id;
use crate::types::{FounderKey, SequencePosition};

/// Outcome of an identity confirmation attempt.
///
/// All four are expected, recoverable results. User-facing surfaces should
/// collapse the failures into one generic message so callers cannot probe
/// which identifiers exist; logs keep them distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationOutcome {
    /// Re-derivation reproduced the claim.
    Verified,
    /// No record matches the claimed name and identifier pair.
    NotFound,
    /// A record exists but carries no sequence position, so re-derivation
    /// is impossible. A data problem, not evidence of forgery.
    CannotVerify,
    /// Re-derivation produced a different identifier: the claim is forged
    /// or corrupted.
    Forged,
}

impl VerificationOutcome {
    /// Whether the claim was confirmed authentic.
    pub fn is_verified(self) -> bool {
        matches!(self, VerificationOutcome::Verified)
    }
}

/// Check a claimed community identifier against the recorded sequence
/// position for the claimant.
///
/// The comparison is ASCII-case-insensitive on the claim; issued
/// identifiers are uppercase. A missing recorded position yields
/// [`VerificationOutcome::CannotVerify`], never
/// [`VerificationOutcome::Forged`]. The `NotFound` outcome belongs to the
/// record lookup a caller performs before invoking this predicate.
pub fn verify_community_id(
    claimed: &str,
    recorded: Option<SequencePosition>,
    key: FounderKey,
) -> VerificationOutcome {
    let Some(position) = recorded else {
        return VerificationOutcome::CannotVerify;
    };

    let expected = community_id(position, key);
    if claimed.to_ascii_uppercase() == expected.as_str() {
        VerificationOutcome::Verified
    } else {
        VerificationOutcome::Forged
    }
}
