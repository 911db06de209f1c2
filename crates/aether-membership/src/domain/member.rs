//! Member records and signup requests.

use aether_id::{MemberId, SequencePosition};
use serde::{Deserialize, Serialize};

use crate::error::MembershipError;

/// A persisted member row.
///
/// `sequence_position` is optional: staff records never carry one (team
/// identifiers are not re-derivable), and legacy or damaged community rows
/// may have lost theirs. A community record without a position can still be
/// displayed but can no longer be verified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Member's full name as entered at signup.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Raw role name as entered at signup.
    pub role_name: String,
    /// Issued identifier, immutable after signup.
    pub member_id: MemberId,
    /// Signup ordinal the identifier was derived from, when applicable.
    pub sequence_position: Option<SequencePosition>,
}

/// Input to the signup flow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Member's full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Requested role name.
    pub role_name: String,
}

impl SignupRequest {
    /// Validate the request before any identifier is derived.
    pub fn validate(&self) -> Result<(), MembershipError> {
        if self.full_name.trim().is_empty() {
            return Err(MembershipError::InvalidSignup(
                "full name must not be empty".to_string(),
            ));
        }
        if self.role_name.trim().is_empty() {
            return Err(MembershipError::InvalidSignup(
                "role name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
