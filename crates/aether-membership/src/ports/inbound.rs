//! Inbound Ports (Driving Ports)
//!
//! These traits define the API that signup and identity-confirmation
//! surfaces use to interact with the membership identity subsystem.

use async_trait::async_trait;

use aether_id::VerificationOutcome;

use crate::domain::member::{MemberRecord, SignupRequest};
use crate::error::MembershipError;

/// Primary membership identity API (Driving Port)
#[async_trait]
pub trait MembershipApi: Send + Sync {
    /// Register a new member: validate the request, derive an identifier
    /// for the next sequence position, and persist the record.
    ///
    /// Returns the persisted record including the issued identifier.
    async fn sign_up(&self, request: SignupRequest) -> Result<MemberRecord, MembershipError>;

    /// Confirm a claimed identifier for a claimed full name.
    ///
    /// The lookup requires BOTH fields to match before any re-derivation
    /// happens, so a correct identifier under the wrong name reveals
    /// nothing. All failure outcomes are expected results, not errors;
    /// `Err` is reserved for backend faults.
    async fn confirm_identity(
        &self,
        full_name: &str,
        claimed_id: &str,
    ) -> Result<VerificationOutcome, MembershipError>;
}
