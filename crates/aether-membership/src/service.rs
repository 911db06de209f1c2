//! Membership Identity Service
//!
//! Orchestrates identifier derivation against the member directory.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use uuid::Uuid;

use aether_id::{issue, verify_community_id, IdentifierRole, VerificationOutcome};

use crate::config::IdentityConfig;
use crate::domain::member::{MemberRecord, SignupRequest};
use crate::domain::roles::{classify_role, RoleClass};
use crate::error::MembershipError;
use crate::ports::inbound::MembershipApi;
use crate::ports::outbound::MemberDirectory;

/// Membership identity service implementation
///
/// Implements the [`MembershipApi`] port using an injected directory.
pub struct MembershipService<D: MemberDirectory> {
    /// Member directory backend (driven port)
    directory: Arc<D>,
    /// Validated identity configuration
    config: IdentityConfig,
}

impl<D: MemberDirectory> MembershipService<D> {
    /// Create a new service over the given directory.
    pub fn new(directory: Arc<D>, config: IdentityConfig) -> Self {
        Self { directory, config }
    }
}

#[async_trait]
impl<D: MemberDirectory + 'static> MembershipApi for MembershipService<D> {
    async fn sign_up(&self, request: SignupRequest) -> Result<MemberRecord, MembershipError> {
        request.validate()?;

        let position = self.directory.next_sequence_position().await?;
        let key = self.config.founder_key();

        // Staff records never store a position: their identifiers carry a
        // random suffix and cannot be re-derived from one.
        let (member_id, stored_position) = match classify_role(&request.role_name) {
            RoleClass::Community => (
                issue(position, key, IdentifierRole::Community),
                Some(position),
            ),
            RoleClass::Internal(role) => (
                issue(
                    position,
                    key,
                    IdentifierRole::Internal {
                        team: role.team_name(),
                    },
                ),
                None,
            ),
        };

        let record = MemberRecord {
            full_name: request.full_name,
            email: request.email,
            role_name: request.role_name,
            member_id,
            sequence_position: stored_position,
        };
        self.directory.insert(record.clone()).await?;

        info!(
            member_id = %record.member_id,
            position = %position,
            role = %record.role_name,
            "issued member identifier"
        );
        Ok(record)
    }

    async fn confirm_identity(
        &self,
        full_name: &str,
        claimed_id: &str,
    ) -> Result<VerificationOutcome, MembershipError> {
        let correlation_id = Uuid::new_v4();

        let record = match self
            .directory
            .find_by_name_and_id(full_name, claimed_id)
            .await?
        {
            Some(record) => record,
            None => {
                debug!(%correlation_id, "no record matches the name and identifier pair");
                return Ok(VerificationOutcome::NotFound);
            }
        };

        // Team identifiers carry a random suffix; there is nothing to
        // re-derive them from.
        if record.member_id.is_team() {
            warn!(
                %correlation_id,
                member_id = %record.member_id,
                "confirmation attempted against a team identifier"
            );
            return Ok(VerificationOutcome::CannotVerify);
        }

        let outcome =
            verify_community_id(claimed_id, record.sequence_position, self.config.founder_key());
        match outcome {
            VerificationOutcome::Verified => {
                info!(%correlation_id, member_id = %record.member_id, "identity confirmed");
            }
            VerificationOutcome::CannotVerify => {
                warn!(
                    %correlation_id,
                    member_id = %record.member_id,
                    "record has no sequence position; cannot re-derive"
                );
            }
            VerificationOutcome::Forged => {
                warn!(
                    %correlation_id,
                    member_id = %record.member_id,
                    "re-derived identifier does not match the claim"
                );
            }
            VerificationOutcome::NotFound => {}
        }
        Ok(outcome)
    }
}
