//! # Identity Flow Integration Tests
//!
//! End-to-end choreography across `aether-membership` and `aether-id`:
//! signup issues an identifier from the directory's counter, confirmation
//! re-derives it from the stored position.
//!
//! ## Flows Tested
//!
//! 1. **Signup → Confirm**: issued identifiers verify for their own record
//! 2. **Enumeration resistance**: mismatched name/identifier pairs reveal
//!    nothing
//! 3. **Staff asymmetry**: team identifiers are issued but never verified
//! 4. **Key rotation**: a new founder key orphans previously issued
//!    identifiers

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use aether_id::{FounderKey, VerificationOutcome};
    use aether_membership::{
        IdentityConfig, InMemoryDirectory, MembershipApi, MembershipService, SignupRequest,
    };

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    const TEST_KEY: u64 = 731;

    fn test_service() -> MembershipService<InMemoryDirectory> {
        service_with_key(TEST_KEY)
    }

    fn service_with_key(key: u64) -> MembershipService<InMemoryDirectory> {
        MembershipService::new(
            Arc::new(InMemoryDirectory::new()),
            IdentityConfig::new(FounderKey::new(key)),
        )
    }

    fn signup(name: &str, role: &str) -> SignupRequest {
        SignupRequest {
            full_name: name.to_string(),
            email: format!(
                "{}@example.org",
                name.to_ascii_lowercase().replace(' ', ".")
            ),
            role_name: role.to_string(),
        }
    }

    // =========================================================================
    // SIGNUP → CONFIRMATION CHOREOGRAPHY
    // =========================================================================

    #[tokio::test]
    async fn test_every_community_signup_round_trips() {
        let service = test_service();

        let names = ["Ada Lovelace", "Mary Shelley", "Emmy Noether", "Sofia Kovalevskaya"];
        let mut records = Vec::new();
        for name in names {
            records.push(service.sign_up(signup(name, "Member")).await.unwrap());
        }

        // Positions are sequential, identifiers distinct.
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.sequence_position.map(|p| p.get()), Some(i as u64 + 1));
        }
        for a in &records {
            for b in &records {
                if a.full_name != b.full_name {
                    assert_ne!(a.member_id, b.member_id);
                }
            }
        }

        // Each member's claim verifies against their own record.
        for record in &records {
            let outcome = service
                .confirm_identity(&record.full_name, record.member_id.as_str())
                .await
                .unwrap();
            assert_eq!(outcome, VerificationOutcome::Verified, "{}", record.full_name);
        }
    }

    #[tokio::test]
    async fn test_mixed_roles_share_one_position_counter() {
        let service = test_service();

        service.sign_up(signup("Ada Lovelace", "Member")).await.unwrap();
        // Staff row consumes a position even though it does not store one.
        let staff = service.sign_up(signup("Grace Hopper", "Moderator")).await.unwrap();
        let third = service.sign_up(signup("Mary Shelley", "Member")).await.unwrap();

        assert_eq!(staff.sequence_position, None);
        assert_eq!(third.sequence_position.map(|p| p.get()), Some(3));

        let outcome = service
            .confirm_identity("Mary Shelley", third.member_id.as_str())
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::Verified);
    }

    // =========================================================================
    // ENUMERATION RESISTANCE
    // =========================================================================

    #[tokio::test]
    async fn test_cross_member_claims_are_not_found() {
        let service = test_service();
        let ada = service.sign_up(signup("Ada Lovelace", "Member")).await.unwrap();
        let mary = service.sign_up(signup("Mary Shelley", "Member")).await.unwrap();

        // Each holds a real identifier, but for the other record.
        let outcome = service
            .confirm_identity("Ada Lovelace", mary.member_id.as_str())
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::NotFound);

        let outcome = service
            .confirm_identity("Mary Shelley", ada.member_id.as_str())
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::NotFound);
    }

    #[tokio::test]
    async fn test_unknown_claims_are_not_found() {
        let service = test_service();
        service.sign_up(signup("Ada Lovelace", "Member")).await.unwrap();

        let outcome = service
            .confirm_identity("Nobody Real", "AETH-EWLG-78")
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::NotFound);
    }

    // =========================================================================
    // STAFF IDENTIFIER ASYMMETRY
    // =========================================================================

    #[tokio::test]
    async fn test_staff_identifiers_issue_but_never_verify() {
        let service = test_service();

        let staff = service.sign_up(signup("Grace Hopper", "Founder")).await.unwrap();
        assert!(staff.member_id.as_str().starts_with("ATM-FND-"));

        let outcome = service
            .confirm_identity("Grace Hopper", staff.member_id.as_str())
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::CannotVerify);
    }

    // =========================================================================
    // KEY ROTATION
    // =========================================================================

    #[tokio::test]
    async fn test_rotated_key_orphans_issued_identifiers() {
        let directory = Arc::new(InMemoryDirectory::new());
        let service = MembershipService::new(
            directory.clone(),
            IdentityConfig::new(FounderKey::new(TEST_KEY)),
        );
        let record = service.sign_up(signup("Ada Lovelace", "Member")).await.unwrap();

        // Same directory, new key: the stored string still matches the pair
        // lookup, but re-derivation now disagrees with it.
        let rotated = MembershipService::new(
            directory,
            IdentityConfig::new(FounderKey::new(TEST_KEY + 1)),
        );
        let outcome = rotated
            .confirm_identity("Ada Lovelace", record.member_id.as_str())
            .await
            .unwrap();
        assert_eq!(outcome, VerificationOutcome::Forged);
    }
}
