//! # Directory Contract Tests
//!
//! The identifier generator trusts the directory to hand out each sequence
//! position exactly once. These tests drive the reference in-memory
//! directory through the service under concurrency and check that the
//! contract actually holds end to end: distinct positions, distinct
//! identifiers.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use aether_id::FounderKey;
    use aether_membership::{
        IdentityConfig, InMemoryDirectory, MemberDirectory, MembershipApi, MembershipService,
        SignupRequest,
    };

    fn signup(i: usize) -> SignupRequest {
        SignupRequest {
            full_name: format!("Member {i}"),
            email: format!("member{i}@example.org"),
            role_name: "Member".to_string(),
        }
    }

    #[tokio::test]
    async fn test_concurrent_signups_mint_distinct_identifiers() {
        let service = Arc::new(MembershipService::new(
            Arc::new(InMemoryDirectory::new()),
            IdentityConfig::new(FounderKey::new(731)),
        ));

        let mut handles = Vec::new();
        for i in 0..64 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.sign_up(signup(i)).await.unwrap()
            }));
        }

        let mut positions = HashSet::new();
        let mut identifiers = HashSet::new();
        for handle in handles {
            let record = handle.await.unwrap();
            let position = record.sequence_position.expect("community record").get();
            assert!(positions.insert(position), "duplicate position {position}");
            assert!(
                identifiers.insert(record.member_id.as_str().to_string()),
                "duplicate identifier {}",
                record.member_id
            );
        }

        // Exactly the first 64 ordinals, no gaps.
        assert_eq!(positions.len(), 64);
        assert_eq!(*positions.iter().min().unwrap(), 1);
        assert_eq!(*positions.iter().max().unwrap(), 64);
    }

    #[tokio::test]
    async fn test_directory_rows_survive_lookup_after_bulk_signup() {
        let directory = Arc::new(InMemoryDirectory::new());
        let service = MembershipService::new(
            directory.clone(),
            IdentityConfig::new(FounderKey::new(731)),
        );

        let mut records = Vec::new();
        for i in 0..10 {
            records.push(service.sign_up(signup(i)).await.unwrap());
        }
        assert_eq!(directory.len().await, 10);

        for record in records {
            let found = directory
                .find_by_name_and_id(&record.full_name, record.member_id.as_str())
                .await
                .unwrap();
            assert_eq!(found.as_ref(), Some(&record));
        }
    }
}
