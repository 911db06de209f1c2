//! In-memory member directory.
//!
//! Backs the test suites and doubles as the reference implementation of the
//! directory contract: the position counter and the row store live under
//! one lock, so positions are issued atomically and never repeat.

use async_trait::async_trait;
use tokio::sync::RwLock;

use aether_id::SequencePosition;

use crate::domain::member::MemberRecord;
use crate::error::DirectoryError;
use crate::ports::outbound::MemberDirectory;

#[derive(Default)]
struct DirectoryState {
    members: Vec<MemberRecord>,
    issued_positions: u64,
}

/// Member directory held entirely in memory.
#[derive(Default)]
pub struct InMemoryDirectory {
    state: RwLock<DirectoryState>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored member rows.
    pub async fn len(&self) -> usize {
        self.state.read().await.members.len()
    }

    /// Whether the directory has no rows.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.members.is_empty()
    }
}

fn name_matches(stored: &str, claimed: &str) -> bool {
    stored.trim().eq_ignore_ascii_case(claimed.trim())
}

#[async_trait]
impl MemberDirectory for InMemoryDirectory {
    async fn next_sequence_position(&self) -> Result<SequencePosition, DirectoryError> {
        let mut state = self.state.write().await;
        let count = state.issued_positions;
        state.issued_positions += 1;
        Ok(SequencePosition::from_record_count(count))
    }

    async fn insert(&self, record: MemberRecord) -> Result<(), DirectoryError> {
        self.state.write().await.members.push(record);
        Ok(())
    }

    async fn find_by_name_and_id(
        &self,
        full_name: &str,
        claimed_id: &str,
    ) -> Result<Option<MemberRecord>, DirectoryError> {
        let state = self.state.read().await;
        Ok(state
            .members
            .iter()
            .find(|record| {
                name_matches(&record.full_name, full_name)
                    && record.member_id.as_str().eq_ignore_ascii_case(claimed_id)
            })
            .cloned())
    }
}
