//! Outbound Ports (Driven Ports)
//!
//! The member directory is the narrow contract the surrounding application
//! implements over its storage backend.

use async_trait::async_trait;

use aether_id::SequencePosition;

use crate::domain::member::MemberRecord;
use crate::error::DirectoryError;

/// Member storage backend (Driven Port)
///
/// ## Uniqueness contract
///
/// `next_sequence_position` MUST behave as an atomic monotonic counter:
/// once a position has been handed out it is never handed out again, even
/// under concurrent signups. Identifier derivation performs no uniqueness
/// enforcement of its own, so a backend that lets two signups read the same
/// record count will mint duplicate identifiers. Implementations over
/// non-transactional backends must serialize the whole
/// read-count/insert-record sequence themselves.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Reserve the sequence position for the next member.
    async fn next_sequence_position(&self) -> Result<SequencePosition, DirectoryError>;

    /// Persist a new member record.
    async fn insert(&self, record: MemberRecord) -> Result<(), DirectoryError>;

    /// Find the record matching BOTH the full name and the claimed
    /// identifier, or `None` when either half mismatches.
    ///
    /// The identifier comparison is ASCII-case-insensitive; the name
    /// comparison is trimmed and ASCII-case-insensitive. Requiring the pair
    /// keeps the lookup enumeration-resistant: a caller probing random
    /// identifiers learns nothing about which ones exist.
    async fn find_by_name_and_id(
        &self,
        full_name: &str,
        claimed_id: &str,
    ) -> Result<Option<MemberRecord>, DirectoryError>;
}
