//! # Aether ID - Member Identifier Primitives
//!
//! Derivation and verification of Aether membership identifiers.
//!
//! ## Components
//!
//! | Module | Output | Use Case |
//! |--------|--------|----------|
//! | `community` | `AETH-<code>-<checksum>` | Public member identifiers |
//! | `team` | `ATM-<code>-<suffix>` | Internal staff identifiers |
//! | `verify` | `VerificationOutcome` | Authenticity by re-derivation |
//!
//! ## Properties
//!
//! - **Community identifiers** are pure functions of the member's sequence
//!   position and the founder key: re-derivable at any time, so they never
//!   need to be stored as secrets.
//! - **Team identifiers** carry a random suffix and are NOT re-derivable.
//!   There is no verifier for them, by design.
//! - The SHA-1 checksum suffix detects transcription errors and casual
//!   tampering. It is not a cryptographic signature; changing the digest
//!   would orphan every identifier already issued.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod base36;
pub mod community;
pub mod errors;
pub mod team;
pub mod types;
pub mod verify;

// Re-exports
pub use community::{community_id, CODE_MODULUS};
pub use errors::IdError;
pub use team::team_id;
pub use types::{FounderKey, IdentifierRole, MemberId, SequencePosition};
pub use verify::{verify_community_id, VerificationOutcome};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Derive an identifier for a new member, dispatching on role class.
///
/// Community roles receive a deterministic `AETH-` identifier derived from
/// `(position, key)`; internal roles receive a random-suffixed `ATM-`
/// identifier derived from the team name. The caller decides the class once,
/// through its role classification, and this is the only branch point.
pub fn issue(position: SequencePosition, key: FounderKey, role: IdentifierRole<'_>) -> MemberId {
    match role {
        IdentifierRole::Community => community_id(position, key),
        IdentifierRole::Internal { team } => team_id(team),
    }
}
