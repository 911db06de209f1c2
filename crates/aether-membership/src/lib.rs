//! # Membership Identity Subsystem
//!
//! Issues member identifiers at signup and confirms claimed identifiers by
//! re-derivation. Built on the `aether-id` primitives.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Member records and role classification
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Service Layer** (`service.rs`): Wires identifier derivation to the
//!   member directory
//! - **Adapters** (`adapters/`): In-memory directory for tests
//!
//! ## Contract Notes
//!
//! - The founder key comes from deployment configuration; signup and
//!   confirmation flows refuse to run without it.
//! - Sequence positions must be issued atomically by the directory backend.
//!   Two racing signups observing the same position would mint duplicate
//!   identifiers, and nothing downstream can repair that.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::memory::InMemoryDirectory;
pub use config::{IdentityConfig, FOUNDER_KEY_ENV};
pub use domain::member::{MemberRecord, SignupRequest};
pub use domain::roles::{classify_role, InternalRole, RoleClass};
pub use error::{DirectoryError, MembershipError};
pub use ports::inbound::MembershipApi;
pub use ports::outbound::MemberDirectory;
pub use service::MembershipService;
