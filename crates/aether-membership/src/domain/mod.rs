//! Domain layer: member records and role classification.

pub mod member;
pub mod roles;

pub use member::{MemberRecord, SignupRequest};
pub use roles::{classify_role, InternalRole, RoleClass};
