//! Role classification.
//!
//! The set of internal staff roles is closed and lives here, in one place.
//! Everything not in the set signs up as a community member. Call sites
//! dispatch on [`RoleClass`], never on raw role strings.

use serde::{Deserialize, Serialize};

/// Internal staff roles. These receive random team identifiers instead of
/// deterministic community identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternalRole {
    /// Platform founder.
    Founder,
    /// Community steward.
    Steward,
    /// Content and events moderator.
    Moderator,
    /// Operations staff.
    Operations,
}

impl InternalRole {
    /// Match a raw role name against the closed staff set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "founder" => Some(Self::Founder),
            "steward" => Some(Self::Steward),
            "moderator" => Some(Self::Moderator),
            "operations" | "ops" => Some(Self::Operations),
            _ => None,
        }
    }

    /// Canonical team name used to derive the identifier code letters.
    pub fn team_name(&self) -> &'static str {
        match self {
            Self::Founder => "Founder",
            Self::Steward => "Steward",
            Self::Moderator => "Moderator",
            Self::Operations => "Operations",
        }
    }
}

/// Classification of a signup role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoleClass {
    /// Internal staff role from the closed set.
    Internal(InternalRole),
    /// Any other role: a community member.
    Community,
}

/// Classify a raw role name.
pub fn classify_role(name: &str) -> RoleClass {
    match InternalRole::from_name(name) {
        Some(role) => RoleClass::Internal(role),
        None => RoleClass::Community,
    }
}
