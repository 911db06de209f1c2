//! Identity configuration.
//!
//! The founder key is loaded once at process start and injected into the
//! service; it is never read from a hidden global. Rotating the key leaves
//! previously issued identifiers valid as strings but no longer
//! re-derivable, so treat it as fixed for the lifetime of a deployment.

use std::env;

use aether_id::FounderKey;

use crate::error::MembershipError;

/// Environment variable holding the founder key.
pub const FOUNDER_KEY_ENV: &str = "AETHER_FOUNDER_KEY";

/// Configuration for identifier issuance and verification.
#[derive(Clone, Copy, Debug)]
pub struct IdentityConfig {
    founder_key: FounderKey,
}

impl IdentityConfig {
    /// Create a configuration from an already-validated key.
    pub fn new(founder_key: FounderKey) -> Self {
        Self { founder_key }
    }

    /// Load the configuration from the process environment.
    ///
    /// A missing key and a malformed key are distinct fatal errors. Zero is
    /// rejected along with non-numeric input: an all-defaults deployment
    /// must fail loudly here instead of issuing identifiers under a
    /// placeholder key.
    pub fn from_env() -> Result<Self, MembershipError> {
        let raw = env::var(FOUNDER_KEY_ENV).map_err(|_| MembershipError::MissingFounderKey)?;
        Self::parse(&raw)
    }

    /// Parse a raw configuration value into a validated configuration.
    pub fn parse(raw: &str) -> Result<Self, MembershipError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MembershipError::MissingFounderKey);
        }

        match trimmed.parse::<u64>() {
            Ok(key) if key > 0 => Ok(Self::new(FounderKey::new(key))),
            _ => Err(MembershipError::InvalidFounderKey {
                value: raw.to_string(),
            }),
        }
    }

    /// The configured founder key.
    pub fn founder_key(&self) -> FounderKey {
        self.founder_key
    }
}
