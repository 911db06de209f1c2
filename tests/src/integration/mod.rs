//! Cross-crate integration flows.

pub mod directory_contract;
pub mod identity_flows;
