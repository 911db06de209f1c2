//! # Aether Identity Test Suite
//!
//! Unified test crate for flows that span `aether-id` and
//! `aether-membership`.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Signup and confirmation choreography
//!     ├── identity_flows.rs
//!     └── directory_contract.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p aether-tests
//!
//! # By category
//! cargo test -p aether-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
