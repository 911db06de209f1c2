//! Community identifier derivation.
//!
//! A community identifier is a pure function of the member's sequence
//! position N and the founder key K:
//!
//! ```text
//! AETH-<base36((N * K^3 + K * 97) mod 999983)>-<first 2 hex of SHA1(N ++ K)>
//! ```
//!
//! Both halves must be reproducible bit-for-bit forever: the verifier
//! re-derives the whole string from the stored position and compares.

use sha1::{Digest, Sha1};

use crate::base36;
use crate::types::{FounderKey, MemberId, SequencePosition};

/// Fixed prime modulus for the code value. Not configurable; every issued
/// identifier depends on it.
pub const CODE_MODULUS: u64 = 999_983;

/// Multiply under the code modulus without overflow.
fn mod_mul(a: u64, b: u64) -> u64 {
    ((a as u128 * b as u128) % CODE_MODULUS as u128) as u64
}

/// The code value `(N * K^3 + K * 97) mod 999983`.
///
/// Reduced multiplication keeps every intermediate inside 128 bits, so the
/// result is exact for the full `u64` domain of both inputs.
fn code_value(position: SequencePosition, key: FounderKey) -> u64 {
    let n = position.get() % CODE_MODULUS;
    let k = key.get() % CODE_MODULUS;

    let k_cubed = mod_mul(mod_mul(k, k), k);
    (mod_mul(n, k_cubed) + mod_mul(k, 97)) % CODE_MODULUS
}

/// Two-hex-character transcription checksum over the decimal rendering of
/// `(N, K)`, concatenated without a separator.
fn checksum(position: SequencePosition, key: FounderKey) -> String {
    let input = format!("{}{}", position.get(), key.get());
    let digest = Sha1::digest(input.as_bytes());
    hex::encode(digest)[..2].to_ascii_uppercase()
}

/// Derive the community identifier for a sequence position under the
/// founder key.
///
/// Deterministic and side-effect free: identical inputs always produce an
/// identical identifier, which is what makes stored identifiers verifiable
/// by re-derivation alone.
pub fn community_id(position: SequencePosition, key: FounderKey) -> MemberId {
    let code = base36::encode(code_value(position, key));
    let check = checksum(position, key);
    MemberId::from_string(format!("AETH-{code}-{check}"))
}
