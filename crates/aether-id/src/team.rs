//! Team identifier derivation.
//!
//! Internal staff identifiers carry a short code drawn from the team name
//! plus four hex characters of OS entropy. Unlike community identifiers
//! they are NOT a function of their inputs, so there is no verifier for
//! this shape and none should be added.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::types::MemberId;

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Team code letters: the first three characters of the uppercased name
/// with vowels removed, falling back to the first three characters of the
/// uppercased name itself when fewer than three consonants remain. Names
/// shorter than three characters yield shorter codes.
fn team_code(name: &str) -> String {
    let upper = name.to_uppercase();
    let skeleton: String = upper.chars().filter(|c| !VOWELS.contains(c)).collect();

    if skeleton.chars().count() >= 3 {
        skeleton.chars().take(3).collect()
    } else {
        upper.chars().take(3).collect()
    }
}

/// Derive a fresh team identifier for an internal role or team name.
///
/// Draws two bytes from the OS entropy source per call, so repeated calls
/// with the same name differ in the suffix.
pub fn team_id(team_or_role_name: &str) -> MemberId {
    let mut suffix = [0u8; 2];
    OsRng.fill_bytes(&mut suffix);

    MemberId::from_string(format!(
        "ATM-{}-{}",
        team_code(team_or_role_name),
        hex::encode_upper(suffix)
    ))
}
