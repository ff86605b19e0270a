//! Compact tokens from hash codes.
//!
//! A signed 64-bit value is written in mixed radix: the first symbol in
//! base 52 (letters only), the rest in base 62 (letters and digits), least
//! significant digit first. The token always starts with a letter and is
//! as short as the magnitude allows; there is no padding.

use crate::alphabet::charsets::{ID_VALID_NONSTART_CHARS, ID_VALID_START_CHARS};

const START_RADIX: u64 = ID_VALID_START_CHARS.len() as u64;
const NONSTART_RADIX: u64 = ID_VALID_NONSTART_CHARS.len() as u64;

/// Encodes `value` as a short identifier-safe token.
///
/// The sign is dropped: `encode(v) == encode(-v)`. [`i64::MIN`] has no
/// positive counterpart and encodes its magnitude `2⁶³`, which no other
/// input produces. Distinct magnitudes always give distinct tokens.
pub fn encode(value: i64) -> String {
    let start = ID_VALID_START_CHARS.as_bytes();
    let nonstart = ID_VALID_NONSTART_CHARS.as_bytes();

    let mut d = value.unsigned_abs();
    let mut token = String::new();

    token.push(char::from(start[(d % START_RADIX) as usize]));
    d /= START_RADIX;

    while d != 0 {
        token.push(char::from(nonstart[(d % NONSTART_RADIX) as usize]));
        d /= NONSTART_RADIX;
    }

    token
}
