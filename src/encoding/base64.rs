//! Fixed-width encoding of 64-bit values.
//!
//! Each symbol carries 6 bits, taken least significant first, through the
//! 64-symbol [`BASE64_VALID_CHARS`] alphabet. Ten symbols cover 60 bits;
//! an eleventh covers the top 4 bits plus 2 bits that are always zero,
//! which is the ceiling for a single value.
//!
//! This is not RFC 4648 base64: there is no padding, no byte grouping and
//! a different symbol order.

use rand::Rng;

use crate::alphabet::charsets::BASE64_VALID_CHARS;
use crate::error::{IdentifierError, Result};
use crate::rng::fast_rng;

/// Maximum number of symbols that can be taken from a 64-bit value.
pub const MAX_CHUNK_SYMBOLS: usize = 11;

/// Symbols taken from each random draw by [`encode_random`].
pub const RANDOM_CHUNK_SYMBOLS: usize = 10;

/// Appends the low `6 * length` bits of `value` to `out`.
///
/// # Errors
///
/// Returns [`IdentifierError::ChunkTooLong`] if `length > 11`; `out` is
/// left untouched.
pub fn append_chunk(value: u64, length: usize, out: &mut String) -> Result<()> {
    if length > MAX_CHUNK_SYMBOLS {
        return Err(IdentifierError::ChunkTooLong { length });
    }

    out.reserve(length);
    push_symbols(value, length, out);
    Ok(())
}

/// Encodes the low `6 * length` bits of `value` as `length` symbols.
///
/// # Errors
///
/// Returns [`IdentifierError::ChunkTooLong`] if `length > 11`.
pub fn encode_chunk(value: u64, length: usize) -> Result<String> {
    let mut out = String::with_capacity(length);
    append_chunk(value, length, &mut out)?;
    Ok(out)
}

/// Encodes the low 60 bits of `value` as ten symbols.
pub fn encode_value(value: u64) -> String {
    let mut out = String::with_capacity(RANDOM_CHUNK_SYMBOLS);
    push_symbols(value, RANDOM_CHUNK_SYMBOLS, &mut out);
    out
}

/// Random token of `length` symbols from the fast source.
pub fn encode_random(length: usize) -> String {
    encode_random_with(&mut fast_rng(), length)
}

/// Like [`encode_random`], drawing from `rng`.
///
/// Every run of ten symbols comes from one fresh `u64`.
pub fn encode_random_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let mut out = String::with_capacity(length);
    let mut remaining = length;

    while remaining > 0 {
        let take = remaining.min(RANDOM_CHUNK_SYMBOLS);
        push_symbols(rng.random(), take, &mut out);
        remaining -= take;
    }

    out
}

fn push_symbols(value: u64, length: usize, out: &mut String) {
    debug_assert!(length <= MAX_CHUNK_SYMBOLS);
    let symbols = BASE64_VALID_CHARS.as_bytes();
    let mut idx = value;
    for _ in 0..length {
        out.push(char::from(symbols[(idx & 63) as usize]));
        idx >>= 6;
    }
}
