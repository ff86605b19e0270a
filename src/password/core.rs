//! Random password generation.
//!
//! A password is built from an ordered list of character *pools*
//! (upper-case letters, digits, symbols, ...):
//!
//! 1. one character is drawn from each pool, so every pool is represented
//! 2. the remaining positions are drawn from the union of all pools
//! 3. the whole buffer is shuffled, so the pool-anchored characters do not
//!    sit at predictable positions
//!
//! Every draw and the shuffle use a cryptographically secure generator.
//!
//! The union in step 2 collapses symbols shared by several pools, so each
//! distinct symbol has the same probability there. No weighting by
//! originating pool is applied.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};

use crate::alphabet::Alphabet;
use crate::alphabet::charsets::{DIGITS, LOWER_CASE, PASSWORD, SYMBOLS, UPPER_CASE};
use crate::error::{IdentifierError, Result};
use crate::rng::secure_source;

/// Generates a password of `length` characters using the secure source.
///
/// # Errors
///
/// - [`IdentifierError::PasswordTooShort`] if `length < pools.len()`
/// - [`IdentifierError::EmptyAlphabet`] if `pools` is empty and
///   `length > 0`
pub fn generate(length: usize, pools: &[&Alphabet]) -> Result<String> {
    check_length(length, pools)?;
    if length == 0 {
        return Ok(String::new());
    }

    secure_source().with_rng(|rng| generate_with(rng, length, pools))
}

/// Like [`generate`], drawing from `rng`.
///
/// # Errors
///
/// Same as [`generate`].
pub fn generate_with<R: Rng + CryptoRng + ?Sized>(
    rng: &mut R,
    length: usize,
    pools: &[&Alphabet],
) -> Result<String> {
    check_length(length, pools)?;
    if length == 0 {
        return Ok(String::new());
    }

    let remaining = Alphabet::union(pools)?;

    let mut password: Vec<char> = Vec::with_capacity(length);
    password.extend(pools.iter().map(|pool| pick(rng, pool)));
    while password.len() < length {
        password.push(pick(rng, &remaining));
    }

    password.shuffle(rng);

    Ok(password.into_iter().collect())
}

/// Password with at least one upper-case letter, lower-case letter, digit
/// and symbol.
///
/// The full password character set is a fifth pool, so the shortest
/// accepted length is 5.
///
/// # Errors
///
/// Returns [`IdentifierError::PasswordTooShort`] if `length < 5`.
pub fn make_random_password(length: usize) -> Result<String> {
    generate(
        length,
        &[&*UPPER_CASE, &*LOWER_CASE, &*DIGITS, &*SYMBOLS, &*PASSWORD],
    )
}

fn check_length(length: usize, pools: &[&Alphabet]) -> Result<()> {
    if length < pools.len() {
        return Err(IdentifierError::PasswordTooShort {
            length,
            pools: pools.len(),
        });
    }
    Ok(())
}

#[inline]
fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &Alphabet) -> char {
    alphabet.symbol(rng.random_range(0..alphabet.len()))
}
