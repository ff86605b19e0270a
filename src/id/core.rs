//! Random identifier generation.
//!
//! Identifiers are fixed-length tokens whose first character comes from a
//! *start* alphabet and whose remaining characters come from a
//! *continuation* alphabet. With letters as the start alphabet the result
//! is usable as a Java, JavaScript or shell identifier.
//!
//! ## Batched draws
//!
//! Calls into the random source dominate the cost of short ids, so draws
//! are packed: with a start alphabet of `S` symbols and a continuation
//! alphabet of `N` symbols, one integer in `[0, S·N³)` resolves the first
//! four characters by repeated `mod` / `div`, and then one integer in
//! `[0, N⁴)` resolves each following group of four. That is one draw per
//! four characters instead of one per character, with every position still
//! uniform over its alphabet.
//!
//! ## Size limit
//!
//! The packed bounds are `u64` values. They stay representable while
//! `S·N³ ≤ 2⁶⁴ - 1` and `N⁴ ≤ 2⁶⁴ - 1`, which holds for any pair of
//! alphabets of at most 65 535 symbols and fails for some pairs above that.
//! [`generate_batched_with`] rejects overflowing alphabets with
//! [`IdentifierError::AlphabetTooLarge`]; [`generate`] and
//! [`generate_with`] detect the overflow up front and draw one value per
//! character instead.
//!
//! ## Collisions
//!
//! Two independent ids of length `L` collide according to the birthday
//! bound over roughly `N^L` values. With the default 62-symbol alphabet,
//! length 4 gives a ~15% chance of a duplicate within 2 000 ids; length 8
//! gives ~1% within a million and ~50% within 16 million.

use rand::Rng;

use crate::alphabet::Alphabet;
use crate::alphabet::charsets::{ID_NONSTART, ID_START, LOWER_CASE, LOWER_ID_NONSTART};
use crate::error::{IdentifierError, Result};
use crate::rng::fast_rng;

/// Characters resolved from a single draw.
const CHARS_PER_DRAW: usize = 4;

/// Packed draw bounds for a pair of alphabets.
#[derive(Clone, Copy, Debug)]
struct Bounds {
    /// `S·N³`, used for the first draw.
    head: u64,
    /// `N⁴`, used for every later draw.
    tail: u64,
}

impl Bounds {
    fn new(start: usize, continuation: usize) -> Option<Self> {
        let s = start as u64;
        let n = continuation as u64;
        let n3 = n.checked_mul(n)?.checked_mul(n)?;

        Some(Self {
            head: s.checked_mul(n3)?,
            tail: n3.checked_mul(n)?,
        })
    }
}

/// Generates identifiers from a fixed pair of alphabets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierGenerator {
    start: Alphabet,
    continuation: Alphabet,
}

impl IdentifierGenerator {
    pub fn new(start: Alphabet, continuation: Alphabet) -> Self {
        Self {
            start,
            continuation,
        }
    }

    pub fn start(&self) -> &Alphabet {
        &self.start
    }

    pub fn continuation(&self) -> &Alphabet {
        &self.continuation
    }

    /// Generates an identifier of `length` characters from the fast source.
    pub fn generate(&self, length: usize) -> String {
        generate_with(&mut fast_rng(), length, &self.start, &self.continuation)
    }

    /// Generates an identifier of `length` characters from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R, length: usize) -> String {
        generate_with(rng, length, &self.start, &self.continuation)
    }
}

impl Default for IdentifierGenerator {
    /// Letters, then letters and digits.
    fn default() -> Self {
        Self::new(ID_START.clone(), ID_NONSTART.clone())
    }
}

/// Generates an identifier of `length` characters from the fast source.
///
/// The first character is uniform over `start`, every other one uniform
/// over `continuation`. A zero length returns an empty string without
/// touching the random source.
pub fn generate(length: usize, start: &Alphabet, continuation: &Alphabet) -> String {
    generate_with(&mut fast_rng(), length, start, continuation)
}

/// Like [`generate`], drawing from `rng`.
///
/// Uses batched draws when the alphabets allow it and one draw per
/// character otherwise.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    start: &Alphabet,
    continuation: &Alphabet,
) -> String {
    if length == 0 {
        return String::new();
    }

    match Bounds::new(start.len(), continuation.len()) {
        Some(bounds) => batched(rng, length, start, continuation, bounds),
        None => {
            tracing::trace!(
                start = start.len(),
                continuation = continuation.len(),
                "alphabets exceed the batched draw bound, drawing per character"
            );
            generate_per_char_with(rng, length, start, continuation)
        }
    }
}

/// Generates an identifier using batched draws only.
///
/// # Errors
///
/// Returns [`IdentifierError::AlphabetTooLarge`] if the packed bounds do
/// not fit in a `u64`.
pub fn generate_batched_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    start: &Alphabet,
    continuation: &Alphabet,
) -> Result<String> {
    if length == 0 {
        return Ok(String::new());
    }

    let bounds = Bounds::new(start.len(), continuation.len()).ok_or(
        IdentifierError::AlphabetTooLarge {
            start: start.len(),
            continuation: continuation.len(),
        },
    )?;

    Ok(batched(rng, length, start, continuation, bounds))
}

/// Generates an identifier with one random draw per character.
///
/// Slower than the batched path but valid for alphabets of any size.
pub fn generate_per_char_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    start: &Alphabet,
    continuation: &Alphabet,
) -> String {
    if length == 0 {
        return String::new();
    }

    let mut id = String::with_capacity(length);
    id.push(start.symbol(rng.random_range(0..start.len())));
    for _ in 1..length {
        id.push(continuation.symbol(rng.random_range(0..continuation.len())));
    }
    id
}

fn batched<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    start: &Alphabet,
    continuation: &Alphabet,
    bounds: Bounds,
) -> String {
    let s = start.len() as u64;
    let n = continuation.len() as u64;

    let mut id = String::with_capacity(length);

    let mut d = rng.random_range(0..bounds.head);
    id.push(start.symbol((d % s) as usize));
    d /= s;

    for i in 1..length {
        if i % CHARS_PER_DRAW == 0 {
            d = rng.random_range(0..bounds.tail);
        }
        id.push(continuation.symbol((d % n) as usize));
        d /= n;
    }

    id
}

/// Random id of letters and digits, starting with a letter.
pub fn make_random_id(length: usize) -> String {
    generate(length, &ID_START, &ID_NONSTART)
}

/// Random id of lower-case letters and digits, starting with a letter.
pub fn make_random_lowercase_id(length: usize) -> String {
    generate(length, &LOWER_CASE, &LOWER_ID_NONSTART)
}

/// Random id that is a valid Java identifier.
///
/// Only letters and digits are produced; `_` is accepted by
/// [`crate::validate::is_good_java_identifier`] but never generated.
pub fn make_random_java_id(length: usize) -> String {
    generate(length, &ID_START, &ID_NONSTART)
}
