//! Random number generation module
//!
//! This module provides the random sources every generator in the crate
//! draws from:
//!
//! - [`Csprng`], a ChaCha20-based generator seeded from the operating
//!   system, used wherever outputs are secrets (passwords).
//! - [`secure_source`], the process-wide, lazily-created [`Csprng`].
//! - [`fast_rng`] and the `random_*` helpers, backed by `rand`'s
//!   thread-local generator, used for non-sensitive tokens.
//!
//! Generators also accept any `rand::Rng` directly, which lets tests run
//! them against a seeded deterministic source.

pub(crate) mod chacha20;
mod csprng;
mod source;

/// Cryptographically secure pseudorandom number generator.
pub use csprng::Csprng;

pub use source::{
    SecureSource, fast_rng, fill_random, random_below, random_bool, random_bytes, random_f64,
    random_i32, random_u64, secure_source,
};
