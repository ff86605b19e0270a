//! Random identifiers, passwords and compact value encodings.
//!
//! This crate produces the short strings a provisioning system needs when
//! it creates things at runtime: names for resources, one-time credentials
//! and correlation tokens derived from hash codes. It only emits strings;
//! storing or protecting them is up to the caller.
//!
//! # Module overview
//!
//! - `rng`
//!   The random sources. A fast thread-local generator for non-sensitive
//!   tokens, and a process-wide ChaCha20 CSPRNG, seeded from the OS on
//!   first use and never replaced, for secrets.
//!
//! - `alphabet`
//!   The validated [`Alphabet`] type and the predefined character sets
//!   (letters, digits, password symbols, the 64-symbol value encoding).
//!
//! - `id`
//!   Fixed-length identifiers whose first character comes from a *start*
//!   alphabet and the rest from a *continuation* alphabet. Random draws
//!   are batched, one per four characters.
//!
//! - `password`
//!   Passwords containing at least one character from each requested pool,
//!   shuffled, drawn from the secure source.
//!
//! - `encoding`
//!   Deterministic encodings of 64-bit values: mixed-radix tokens from hash
//!   codes, and fixed-width 6-bit chunks (with random tokens chained from
//!   them).
//!
//! - `validate`
//!   Predicates checking a token against start/continuation alphabets, and
//!   Java-style name checks built on them.
//!
//! # Concurrency
//!
//! Every operation is synchronous and never blocks on I/O. All of them may
//! be called from any number of threads. The only shared state is the
//! secure source, whose one-time construction is guarded by a `OnceLock`.
//!
//! # Errors
//!
//! Invalid lengths and alphabets are reported as [`IdentifierError`]; all
//! variants are of kind [`ErrorKind::InvalidArgument`].

mod os;

pub mod alphabet;
pub mod encoding;
pub mod error;
pub mod id;
pub mod password;
pub mod rng;
pub mod validate;

pub use alphabet::Alphabet;
pub use error::{ErrorKind, IdentifierError, Result};
pub use id::{IdentifierGenerator, make_random_id, make_random_java_id, make_random_lowercase_id};
pub use password::make_random_password;
