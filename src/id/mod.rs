//! Random identifiers for naming dynamically created resources.
//!
//! See [`core`] for the draw batching scheme, its alphabet size limit and
//! collision estimates.

pub mod core;

pub use self::core::{
    IdentifierGenerator, generate, generate_batched_with, generate_per_char_with, generate_with,
    make_random_id, make_random_java_id, make_random_lowercase_id,
};
