//! Deterministic encodings of 64-bit values into short printable tokens.
//!
//! - [`hash`]  
//!   Mixed-radix tokens from signed hash codes; minimal length, always
//!   starting with a letter.
//!
//! - [`base64`]  
//!   Fixed-width 6-bit-per-symbol chunks, and random tokens of any length
//!   chained from such chunks.

pub mod base64;
pub mod hash;
