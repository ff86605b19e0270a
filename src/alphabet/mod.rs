//! Alphabets and the crate's predefined character sets.
//!
//! - [`Alphabet`]  
//!   Validated, immutable symbol sequence consumed by every generator
//!   and by the token validator.
//!
//! - [`charsets`]  
//!   String constants and ready-made alphabets: letters, digits, the
//!   password symbol set, the id sets and the 64-symbol value encoding
//!   set.

mod core;
pub mod charsets;

pub use self::core::Alphabet;
