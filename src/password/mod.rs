//! Random passwords with guaranteed character-class coverage.

pub mod core;

pub use self::core::{generate, generate_with, make_random_password};
