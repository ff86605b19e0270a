//! Error types shared by every generator in the crate.
//!
//! All failures are synchronous signals of a caller mistake (a length or
//! an alphabet that cannot satisfy the request). Nothing here is transient,
//! so none of these errors is worth retrying.

use thiserror::Error;

/// Broad classification of an [`IdentifierError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The caller passed a length or alphabet the operation cannot honour.
    InvalidArgument,
}

/// Errors returned by identifier, password and encoding operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    /// A base64 chunk was requested with more symbols than a `u64` can feed.
    #[error("can't get a base64 chunk longer than 11 symbols from a 64-bit value (requested {length})")]
    ChunkTooLong { length: usize },

    /// The password is too short to hold one character from every pool.
    #[error("password length {length} is shorter than the {pools} mandatory character pools")]
    PasswordTooShort { length: usize, pools: usize },

    /// An alphabet (or a set of pools) has no symbol to draw from.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// An alphabet lists the same symbol twice.
    #[error("alphabet contains symbol {symbol:?} more than once")]
    DuplicateSymbol { symbol: char },

    /// The packed bound for batched draws does not fit in a `u64`.
    #[error(
        "alphabets of {start} and {continuation} symbols overflow the 64-bit batched draw bound"
    )]
    AlphabetTooLarge { start: usize, continuation: usize },
}

impl IdentifierError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ChunkTooLong { .. }
            | Self::PasswordTooShort { .. }
            | Self::EmptyAlphabet
            | Self::DuplicateSymbol { .. }
            | Self::AlphabetTooLarge { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, IdentifierError>;
