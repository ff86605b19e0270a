//! The `Alphabet` type.
//!
//! An alphabet is an ordered, non-empty sequence of distinct characters.
//! Generators index into it with uniformly random positions, so a repeated
//! symbol would silently double its probability; construction rejects it.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{IdentifierError, Result};

/// An ordered set of distinct characters usable at a token position.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Alphabet {
    text: String,
    symbols: Box<[char]>,
}

impl Alphabet {
    /// Builds an alphabet from the characters of `symbols`, in order.
    ///
    /// # Errors
    ///
    /// - [`IdentifierError::EmptyAlphabet`] if `symbols` is empty
    /// - [`IdentifierError::DuplicateSymbol`] if a character appears twice
    pub fn new(symbols: &str) -> Result<Self> {
        if symbols.is_empty() {
            return Err(IdentifierError::EmptyAlphabet);
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        if let Some(symbol) = symbols.chars().find(|&c| !seen.insert(c)) {
            return Err(IdentifierError::DuplicateSymbol { symbol });
        }

        Ok(Self::from_distinct(symbols.chars()))
    }

    /// Builds the union of several alphabets.
    ///
    /// Symbols keep the order of their first occurrence; a symbol present
    /// in several inputs appears once, so it is not favoured when drawing
    /// from the union.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::EmptyAlphabet`] if `alphabets` is empty.
    pub fn union(alphabets: &[&Alphabet]) -> Result<Self> {
        if alphabets.is_empty() {
            return Err(IdentifierError::EmptyAlphabet);
        }

        let mut seen = HashSet::new();
        let merged = alphabets
            .iter()
            .flat_map(|alphabet| alphabet.symbols.iter().copied())
            .filter(|&c| seen.insert(c));

        Ok(Self::from_distinct(merged))
    }

    /// Builds an alphabet from characters already known to be distinct.
    pub(crate) fn from_distinct(symbols: impl Iterator<Item = char>) -> Self {
        let symbols: Box<[char]> = symbols.collect();
        Self {
            text: symbols.iter().collect(),
            symbols,
        }
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; an alphabet holds at least one symbol.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Returns the position of `c`, if it belongs to the alphabet.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.symbols.iter().position(|&s| s == c)
    }

    /// Whether `c` belongs to the alphabet.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    /// The symbols, in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// The symbols as a string, in order.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.text).finish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Alphabet {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = IdentifierError;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = IdentifierError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.text
    }
}
