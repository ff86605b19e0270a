//! Token validation.
//!
//! Pure predicates: no randomness, no allocation, no side effects.

use crate::alphabet::Alphabet;
use crate::alphabet::charsets::{JAVA_GOOD_NONSTART, JAVA_GOOD_START};

/// Checks a token against a start and a continuation alphabet.
///
/// Returns `false` for `None` or an empty token. Otherwise returns `true`
/// iff the first character is in `start` and every other character is in
/// `continuation`.
pub fn is_valid_token(token: Option<&str>, start: &Alphabet, continuation: &Alphabet) -> bool {
    let Some(token) = token else {
        return false;
    };

    let mut chars = token.chars();
    match chars.next() {
        Some(first) => start.contains(first) && chars.all(|c| continuation.contains(c)),
        None => false,
    }
}

/// Whether `name` is a dotted Java package or class name made of plain
/// ASCII letters, digits and `_`, with no segment starting with a digit.
///
/// This is the common, portable subset of what the Java language allows.
pub fn is_good_java_identifier(name: &str) -> bool {
    name.split('.')
        .all(|segment| is_valid_token(Some(segment), &JAVA_GOOD_START, &JAVA_GOOD_NONSTART))
}

/// As [`is_good_java_identifier`], also accepting `$`-separated nested
/// class suffixes such as `Outer$Inner` or `Outer$1`.
pub fn is_good_java_binary_name(name: &str) -> bool {
    let mut parts = name.split('$');

    parts.next().is_some_and(is_good_java_identifier)
        && parts.all(|part| {
            !part.is_empty() && part.chars().all(|c| JAVA_GOOD_NONSTART.contains(c))
        })
}
