//! Predefined character sets.
//!
//! Every set is available twice: as a `&str` constant, and as a lazily
//! built [`Alphabet`] static for passing straight to the generators.

use std::sync::LazyLock;

use super::Alphabet;

pub const UPPER_CASE_ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWER_CASE_ALPHA: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMERIC: &str = "1234567890";
pub const NON_ALPHA_NUMERIC: &str = "!@$%^&*()-_=+[]{};:\\|/?,.<>~";

/// Letters; the first symbol of generated ids and hash tokens.
pub const ID_VALID_START_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Letters then digits; every symbol after the first.
pub const ID_VALID_NONSTART_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890";

/// Characters accepted at the start of a Java package or class segment.
pub const JAVA_GOOD_START_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_";

/// Characters accepted after the start of a Java package or class segment.
pub const JAVA_GOOD_NONSTART_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_1234567890";

/// The 64 symbols of the fixed-width value encoding, index = 6-bit value.
pub const BASE64_VALID_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890+=";

/// Every character a default password may contain.
pub const PASSWORD_VALID_CHARS: &str = "!@$%^&*()-_=+[]{};:\\|/?,.<>~ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz1234567890";

fn lazy(symbols: &'static str) -> Alphabet {
    Alphabet::from_distinct(symbols.chars())
}

pub static UPPER_CASE: LazyLock<Alphabet> = LazyLock::new(|| lazy(UPPER_CASE_ALPHA));
pub static LOWER_CASE: LazyLock<Alphabet> = LazyLock::new(|| lazy(LOWER_CASE_ALPHA));
pub static DIGITS: LazyLock<Alphabet> = LazyLock::new(|| lazy(NUMERIC));
pub static SYMBOLS: LazyLock<Alphabet> = LazyLock::new(|| lazy(NON_ALPHA_NUMERIC));
pub static ID_START: LazyLock<Alphabet> = LazyLock::new(|| lazy(ID_VALID_START_CHARS));
pub static ID_NONSTART: LazyLock<Alphabet> = LazyLock::new(|| lazy(ID_VALID_NONSTART_CHARS));
pub static LOWER_ID_NONSTART: LazyLock<Alphabet> =
    LazyLock::new(|| lazy("abcdefghijklmnopqrstuvwxyz1234567890"));
pub static JAVA_GOOD_START: LazyLock<Alphabet> = LazyLock::new(|| lazy(JAVA_GOOD_START_CHARS));
pub static JAVA_GOOD_NONSTART: LazyLock<Alphabet> =
    LazyLock::new(|| lazy(JAVA_GOOD_NONSTART_CHARS));
pub static BASE64: LazyLock<Alphabet> = LazyLock::new(|| lazy(BASE64_VALID_CHARS));
pub static PASSWORD: LazyLock<Alphabet> = LazyLock::new(|| lazy(PASSWORD_VALID_CHARS));
