use std::collections::HashSet;

use identifiers::alphabet::charsets::{BASE64, BASE64_VALID_CHARS, ID_NONSTART, ID_START};
use identifiers::encoding::base64::{
    MAX_CHUNK_SYMBOLS, RANDOM_CHUNK_SYMBOLS, append_chunk, encode_chunk, encode_random, encode_random_with,
    encode_value,
};
use identifiers::encoding::hash::encode;
use identifiers::{ErrorKind, IdentifierError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn decode(token: &str) -> u64 {
    token
        .chars()
        .enumerate()
        .map(|(i, c)| (BASE64.index_of(c).unwrap() as u64) << (6 * i))
        .sum()
}

#[test]
fn hash_of_zero_is_first_letter() {
    assert_eq!(encode(0), "A");
}

#[test]
fn hash_uses_mixed_radix() {
    assert_eq!(encode(1), "B");
    assert_eq!(encode(51), "z");
    assert_eq!(encode(52), "AB");
    assert_eq!(encode(53), "BB");
    // 52 * 62 = 3224 is the first three-symbol value.
    assert_eq!(encode(3223), "z0");
    assert_eq!(encode(3224), "AAB");
}

#[test]
fn hash_ignores_sign() {
    for v in [1i64, 51, 52, 1_000_003, i32::MAX as i64, i64::MAX, i64::MIN + 1] {
        assert_eq!(encode(v), encode(-v));
    }
}

#[test]
fn hash_of_most_negative_value_terminates() {
    let token = encode(i64::MIN);

    assert!(!token.is_empty());
    assert!(token.chars().next().is_some_and(|c| ID_START.contains(c)));
    assert_ne!(token, encode(i64::MAX));
}

#[test]
fn hash_tokens_start_with_letter_and_stay_alphanumeric() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..10_000 {
        let token = encode(rng.random());
        let mut chars = token.chars();

        assert!(ID_START.contains(chars.next().unwrap()));
        assert!(chars.all(|c| ID_NONSTART.contains(c)));
        assert!(token.len() <= 12);
    }
}

#[test]
fn hash_is_injective_on_magnitudes() {
    let tokens: HashSet<String> = (0..100_000).map(encode).collect();
    assert_eq!(tokens.len(), 100_000);
}

#[test]
fn hash_length_grows_with_magnitude() {
    assert_eq!(encode(51).len(), 1);
    assert_eq!(encode(52).len(), 2);
    assert!(encode(i64::MAX).len() > encode(1 << 40).len());
}

#[test]
fn chunk_of_zero_repeats_first_symbol() {
    assert_eq!(encode_chunk(0, 5).unwrap(), "AAAAA");
    assert_eq!(encode_chunk(12345, 0).unwrap(), "");
}

#[test]
fn chunk_is_little_endian_six_bits() {
    assert_eq!(encode_chunk(1, 2).unwrap(), "BA");
    assert_eq!(encode_chunk(63, 1).unwrap(), "=");
    assert_eq!(encode_chunk(64, 2).unwrap(), "AB");
    assert_eq!(encode_chunk(u64::MAX, 11).unwrap(), "==========P");
}

#[test]
fn chunk_longer_than_eleven_fails() {
    let err = encode_chunk(42, 12).unwrap_err();
    assert_eq!(err, IdentifierError::ChunkTooLong { length: 12 });
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    assert!(encode_chunk(42, 11).is_ok());
}

#[test]
fn chunk_ceiling_matches_limit() {
    assert_eq!(MAX_CHUNK_SYMBOLS, 11);
    assert_eq!(
        encode_chunk(1, MAX_CHUNK_SYMBOLS).unwrap().len(),
        MAX_CHUNK_SYMBOLS
    );
    assert_eq!(
        encode_chunk(1, MAX_CHUNK_SYMBOLS + 1).unwrap_err(),
        IdentifierError::ChunkTooLong {
            length: MAX_CHUNK_SYMBOLS + 1
        }
    );
}

#[test]
fn ten_symbols_recover_low_sixty_bits() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..1_000 {
        let value: u64 = rng.random();
        let token = encode_chunk(value, 10).unwrap();
        assert_eq!(decode(&token), value & ((1 << 60) - 1));
        assert_eq!(encode_value(value), token);
    }
}

#[test]
fn append_chunk_extends_buffer() {
    let mut out = String::from("id-");
    append_chunk(0, 3, &mut out).unwrap();
    assert_eq!(out, "id-AAA");

    assert!(append_chunk(0, 20, &mut out).is_err());
    assert_eq!(out, "id-AAA");
}

#[test]
fn random_tokens_have_requested_length() {
    for length in [0, 1, 9, 10, 11, 25, 100] {
        let token = encode_random(length);
        assert_eq!(token.len(), length);
        assert!(token.chars().all(|c| BASE64_VALID_CHARS.contains(c)));
    }
}

#[test]
fn random_tokens_chain_one_draw_per_ten_symbols() {
    let mut source = StdRng::seed_from_u64(77);
    let mut replay = StdRng::seed_from_u64(77);

    let token = encode_random_with(&mut source, 25);

    let first: u64 = replay.random();
    let second: u64 = replay.random();
    let third: u64 = replay.random();
    let expected = format!(
        "{}{}{}",
        encode_chunk(first, RANDOM_CHUNK_SYMBOLS).unwrap(),
        encode_chunk(second, RANDOM_CHUNK_SYMBOLS).unwrap(),
        encode_chunk(third, 5).unwrap(),
    );

    assert_eq!(token, expected);
}
