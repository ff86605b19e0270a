//! ChaCha20 block function
//!
//! This module provides the ChaCha20 permutation as specified in RFC 8439,
//! reduced to what a random bit generator needs: a 256-bit key, a 64-bit
//! block counter and an all-zero nonce.
//!
//! Output is produced as sixteen little-endian `u32` words, which is the
//! natural unit for feeding `next_u32` / `next_u64` without byte shuffling.
//!
//! This module does not implement encryption. It only produces a single
//! keystream block per call.

/// ChaCha20 constant words (`"expand 32-byte k"`, little-endian).
const CHACHA20_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Number of `u32` words in one ChaCha20 block.
pub(crate) const BLOCK_WORDS: usize = 16;

/// Number of `u32` words in a ChaCha20 key.
pub(crate) const KEY_WORDS: usize = 8;

#[inline(always)]
fn quarter_round(state: &mut [u32; BLOCK_WORDS], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(7);
}

/// Computes one keystream block for `key` at position `counter`.
///
/// The counter occupies state words 12 and 13; words 14 and 15 (the nonce)
/// stay zero, since every generator instance owns its key exclusively.
pub(crate) fn block(key: &[u32; KEY_WORDS], counter: u64) -> [u32; BLOCK_WORDS] {
    let mut state = [0u32; BLOCK_WORDS];

    state[..4].copy_from_slice(&CHACHA20_CONSTANTS);
    state[4..12].copy_from_slice(key);
    state[12] = counter as u32;
    state[13] = (counter >> 32) as u32;

    let input = state;

    for _ in 0..10 {
        // Column rounds
        quarter_round(&mut state, 0, 4, 8, 12);
        quarter_round(&mut state, 1, 5, 9, 13);
        quarter_round(&mut state, 2, 6, 10, 14);
        quarter_round(&mut state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(&mut state, 0, 5, 10, 15);
        quarter_round(&mut state, 1, 6, 11, 12);
        quarter_round(&mut state, 2, 7, 8, 13);
        quarter_round(&mut state, 3, 4, 9, 14);
    }

    for (word, original) in state.iter_mut().zip(input) {
        *word = word.wrapping_add(original);
    }

    state
}

/// Converts a 32-byte seed into key words, little-endian.
pub(crate) fn key_from_bytes(bytes: &[u8; 32]) -> [u32; KEY_WORDS] {
    let mut key = [0u32; KEY_WORDS];
    for (word, chunk) in key.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    key
}
