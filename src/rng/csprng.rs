//! ChaCha20-based CSPRNG
//!
//! This module implements the cryptographically secure generator behind the
//! crate's secure random source. It:
//! - relies on the operating system for its initial seed
//! - expands the seed with the ChaCha20 block function
//! - rekeys on every block, so a captured state reveals no earlier output
//!
//! The generator implements [`RngCore`], [`CryptoRng`] and [`SeedableRng`],
//! so all of `rand`'s uniform sampling and shuffling works on top of it.

use rand::{CryptoRng, RngCore, SeedableRng};

use crate::os::sys_random;
use crate::rng::chacha20::{self, BLOCK_WORDS, KEY_WORDS};

/// Words handed out per block; the rest of each block becomes the next key.
const OUTPUT_WORDS: usize = BLOCK_WORDS - KEY_WORDS;

/// Cryptographically secure pseudorandom number generator.
///
/// Each ChaCha20 block is split in two: the first eight words replace the
/// key, the last eight are buffered as output. The previous key is
/// overwritten before any of the new output is returned.
pub struct Csprng {
    /// Current ChaCha20 key (256-bit)
    key: [u32; KEY_WORDS],

    /// Block counter
    counter: u64,

    /// Buffered output words
    buffer: [u32; OUTPUT_WORDS],

    /// Index of the next unread word in `buffer`
    index: usize,
}

impl Csprng {
    /// Creates a new CSPRNG seeded from the operating system.
    ///
    /// This is equivalent to calling [`Csprng::from_os`].
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a new CSPRNG using entropy provided by the operating system.
    ///
    /// # Panics
    /// Panics if the OS cannot provide entropy.
    pub fn from_os() -> Self {
        let mut seed = [0u8; 32];
        sys_random(&mut seed);

        Self::from_seed(seed)
    }

    fn refill(&mut self) {
        let block = chacha20::block(&self.key, self.counter);
        self.counter = self.counter.wrapping_add(1);

        self.key.copy_from_slice(&block[..KEY_WORDS]);
        self.buffer.copy_from_slice(&block[KEY_WORDS..]);
        self.index = 0;
    }
}

impl SeedableRng for Csprng {
    type Seed = [u8; 32];

    /// Creates a CSPRNG from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable unless the
    /// generator is used for reproducible tests. The local copy is wiped
    /// once it has been turned into key material.
    fn from_seed(mut seed: Self::Seed) -> Self {
        let key = chacha20::key_from_bytes(&seed);
        seed.fill(0);

        Self {
            key,
            counter: 0,
            buffer: [0u32; OUTPUT_WORDS],
            index: OUTPUT_WORDS,
        }
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        if self.index >= OUTPUT_WORDS {
            self.refill();
        }

        let word = self.buffer[self.index];
        self.buffer[self.index] = 0;
        self.index += 1;
        word
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl CryptoRng for Csprng {}

impl Default for Csprng {
    /// Creates a default CSPRNG instance seeded from the operating system.
    fn default() -> Self {
        Self::new()
    }
}
