//! Process-wide random sources.
//!
//! Two sources back every generator in the crate:
//!
//! - the **fast source**, `rand`'s thread-local generator. It is created
//!   on demand per thread and needs no lifecycle management. It names
//!   resources and builds correlation tokens, never secrets.
//! - the **secure source**, a single [`Csprng`] shared by the whole
//!   process. It is built from OS entropy the first time anybody asks for
//!   it and is never replaced or torn down afterwards.
//!
//! Initialisation of the secure source goes through a [`OnceLock`], so
//! concurrent first callers block on one construction and all observe the
//! same instance.

use std::sync::OnceLock;

use parking_lot::Mutex;
use rand::rngs::ThreadRng;
use rand::{Rng, RngCore};

use super::Csprng;

static SECURE_SOURCE: OnceLock<SecureSource> = OnceLock::new();

/// The process-wide cryptographically strong generator.
///
/// Obtained through [`secure_source`]. The generator state is guarded by a
/// mutex that is held only while a single closure runs.
pub struct SecureSource {
    rng: Mutex<Csprng>,
}

impl SecureSource {
    fn from_os() -> Self {
        Self {
            rng: Mutex::new(Csprng::from_os()),
        }
    }

    /// Runs `f` with exclusive access to the secure generator.
    ///
    /// Keep the closure short: every other secure draw in the process waits
    /// for it.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut Csprng) -> T) -> T {
        let mut rng = self.rng.lock();
        f(&mut rng)
    }

    /// Fills `dest` with cryptographically secure random bytes.
    pub fn fill_bytes(&self, dest: &mut [u8]) {
        self.with_rng(|rng| rng.fill_bytes(dest));
    }
}

/// Returns the process-wide secure source, creating it on first use.
///
/// # Panics
/// Panics on first use if the operating system cannot provide entropy.
pub fn secure_source() -> &'static SecureSource {
    SECURE_SOURCE.get_or_init(|| {
        tracing::debug!("seeding process-wide secure random source from OS entropy");
        SecureSource::from_os()
    })
}

/// Returns the fast general-purpose generator for the calling thread.
pub fn fast_rng() -> ThreadRng {
    rand::rng()
}

/// Returns a uniformly random `u64` from the fast source.
pub fn random_u64() -> u64 {
    fast_rng().random()
}

/// Returns a uniformly random `i32` from the fast source.
pub fn random_i32() -> i32 {
    fast_rng().random()
}

/// Returns a uniformly random value in `[0, bound)` from the fast source.
///
/// A `bound` of zero yields zero.
pub fn random_below(bound: u64) -> u64 {
    if bound == 0 {
        return 0;
    }
    fast_rng().random_range(0..bound)
}

/// Returns a random boolean from the fast source.
pub fn random_bool() -> bool {
    fast_rng().random()
}

/// Returns a uniformly random `f64` in `[0, 1)` from the fast source.
pub fn random_f64() -> f64 {
    fast_rng().random()
}

/// Fills `buf` with bytes from the fast source and returns it.
pub fn fill_random(buf: &mut [u8]) -> &mut [u8] {
    fast_rng().fill_bytes(buf);
    buf
}

/// Returns `len` bytes from the fast source.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    fill_random(&mut buf);
    buf
}
