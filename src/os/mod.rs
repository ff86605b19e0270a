//! Operating system entropy.
//!
//! The only OS service the crate needs is a source of cryptographically
//! secure bytes for seeding the secure generator. Platform selection
//! (`getrandom(2)` on Linux, `arc4random_buf` on macOS,
//! `BCryptGenRandom` on Windows, ...) is delegated to the `getrandom`
//! crate so this layer stays a single safe function.

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// # Panics
/// Panics if the operating system cannot provide entropy. Such a failure
/// indicates a critical platform issue and is unrecoverable for a
/// generator whose outputs are treated as secrets.
pub(crate) fn sys_random(buf: &mut [u8]) {
    if let Err(err) = getrandom::fill(buf) {
        panic!("OS entropy source failed: {err}");
    }
}
