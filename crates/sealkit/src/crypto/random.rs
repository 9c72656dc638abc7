//! Secure random number generation.
//!
//! Uses the operating system's cryptographic random source via `rand`.

use rand::RngCore;

use crate::sizes::{SYMMETRIC_KEY_SIZE, XCHACHA_IV_SIZE};

/// Fill a buffer with cryptographically secure random bytes.
pub fn fill_random(buf: &mut [u8]) {
    rand::thread_rng().fill_bytes(buf);
}

/// Return `n` cryptographically secure random bytes.
pub fn random(n: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n];
    fill_random(&mut buf);
    buf
}

/// Generate a fixed-size array of cryptographically secure random bytes.
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut buf = [0u8; N];
    fill_random(&mut buf);
    buf
}

/// Generate a random 24-byte IV (for XChaCha20-Poly1305).
pub fn random_iv() -> [u8; XCHACHA_IV_SIZE] {
    random_bytes()
}

/// Generate a random 32-byte symmetric key.
pub fn random_key() -> [u8; SYMMETRIC_KEY_SIZE] {
    random_bytes()
}
