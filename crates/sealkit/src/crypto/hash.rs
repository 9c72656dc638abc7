//! BLAKE2b generic hashing with a caller-chosen output length.
//!
//! Output matches libsodium's unkeyed `crypto_generichash`, where the
//! requested length is part of the BLAKE2b parameter block. A 24-byte
//! digest is therefore not a prefix of the 32-byte digest of the same input.

use blake2::digest::consts::U32;
use blake2::digest::{Digest, Update, VariableOutput};
use blake2::{Blake2b, Blake2bVar};

use crate::error::{CryptoError, Result};
use crate::sizes::HASH_SIZE;

/// Smallest digest BLAKE2b can produce.
pub const GENERICHASH_MIN_SIZE: usize = 1;
/// Largest digest BLAKE2b can produce.
pub const GENERICHASH_MAX_SIZE: usize = 64;

/// Hash `data` into `out`, whose length selects the digest size.
pub fn generichash_into(data: &[u8], out: &mut [u8]) -> Result<()> {
    if !(GENERICHASH_MIN_SIZE..=GENERICHASH_MAX_SIZE).contains(&out.len()) {
        return Err(CryptoError::PreconditionViolation(format!(
            "hash output must be between {GENERICHASH_MIN_SIZE} and {GENERICHASH_MAX_SIZE} bytes, got {}",
            out.len()
        )));
    }
    let mut hasher = Blake2bVar::new(out.len())
        .map_err(|e| CryptoError::PreconditionViolation(format!("blake2b init: {e}")))?;
    hasher.update(data);
    hasher
        .finalize_variable(out)
        .map_err(|e| CryptoError::PreconditionViolation(format!("blake2b finalize: {e}")))
}

/// Hash `data` to a digest of `out_len` bytes.
pub fn generichash(data: &[u8], out_len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; out_len];
    generichash_into(data, &mut out)?;
    Ok(out)
}

/// Hash `data` to the default 32-byte digest.
pub fn hash(data: &[u8]) -> [u8; HASH_SIZE] {
    Blake2b::<U32>::digest(data).into()
}
