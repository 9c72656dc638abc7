//! Symmetric encryption using XChaCha20-Poly1305.
//!
//! The 24-byte extended nonce is large enough to be drawn at random per
//! message, or derived from a shared seed and a message counter with
//! [`derive_iv`](crate::crypto::derivation::derive_iv).
//!
//! Layouts:
//! - random IV: `iv(24) || ciphertext || MAC(16)`
//! - derived IV: `ciphertext || MAC(16)`, the IV is recomputed by the reader

use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    XChaCha20Poly1305, XNonce,
};

use crate::crypto::derivation::derive_iv;
use crate::crypto::random::{random_iv, random_key};
use crate::error::{fixed, CryptoError, Result};
use crate::sizes::{MAC_SIZE, SYMMETRIC_ENCRYPTION_OVERHEAD, SYMMETRIC_KEY_SIZE, XCHACHA_IV_SIZE};

/// Generate a fresh random symmetric key.
pub fn make_symmetric_key() -> [u8; SYMMETRIC_KEY_SIZE] {
    random_key()
}

fn cipher(key: &[u8]) -> Result<XChaCha20Poly1305> {
    let key = fixed::<SYMMETRIC_KEY_SIZE>("symmetric key", key)?;
    Ok(XChaCha20Poly1305::new(&key.into()))
}

/// Encrypt with a caller-supplied IV. Returns `ciphertext || MAC`.
///
/// The IV must never repeat for the same key.
pub fn encrypt_aead(
    key: &[u8],
    iv: &[u8],
    clear_data: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    let iv = fixed::<XCHACHA_IV_SIZE>("IV", iv)?;
    cipher(key)?
        .encrypt(
            XNonce::from_slice(&iv),
            Payload {
                msg: clear_data,
                aad: associated_data,
            },
        )
        .map_err(|e| CryptoError::PreconditionViolation(format!("aead encrypt: {e}")))
}

/// Decrypt `ciphertext || MAC` with a caller-supplied IV.
pub fn decrypt_aead(
    key: &[u8],
    iv: &[u8],
    encrypted_data: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    let iv = fixed::<XCHACHA_IV_SIZE>("IV", iv)?;
    let cipher = cipher(key)?;
    if encrypted_data.len() < MAC_SIZE {
        return Err(CryptoError::AuthenticationFailed(format!(
            "aead ciphertext of {} bytes is too short",
            encrypted_data.len()
        )));
    }
    cipher
        .decrypt(
            XNonce::from_slice(&iv),
            Payload {
                msg: encrypted_data,
                aad: associated_data,
            },
        )
        .map_err(|_| {
            log::debug!("aead authentication failed for {} bytes", encrypted_data.len());
            CryptoError::AuthenticationFailed("aead".into())
        })
}

/// Encrypt under a fresh random IV and prepend it to the output.
pub fn encrypt_with_random_iv(
    key: &[u8],
    clear_data: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    let iv = random_iv();
    let encrypted = encrypt_aead(key, &iv, clear_data, associated_data)?;
    let mut out = Vec::with_capacity(XCHACHA_IV_SIZE + encrypted.len());
    out.extend_from_slice(&iv);
    out.extend_from_slice(&encrypted);
    Ok(out)
}

/// Return the IV prefix of a buffer produced by [`encrypt_with_random_iv`].
pub fn extract_iv(encrypted_data: &[u8]) -> Result<[u8; XCHACHA_IV_SIZE]> {
    if encrypted_data.len() < SYMMETRIC_ENCRYPTION_OVERHEAD {
        return Err(CryptoError::PreconditionViolation(format!(
            "encrypted data must be at least {SYMMETRIC_ENCRYPTION_OVERHEAD} bytes, got {}",
            encrypted_data.len()
        )));
    }
    fixed("IV", &encrypted_data[..XCHACHA_IV_SIZE])
}

/// Decrypt a buffer produced by [`encrypt_with_random_iv`].
pub fn decrypt_with_iv_prefix(
    key: &[u8],
    encrypted_data: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    if encrypted_data.len() < SYMMETRIC_ENCRYPTION_OVERHEAD {
        return Err(CryptoError::AuthenticationFailed(format!(
            "aead ciphertext of {} bytes is too short",
            encrypted_data.len()
        )));
    }
    let (iv, encrypted) = encrypted_data.split_at(XCHACHA_IV_SIZE);
    decrypt_aead(key, iv, encrypted, associated_data)
}

/// Encrypt message number `index` of the IV stream defined by `seed`.
///
/// The IV is not part of the output.
pub fn encrypt_with_derived_iv(
    key: &[u8],
    seed: &[u8],
    index: u64,
    clear_data: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    encrypt_aead(key, &derive_iv(seed, index), clear_data, associated_data)
}

/// Decrypt message number `index` of the IV stream defined by `seed`.
pub fn decrypt_with_derived_iv(
    key: &[u8],
    seed: &[u8],
    index: u64,
    encrypted_data: &[u8],
    associated_data: &[u8],
) -> Result<Vec<u8>> {
    decrypt_aead(key, &derive_iv(seed, index), encrypted_data, associated_data)
}
