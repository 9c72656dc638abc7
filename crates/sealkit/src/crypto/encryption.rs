//! Authenticated public-key encryption ("box").
//!
//! X25519 key agreement with XSalsa20-Poly1305, byte-compatible with
//! libsodium's `crypto_box_easy`. A fresh random nonce is generated per
//! message and appended after the ciphertext:
//!
//! ```text
//! boxed = MAC(16) || encrypted message || nonce(24)
//! ```

use crypto_box::aead::{Aead, Nonce};
use crypto_box::{PublicKey, SalsaBox, SecretKey};
use zeroize::Zeroize;

use crate::crypto::random::random_bytes;
use crate::error::{fixed, CryptoError, Result};
use crate::sizes::{ENCRYPTION_PRIVATE_KEY_SIZE, ENCRYPTION_PUBLIC_KEY_SIZE, MAC_SIZE};

/// Nonce length of the box primitive. Distinct from `XCHACHA_IV_SIZE`
/// even though both happen to be 24.
pub const BOX_NONCE_SIZE: usize = 24;

/// Bytes added to the plaintext by [`encrypt`].
pub const BOX_OVERHEAD: usize = MAC_SIZE + BOX_NONCE_SIZE;

fn salsa_box(public_key: &[u8], private_key: &[u8]) -> Result<SalsaBox> {
    let public = fixed::<ENCRYPTION_PUBLIC_KEY_SIZE>("encryption public key", public_key)?;
    let mut private = fixed::<ENCRYPTION_PRIVATE_KEY_SIZE>("encryption private key", private_key)?;
    let secret = SecretKey::from(private);
    private.zeroize();
    Ok(SalsaBox::new(&PublicKey::from(public), &secret))
}

/// Encrypt `message` from the sender to the recipient.
///
/// Returns `ciphertext || nonce`.
pub fn encrypt(
    message: &[u8],
    recipient_public_key: &[u8],
    sender_private_key: &[u8],
) -> Result<Vec<u8>> {
    let cipher = salsa_box(recipient_public_key, sender_private_key)?;
    let nonce_bytes: [u8; BOX_NONCE_SIZE] = random_bytes();
    let mut boxed = cipher
        .encrypt(Nonce::<SalsaBox>::from_slice(&nonce_bytes), message)
        .map_err(|e| CryptoError::PreconditionViolation(format!("box encrypt: {e}")))?;
    boxed.extend_from_slice(&nonce_bytes);
    Ok(boxed)
}

/// Decrypt a buffer produced by [`encrypt`].
///
/// Fails with `AuthenticationFailed` if the MAC does not verify; no
/// plaintext is returned in that case.
pub fn decrypt(
    boxed: &[u8],
    sender_public_key: &[u8],
    recipient_private_key: &[u8],
) -> Result<Vec<u8>> {
    let cipher = salsa_box(sender_public_key, recipient_private_key)?;
    if boxed.len() < BOX_OVERHEAD {
        log::debug!("box rejected: {} bytes is shorter than the overhead", boxed.len());
        return Err(CryptoError::AuthenticationFailed(format!(
            "box of {} bytes is too short",
            boxed.len()
        )));
    }

    let (ciphertext, nonce) = boxed.split_at(boxed.len() - BOX_NONCE_SIZE);
    cipher
        .decrypt(Nonce::<SalsaBox>::from_slice(nonce), ciphertext)
        .map_err(|_| {
            log::debug!("box authentication failed for {} byte ciphertext", boxed.len());
            CryptoError::AuthenticationFailed("box".into())
        })
}
