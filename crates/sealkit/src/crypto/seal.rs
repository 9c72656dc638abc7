//! Anonymous sealed-box encryption and private-key wrapping.
//!
//! Byte-compatible with libsodium's `crypto_box_seal`: an ephemeral X25519
//! key pair is generated per message, the nonce is derived from the
//! ephemeral and recipient public keys, and only the ephemeral public key
//! is carried in the output:
//!
//! ```text
//! sealed = ephemeral_pk(32) || MAC(16) || encrypted message
//! ```
//!
//! The sender cannot be identified from a sealed box.

use rand::rngs::OsRng;
use zeroize::Zeroizing;

use crate::crypto::keys::{
    derive_encryption_key_pair, derive_signature_key_pair, EncryptionKeyPair, SignatureKeyPair,
};
use crate::error::{fixed, CryptoError, Result};
use crate::sizes::{
    ENCRYPTION_PUBLIC_KEY_SIZE, SEALED_ENCRYPTION_PRIVATE_KEY_SIZE,
    SEALED_SIGNATURE_PRIVATE_KEY_SIZE, SEAL_OVERHEAD,
};

/// Encrypt `clear_data` so that only the holder of `recipient_public_key`
/// can open it.
pub fn seal_encrypt(clear_data: &[u8], recipient_public_key: &[u8]) -> Result<Vec<u8>> {
    let public =
        fixed::<ENCRYPTION_PUBLIC_KEY_SIZE>("encryption public key", recipient_public_key)?;
    crypto_box::PublicKey::from(public)
        .seal(&mut OsRng, clear_data)
        .map_err(|e| CryptoError::PreconditionViolation(format!("seal: {e}")))
}

/// Open a sealed box with the recipient's full key pair.
///
/// Both halves of the pair take part: the public key feeds the nonce
/// derivation and the private key the key agreement.
pub fn seal_decrypt(sealed: &[u8], recipient_key_pair: &EncryptionKeyPair) -> Result<Vec<u8>> {
    if sealed.len() < SEAL_OVERHEAD {
        log::debug!("sealed box rejected: {} bytes is shorter than the overhead", sealed.len());
        return Err(CryptoError::AuthenticationFailed(format!(
            "sealed box of {} bytes is too short",
            sealed.len()
        )));
    }

    // `EncryptionKeyPair` is only ever built from its scalar, so the public
    // key the primitive recomputes is the one the pair carries.
    let secret = crypto_box::SecretKey::from(*recipient_key_pair.private_key());
    secret.unseal(sealed).map_err(|_| {
        log::debug!("sealed box authentication failed for {} bytes", sealed.len());
        CryptoError::AuthenticationFailed("sealed box".into())
    })
}

/// Wrap an encryption private key for `recipient_public_key`.
///
/// The result is always `SEALED_ENCRYPTION_PRIVATE_KEY_SIZE` bytes.
pub fn seal_encryption_private_key(
    key_pair: &EncryptionKeyPair,
    recipient_public_key: &[u8],
) -> Result<Vec<u8>> {
    seal_encrypt(key_pair.private_key(), recipient_public_key)
}

/// Unwrap a key produced by [`seal_encryption_private_key`] and rebuild
/// its key pair.
pub fn unseal_encryption_private_key(
    sealed: &[u8],
    recipient_key_pair: &EncryptionKeyPair,
) -> Result<EncryptionKeyPair> {
    if sealed.len() != SEALED_ENCRYPTION_PRIVATE_KEY_SIZE {
        return Err(CryptoError::wrong_size(
            "sealed encryption private key",
            SEALED_ENCRYPTION_PRIVATE_KEY_SIZE,
            sealed.len(),
        ));
    }
    let private_key = Zeroizing::new(seal_decrypt(sealed, recipient_key_pair)?);
    derive_encryption_key_pair(&private_key)
}

/// Wrap a signature private key for `recipient_public_key`.
///
/// The result is always `SEALED_SIGNATURE_PRIVATE_KEY_SIZE` bytes.
pub fn seal_signature_private_key(
    key_pair: &SignatureKeyPair,
    recipient_public_key: &[u8],
) -> Result<Vec<u8>> {
    seal_encrypt(key_pair.private_key(), recipient_public_key)
}

/// Unwrap a key produced by [`seal_signature_private_key`].
pub fn unseal_signature_private_key(
    sealed: &[u8],
    recipient_key_pair: &EncryptionKeyPair,
) -> Result<SignatureKeyPair> {
    if sealed.len() != SEALED_SIGNATURE_PRIVATE_KEY_SIZE {
        return Err(CryptoError::wrong_size(
            "sealed signature private key",
            SEALED_SIGNATURE_PRIVATE_KEY_SIZE,
            sealed.len(),
        ));
    }
    let private_key = Zeroizing::new(seal_decrypt(sealed, recipient_key_pair)?);
    derive_signature_key_pair(&private_key)
}
