//! Ed25519 detached signatures.
//!
//! Signatures are 64 bytes and always travel separately from the message.

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use zeroize::Zeroize;

use crate::error::{fixed, CryptoError, Result};
use crate::sizes::{SIGNATURE_PRIVATE_KEY_SIZE, SIGNATURE_PUBLIC_KEY_SIZE, SIGNATURE_SIZE};

/// Sign `data` with a 64-byte `seed || public key` private key.
///
/// Ed25519 signing is deterministic: the same key and data always yield
/// the same signature. A private key whose public half does not belong
/// to its seed is rejected.
pub fn sign(data: &[u8], private_key: &[u8]) -> Result<[u8; SIGNATURE_SIZE]> {
    let mut keypair_bytes =
        fixed::<SIGNATURE_PRIVATE_KEY_SIZE>("signature private key", private_key)?;
    let signing_key = SigningKey::from_keypair_bytes(&keypair_bytes);
    keypair_bytes.zeroize();

    let signing_key = signing_key.map_err(|_| {
        CryptoError::PreconditionViolation(
            "signature private key does not end with its own public key".into(),
        )
    })?;
    Ok(signing_key.sign(data).to_bytes())
}

/// Verify a detached signature.
///
/// Returns `false` for any invalid signature, including signatures or
/// public keys of the wrong length or that do not decode. Never errors.
pub fn verify_signature(data: &[u8], signature: &[u8], public_key: &[u8]) -> bool {
    let Ok(signature) = Signature::from_slice(signature) else {
        return false;
    };
    let Ok(public_key) = <[u8; SIGNATURE_PUBLIC_KEY_SIZE]>::try_from(public_key) else {
        return false;
    };
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key) else {
        return false;
    };
    let valid = verifying_key.verify_strict(data, &signature).is_ok();
    if !valid {
        log::debug!("signature verification failed over {} bytes", data.len());
    }
    valid
}

/// Sign `data` and return the signature as a base64-encoded string.
pub fn sign_to_base64(data: &[u8], private_key: &[u8]) -> Result<String> {
    let signature = sign(data, private_key)?;
    Ok(base64::Engine::encode(
        &base64::engine::general_purpose::STANDARD,
        signature,
    ))
}

/// Verify a base64-encoded signature. Undecodable input is `false`.
pub fn verify_from_base64(data: &[u8], signature_b64: &str, public_key: &[u8]) -> bool {
    match base64::Engine::decode(&base64::engine::general_purpose::STANDARD, signature_b64) {
        Ok(signature) => verify_signature(data, &signature, public_key),
        Err(_) => false,
    }
}
