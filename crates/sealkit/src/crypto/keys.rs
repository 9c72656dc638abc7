//! X25519 encryption and Ed25519 signature key pairs.
//!
//! X25519 pairs are used for box and sealed-box encryption.
//! Ed25519 pairs are used for detached signatures.
//!
//! The two kinds have identical public key sizes, so they are kept as
//! distinct types (and a tagged [`KeyPair`] for mixed holders) instead of
//! bare byte tuples.

use ed25519_dalek::SigningKey;
use subtle::ConstantTimeEq;
use x25519_dalek::{PublicKey as X25519PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{fixed, Result};
use crate::sizes::{
    ENCRYPTION_PRIVATE_KEY_SIZE, ENCRYPTION_PUBLIC_KEY_SIZE, SIGNATURE_PRIVATE_KEY_SIZE,
    SIGNATURE_PUBLIC_KEY_SIZE, SIGNATURE_SEED_SIZE,
};

/// An X25519 key pair for box and sealed-box encryption.
///
/// The private scalar is zeroized on drop. Equality compares the private
/// scalar in constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EncryptionKeyPair {
    private_key: [u8; ENCRYPTION_PRIVATE_KEY_SIZE],
    #[zeroize(skip)]
    public_key: [u8; ENCRYPTION_PUBLIC_KEY_SIZE],
}

impl EncryptionKeyPair {
    fn from_scalar(private_key: [u8; ENCRYPTION_PRIVATE_KEY_SIZE]) -> Self {
        let secret = StaticSecret::from(private_key);
        let public_key = X25519PublicKey::from(&secret).to_bytes();
        Self {
            private_key,
            public_key,
        }
    }

    /// Return the private scalar.
    pub fn private_key(&self) -> &[u8; ENCRYPTION_PRIVATE_KEY_SIZE] {
        &self.private_key
    }

    /// Return the public point.
    pub fn public_key(&self) -> &[u8; ENCRYPTION_PUBLIC_KEY_SIZE] {
        &self.public_key
    }

    /// Return the public key as base64.
    pub fn public_key_base64(&self) -> String {
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, self.public_key)
    }
}

// The public key is a function of the scalar, so the scalar alone decides.
impl PartialEq for EncryptionKeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.private_key[..].ct_eq(&other.private_key[..]).into()
    }
}

impl Eq for EncryptionKeyPair {}

impl std::fmt::Debug for EncryptionKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionKeyPair")
            .field("public_key", &self.public_key_base64())
            .finish_non_exhaustive()
    }
}

/// An Ed25519 key pair for detached signatures.
///
/// Holds a single 64-byte private buffer laid out as `seed || public key`.
/// The public key is a read-only view of the last 32 bytes, so the two
/// halves can never drift apart. Zeroized on drop. Equality compares the
/// whole buffer in constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SignatureKeyPair {
    private_key: [u8; SIGNATURE_PRIVATE_KEY_SIZE],
}

impl SignatureKeyPair {
    /// Return the full 64-byte private key (`seed || public key`).
    pub fn private_key(&self) -> &[u8; SIGNATURE_PRIVATE_KEY_SIZE] {
        &self.private_key
    }

    /// Return the 32-byte seed half of the private key.
    pub fn seed(&self) -> &[u8] {
        &self.private_key[..SIGNATURE_SEED_SIZE]
    }

    /// Return the public key, the trailing 32 bytes of the private key.
    pub fn public_key(&self) -> &[u8] {
        &self.private_key[SIGNATURE_SEED_SIZE..]
    }

    /// Return the public key as a fixed-size array.
    pub fn public_key_bytes(&self) -> [u8; SIGNATURE_PUBLIC_KEY_SIZE] {
        let mut out = [0u8; SIGNATURE_PUBLIC_KEY_SIZE];
        out.copy_from_slice(self.public_key());
        out
    }

    /// Return the public key as base64.
    pub fn public_key_base64(&self) -> String {
        base64::Engine::encode(&base64::engine::general_purpose::STANDARD, self.public_key())
    }
}

impl PartialEq for SignatureKeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.private_key[..].ct_eq(&other.private_key[..]).into()
    }
}

impl Eq for SignatureKeyPair {}

impl std::fmt::Debug for SignatureKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureKeyPair")
            .field("public_key", &self.public_key_base64())
            .finish_non_exhaustive()
    }
}

/// Either kind of key pair, tagged so one cannot stand in for the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPair {
    Encryption(EncryptionKeyPair),
    Signature(SignatureKeyPair),
}

impl KeyPair {
    /// Return the private key bytes of either kind.
    pub fn private_key(&self) -> &[u8] {
        match self {
            Self::Encryption(kp) => kp.private_key().as_slice(),
            Self::Signature(kp) => kp.private_key().as_slice(),
        }
    }

    /// Return the public key bytes of either kind.
    pub fn public_key(&self) -> &[u8] {
        match self {
            Self::Encryption(kp) => kp.public_key().as_slice(),
            Self::Signature(kp) => kp.public_key(),
        }
    }

    /// Return the encryption pair, or `None` for a signature pair.
    pub fn as_encryption(&self) -> Option<&EncryptionKeyPair> {
        match self {
            Self::Encryption(kp) => Some(kp),
            Self::Signature(_) => None,
        }
    }

    /// Return the signature pair, or `None` for an encryption pair.
    pub fn as_signature(&self) -> Option<&SignatureKeyPair> {
        match self {
            Self::Signature(kp) => Some(kp),
            Self::Encryption(_) => None,
        }
    }
}

impl From<EncryptionKeyPair> for KeyPair {
    fn from(kp: EncryptionKeyPair) -> Self {
        Self::Encryption(kp)
    }
}

impl From<SignatureKeyPair> for KeyPair {
    fn from(kp: SignatureKeyPair) -> Self {
        Self::Signature(kp)
    }
}

/// Generate a new random Ed25519 signature key pair.
pub fn make_sign_key_pair() -> SignatureKeyPair {
    let signing_key = SigningKey::generate(&mut rand::thread_rng());
    log::trace!("generated signature key pair");
    SignatureKeyPair {
        private_key: signing_key.to_keypair_bytes(),
    }
}

/// Generate a new random X25519 encryption key pair.
pub fn make_encryption_key_pair() -> EncryptionKeyPair {
    let secret = StaticSecret::random_from_rng(rand::thread_rng());
    log::trace!("generated encryption key pair");
    EncryptionKeyPair::from_scalar(secret.to_bytes())
}

/// Rebuild an encryption key pair from its 32-byte private scalar.
///
/// The public key is `private_key · basepoint`; the result is deterministic.
pub fn derive_encryption_key_pair(private_key: &[u8]) -> Result<EncryptionKeyPair> {
    let scalar = fixed::<ENCRYPTION_PRIVATE_KEY_SIZE>("encryption private key", private_key)?;
    Ok(EncryptionKeyPair::from_scalar(scalar))
}

/// Rebuild a signature key pair from its 64-byte private key.
///
/// The buffer must already be `seed || public key`. The public key is read
/// from bytes `[32, 64)` and is NOT recomputed from the seed, so a buffer
/// whose halves disagree is accepted here and only rejected when used to
/// sign.
pub fn derive_signature_key_pair(private_key: &[u8]) -> Result<SignatureKeyPair> {
    let private_key = fixed::<SIGNATURE_PRIVATE_KEY_SIZE>("signature private key", private_key)?;
    Ok(SignatureKeyPair { private_key })
}
