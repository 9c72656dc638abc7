//! Fixed byte lengths shared by every primitive.
//!
//! These values are the wire-compatibility surface: ciphertexts and keys
//! produced elsewhere are only interoperable if they agree on them.

/// IV length of the XChaCha20-Poly1305 stream cipher.
pub const XCHACHA_IV_SIZE: usize = 24;

/// Seed half of an Ed25519 private key.
pub const SIGNATURE_SEED_SIZE: usize = 32;

pub const SYMMETRIC_KEY_SIZE: usize = 32;
pub const SIGNATURE_PUBLIC_KEY_SIZE: usize = 32;
/// Seed followed by the public key.
pub const SIGNATURE_PRIVATE_KEY_SIZE: usize = 64;
pub const ENCRYPTION_PUBLIC_KEY_SIZE: usize = 32;
pub const ENCRYPTION_PRIVATE_KEY_SIZE: usize = 32;
pub const SIGNATURE_SIZE: usize = 64;
pub const MAC_SIZE: usize = 16;
pub const SYMMETRIC_ENCRYPTION_OVERHEAD: usize = XCHACHA_IV_SIZE + MAC_SIZE;
pub const HASH_SIZE: usize = 32;

/// Ephemeral public key plus MAC prepended by a sealed box.
pub const SEAL_OVERHEAD: usize = MAC_SIZE + ENCRYPTION_PUBLIC_KEY_SIZE;

/// An encryption private key wrapped in a sealed box.
pub const SEALED_ENCRYPTION_PRIVATE_KEY_SIZE: usize = 80;
/// A signature private key wrapped in a sealed box.
pub const SEALED_SIGNATURE_PRIVATE_KEY_SIZE: usize = 112;
