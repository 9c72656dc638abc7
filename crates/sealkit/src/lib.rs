//! Sealkit: a stateless facade over audited crypto primitives.
//!
//! Key-pair generation and derivation, authenticated public-key
//! encryption, anonymous sealed boxes, detached signatures, and
//! deterministic IV derivation. Callers work with byte buffers and
//! typed key pairs; the curve, cipher, and hash choices stay here.
//!
//! ```
//! use sealkit::{make_encryption_key_pair, seal_decrypt, seal_encrypt};
//!
//! let recipient = make_encryption_key_pair();
//! let sealed = seal_encrypt(b"hello", recipient.public_key()).unwrap();
//! assert_eq!(seal_decrypt(&sealed, &recipient).unwrap(), b"hello");
//! ```

pub mod crypto;
pub mod error;
pub mod sizes;

// Re-export primary types
pub use error::{CryptoError, Result};

pub use crypto::keys::{
    derive_encryption_key_pair, derive_signature_key_pair, make_encryption_key_pair,
    make_sign_key_pair, EncryptionKeyPair, KeyPair, SignatureKeyPair,
};

pub use crypto::encryption::{decrypt, encrypt};
pub use crypto::seal::{seal_decrypt, seal_encrypt};
pub use crypto::signing::{sign, verify_signature};
pub use crypto::derivation::derive_iv;
