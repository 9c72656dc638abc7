//! Cryptographic operations for sealkit.
//!
//! This module provides:
//! - X25519 encryption and Ed25519 signature key pairs
//! - Authenticated public-key encryption (box)
//! - Anonymous sealed boxes and private-key wrapping
//! - Ed25519 detached signatures
//! - Deterministic IV derivation
//! - XChaCha20-Poly1305 symmetric encryption
//! - BLAKE2b generic hashing
//! - Cryptographically secure random number generation

pub mod aead;
pub mod derivation;
pub mod encryption;
pub mod hash;
pub mod keys;
pub mod random;
pub mod seal;
pub mod signing;
