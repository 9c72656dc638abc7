//! Edge case tests: wrong buffer sizes, empty and large payloads, key-kind
//! confusion, and the exported size contract.

use sealkit::crypto::aead::{decrypt_with_iv_prefix, encrypt_with_random_iv, make_symmetric_key};
use sealkit::crypto::encryption::BOX_OVERHEAD;
use sealkit::crypto::seal::{seal_encryption_private_key, unseal_encryption_private_key};
use sealkit::sizes::*;
use sealkit::{
    decrypt, derive_encryption_key_pair, derive_signature_key_pair, encrypt,
    make_encryption_key_pair, make_sign_key_pair, seal_decrypt, seal_encrypt, sign,
    verify_signature, CryptoError, KeyPair,
};

fn is_precondition(result: sealkit::Result<impl std::fmt::Debug>) -> bool {
    matches!(result, Err(CryptoError::PreconditionViolation(_)))
}

// === Size contract ===

#[test]
fn edge_size_constants_match_wire_contract() {
    assert_eq!(XCHACHA_IV_SIZE, 24);
    assert_eq!(SYMMETRIC_KEY_SIZE, 32);
    assert_eq!(SIGNATURE_PUBLIC_KEY_SIZE, 32);
    assert_eq!(SIGNATURE_PRIVATE_KEY_SIZE, 64);
    assert_eq!(ENCRYPTION_PUBLIC_KEY_SIZE, 32);
    assert_eq!(ENCRYPTION_PRIVATE_KEY_SIZE, 32);
    assert_eq!(SIGNATURE_SIZE, 64);
    assert_eq!(MAC_SIZE, 16);
    assert_eq!(SYMMETRIC_ENCRYPTION_OVERHEAD, 40);
    assert_eq!(HASH_SIZE, 32);
    assert_eq!(SEAL_OVERHEAD, 48);
    assert_eq!(SEALED_ENCRYPTION_PRIVATE_KEY_SIZE, 80);
    assert_eq!(SEALED_SIGNATURE_PRIVATE_KEY_SIZE, 112);
}

// === Preconditions ===

#[test]
fn edge_31_byte_private_key_is_rejected() {
    assert!(is_precondition(derive_encryption_key_pair(&[1u8; 31])));
    assert!(is_precondition(derive_signature_key_pair(&[1u8; 63])));
}

#[test]
fn edge_signature_private_key_passed_to_box() {
    let signer = make_sign_key_pair();
    let bob = make_encryption_key_pair();
    assert!(is_precondition(encrypt(
        b"x",
        bob.public_key(),
        signer.private_key()
    )));
}

#[test]
fn edge_encryption_private_key_passed_to_sign() {
    let kp = make_encryption_key_pair();
    assert!(is_precondition(sign(b"x", kp.private_key())));
}

#[test]
fn edge_tagged_key_pair_keeps_kinds_apart() {
    let pairs: Vec<KeyPair> = vec![
        make_encryption_key_pair().into(),
        make_sign_key_pair().into(),
    ];
    let encryption = pairs.iter().filter_map(KeyPair::as_encryption).count();
    let signature = pairs.iter().filter_map(KeyPair::as_signature).count();
    assert_eq!((encryption, signature), (1, 1));
}

// === Payload sizes ===

#[test]
fn edge_empty_payloads() {
    let alice = make_encryption_key_pair();
    let bob = make_encryption_key_pair();
    let signer = make_sign_key_pair();

    let boxed = encrypt(b"", bob.public_key(), alice.private_key()).unwrap();
    assert_eq!(boxed.len(), BOX_OVERHEAD);
    assert!(decrypt(&boxed, alice.public_key(), bob.private_key())
        .unwrap()
        .is_empty());

    let sealed = seal_encrypt(b"", bob.public_key()).unwrap();
    assert_eq!(sealed.len(), SEAL_OVERHEAD);
    assert!(seal_decrypt(&sealed, &bob).unwrap().is_empty());

    let sig = sign(b"", signer.private_key()).unwrap();
    assert!(verify_signature(b"", &sig, signer.public_key()));

    let key = make_symmetric_key();
    let encrypted = encrypt_with_random_iv(&key, b"", b"").unwrap();
    assert_eq!(encrypted.len(), SYMMETRIC_ENCRYPTION_OVERHEAD);
    assert!(decrypt_with_iv_prefix(&key, &encrypted, b"").unwrap().is_empty());
}

#[test]
fn edge_one_megabyte_payloads() {
    let payload = vec![0xA5u8; 1 << 20];
    let alice = make_encryption_key_pair();
    let bob = make_encryption_key_pair();

    let boxed = encrypt(&payload, bob.public_key(), alice.private_key()).unwrap();
    assert_eq!(boxed.len(), payload.len() + BOX_OVERHEAD);
    assert_eq!(
        decrypt(&boxed, alice.public_key(), bob.private_key()).unwrap(),
        payload
    );

    let sealed = seal_encrypt(&payload, bob.public_key()).unwrap();
    assert_eq!(sealed.len(), payload.len() + SEAL_OVERHEAD);
    assert_eq!(seal_decrypt(&sealed, &bob).unwrap(), payload);
}

// === Truncation ===

#[test]
fn edge_truncated_ciphertexts_fail_authentication() {
    let alice = make_encryption_key_pair();
    let bob = make_encryption_key_pair();
    let boxed = encrypt(b"truncate me", bob.public_key(), alice.private_key()).unwrap();
    let sealed = seal_encrypt(b"truncate me", bob.public_key()).unwrap();

    for cut in 0..boxed.len() {
        let err = decrypt(&boxed[..cut], alice.public_key(), bob.private_key()).unwrap_err();
        assert!(err.is_authentication(), "box cut at {cut}");
    }
    for cut in 0..sealed.len() {
        let err = seal_decrypt(&sealed[..cut], &bob).unwrap_err();
        assert!(err.is_authentication(), "sealed box cut at {cut}");
    }
}

// === Wrapped keys ===

#[test]
fn edge_wrapped_key_recovers_usable_pair() {
    let owner = make_encryption_key_pair();
    let inner = make_encryption_key_pair();
    let wrapped = seal_encryption_private_key(&inner, owner.public_key()).unwrap();
    assert_eq!(wrapped.len(), SEALED_ENCRYPTION_PRIVATE_KEY_SIZE);

    let recovered = unseal_encryption_private_key(&wrapped, &owner).unwrap();
    let sealed = seal_encrypt(b"to inner", inner.public_key()).unwrap();
    assert_eq!(seal_decrypt(&sealed, &recovered).unwrap(), b"to inner");
}
