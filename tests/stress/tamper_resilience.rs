//! Resilience tests: every single-bit flip in a box, sealed box, symmetric
//! ciphertext, or signature must be rejected.

use sealkit::crypto::aead::{decrypt_with_iv_prefix, encrypt_with_random_iv, make_symmetric_key};
use sealkit::{
    decrypt, encrypt, make_encryption_key_pair, make_sign_key_pair, seal_decrypt, seal_encrypt,
    sign, verify_signature,
};

fn flip_every_bit(data: &[u8], mut rejected: impl FnMut(&[u8]) -> bool) {
    for byte in 0..data.len() {
        for bit in 0..8 {
            let mut tampered = data.to_vec();
            tampered[byte] ^= 1 << bit;
            assert!(rejected(&tampered), "flip of bit {bit} in byte {byte} accepted");
        }
    }
}

#[test]
fn resilience_box_bit_flips() {
    let alice = make_encryption_key_pair();
    let bob = make_encryption_key_pair();
    let boxed = encrypt(b"integrity matters", bob.public_key(), alice.private_key()).unwrap();

    flip_every_bit(&boxed, |tampered| {
        decrypt(tampered, alice.public_key(), bob.private_key())
            .map_err(|e| e.is_authentication())
            .err()
            .unwrap_or(false)
    });
}

#[test]
fn resilience_sealed_box_bit_flips() {
    let bob = make_encryption_key_pair();
    let sealed = seal_encrypt(b"integrity matters", bob.public_key()).unwrap();

    flip_every_bit(&sealed, |tampered| {
        seal_decrypt(tampered, &bob)
            .map_err(|e| e.is_authentication())
            .err()
            .unwrap_or(false)
    });
}

#[test]
fn resilience_symmetric_bit_flips() {
    let key = make_symmetric_key();
    let encrypted = encrypt_with_random_iv(&key, b"integrity matters", b"ad").unwrap();

    flip_every_bit(&encrypted, |tampered| {
        decrypt_with_iv_prefix(&key, tampered, b"ad").is_err()
    });
}

#[test]
fn resilience_signature_bit_flips() {
    let kp = make_sign_key_pair();
    let message = b"integrity matters";
    let signature = sign(message, kp.private_key()).unwrap();

    flip_every_bit(&signature, |tampered| {
        !verify_signature(message, tampered, kp.public_key())
    });
    flip_every_bit(message, |tampered| {
        !verify_signature(tampered, &signature, kp.public_key())
    });
}
