//! Concurrency test: parallel signing, boxing, and sealing.
//!
//! All operations are stateless, so threads sharing one key pair must
//! produce results that verify and decrypt exactly as single-threaded ones.

use std::sync::{Arc, Mutex};
use std::thread;

use sealkit::{
    decrypt, encrypt, make_encryption_key_pair, make_sign_key_pair, seal_decrypt, seal_encrypt,
    sign, verify_signature,
};

#[test]
fn stress_16_concurrent_signers() {
    let key_pair = Arc::new(make_sign_key_pair());
    let signatures = Arc::new(Mutex::new(Vec::new()));

    let mut handles = Vec::new();
    for thread_id in 0..16 {
        let key_pair = Arc::clone(&key_pair);
        let signatures = Arc::clone(&signatures);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                let message = format!("thread {thread_id} message {i}").into_bytes();
                let signature = sign(&message, key_pair.private_key()).expect("sign");
                signatures.lock().unwrap().push((message, signature));
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    let signatures = signatures.lock().unwrap();
    assert_eq!(signatures.len(), 1_600);
    for (message, signature) in signatures.iter() {
        assert!(verify_signature(message, signature, key_pair.public_key()));
    }
}

#[test]
fn stress_1000_sequential_signs_are_deterministic() {
    let key_pair = make_sign_key_pair();
    for i in 0..1000 {
        let message = format!("operation {i}");
        let a = sign(message.as_bytes(), key_pair.private_key()).unwrap();
        let b = sign(message.as_bytes(), key_pair.private_key()).unwrap();
        assert_eq!(a, b, "signature {i} should be deterministic");
    }
}

#[test]
fn stress_concurrent_box_and_seal() {
    let alice = Arc::new(make_encryption_key_pair());
    let bob = Arc::new(make_encryption_key_pair());

    let handles: Vec<_> = (0..8)
        .map(|thread_id| {
            let alice = Arc::clone(&alice);
            let bob = Arc::clone(&bob);
            thread::spawn(move || {
                for i in 0..50 {
                    let message = format!("t{thread_id}-m{i}").into_bytes();

                    let boxed = encrypt(&message, bob.public_key(), alice.private_key()).unwrap();
                    let opened = decrypt(&boxed, alice.public_key(), bob.private_key()).unwrap();
                    assert_eq!(opened, message);

                    let sealed = seal_encrypt(&message, bob.public_key()).unwrap();
                    assert_eq!(seal_decrypt(&sealed, &bob).unwrap(), message);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
