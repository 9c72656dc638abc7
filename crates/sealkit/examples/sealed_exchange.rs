//! Sealed exchange: generate keys, sign, box, seal, and derive IVs.
//!
//! Run with:
//!   cargo run --example sealed_exchange -p sealkit

use sealkit::crypto::seal::{seal_encryption_private_key, unseal_encryption_private_key};
use sealkit::sizes::SEALED_ENCRYPTION_PRIVATE_KEY_SIZE;
use sealkit::{
    decrypt, derive_iv, encrypt, make_encryption_key_pair, make_sign_key_pair, seal_decrypt,
    seal_encrypt, sign, verify_signature,
};

fn main() -> sealkit::Result<()> {
    // ── 1. Key pairs ────────────────────────────────────────────────────────
    let alice = make_encryption_key_pair();
    let bob = make_encryption_key_pair();
    let alice_signer = make_sign_key_pair();

    println!("Key pairs");
    println!("  Alice (box):  {}", alice.public_key_base64());
    println!("  Bob (box):    {}", bob.public_key_base64());
    println!("  Alice (sign): {}", alice_signer.public_key_base64());
    println!();

    // ── 2. Detached signature ───────────────────────────────────────────────
    let note = b"Invoice #2291 approved";
    let signature = sign(note, alice_signer.private_key())?;
    println!("Signature over {:?}", String::from_utf8_lossy(note));
    println!("  {}", hex::encode(signature));
    println!(
        "  Verified: {}",
        verify_signature(note, &signature, alice_signer.public_key())
    );
    println!();

    // ── 3. Box: Alice -> Bob ────────────────────────────────────────────────
    let boxed = encrypt(note, bob.public_key(), alice.private_key())?;
    let opened = decrypt(&boxed, alice.public_key(), bob.private_key())?;
    println!("Box");
    println!("  {} plaintext bytes -> {} boxed bytes", note.len(), boxed.len());
    println!("  Opened: {:?}", String::from_utf8_lossy(&opened));
    println!();

    // ── 4. Sealed box: anonymous -> Bob ─────────────────────────────────────
    let sealed = seal_encrypt(b"anonymous feedback", bob.public_key())?;
    let unsealed = seal_decrypt(&sealed, &bob)?;
    println!("Sealed box");
    println!("  {} bytes, opened: {:?}", sealed.len(), String::from_utf8_lossy(&unsealed));
    println!();

    // ── 5. Wrapped private key ──────────────────────────────────────────────
    let wrapped = seal_encryption_private_key(&alice, bob.public_key())?;
    assert_eq!(wrapped.len(), SEALED_ENCRYPTION_PRIVATE_KEY_SIZE);
    let recovered = unseal_encryption_private_key(&wrapped, &bob)?;
    println!("Wrapped Alice's private key for Bob ({} bytes)", wrapped.len());
    println!("  Recovered public key matches: {}", recovered == alice);
    println!();

    // ── 6. Deterministic IVs ────────────────────────────────────────────────
    let seed = [0u8; 32];
    println!("IV stream from a zero seed");
    for index in 0..3 {
        println!("  #{index}: {}", hex::encode(derive_iv(&seed, index)));
    }

    Ok(())
}
