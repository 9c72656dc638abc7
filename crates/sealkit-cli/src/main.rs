//! Sealkit CLI: the `sealkit` command.
//!
//! Thin command-line front end over the sealkit library: generate and
//! derive key pairs, sign and verify, box and sealed-box encryption, and
//! deterministic IV derivation. Keys and binary outputs are base64.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use sealkit::{
    decrypt, derive_encryption_key_pair, derive_iv, derive_signature_key_pair, encrypt,
    make_encryption_key_pair, make_sign_key_pair, seal_decrypt, seal_encrypt, sign,
    verify_signature, KeyPair,
};

// ── CLI structure ─────────────────────────────────────────────────────────────

/// Sealkit CLI: key pairs, signatures, and sealed boxes from the shell.
#[derive(Parser, Debug)]
#[command(
    name = "sealkit",
    about = "Sealkit CLI",
    version,
    long_about = "sealkit: box, sealed-box, and signature operations\n\nKeys are passed and printed as base64. Data is read from --input or stdin."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum KeyKind {
    /// X25519 key pair for box and sealed-box encryption
    Encryption,
    /// Ed25519 key pair for detached signatures
    Signature,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a new key pair and print it as JSON
    Keygen {
        #[arg(long, value_enum)]
        kind: KeyKind,
    },

    /// Print the public key belonging to a private key
    PublicKey {
        #[arg(long, value_enum)]
        kind: KeyKind,
        /// Private key (base64)
        #[arg(long)]
        private_key: String,
    },

    /// Produce a detached signature over the input
    Sign {
        /// 64-byte signature private key (base64)
        #[arg(long)]
        private_key: String,
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Verify a detached signature over the input
    Verify {
        /// Signature public key (base64)
        #[arg(long)]
        public_key: String,
        /// Signature (base64)
        #[arg(long)]
        signature: String,
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Box-encrypt the input from a sender to a recipient
    Encrypt {
        /// Recipient encryption public key (base64)
        #[arg(long)]
        recipient: String,
        /// Sender encryption private key (base64)
        #[arg(long)]
        sender_private_key: String,
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Open a box produced by `encrypt` (input is base64)
    Decrypt {
        /// Sender encryption public key (base64)
        #[arg(long)]
        sender: String,
        /// Recipient encryption private key (base64)
        #[arg(long)]
        private_key: String,
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Anonymously seal the input for a recipient
    Seal {
        /// Recipient encryption public key (base64)
        #[arg(long)]
        recipient: String,
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Open a sealed box (input is base64)
    Unseal {
        /// Recipient encryption private key (base64)
        #[arg(long)]
        private_key: String,
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Derive the IV at INDEX of the stream defined by SEED
    DeriveIv {
        /// Seed (hex)
        #[arg(long)]
        seed: String,
        #[arg(long)]
        index: u64,
    },
}

#[derive(Serialize)]
struct KeyPairOutput {
    kind: &'static str,
    public_key: String,
    private_key: String,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn decode_b64(label: &str, value: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(value.trim())
        .with_context(|| format!("{label} is not valid base64"))
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    match path {
        Some(path) => {
            data = std::fs::read(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
        None => {
            std::io::stdin()
                .read_to_end(&mut data)
                .context("failed to read stdin")?;
        }
    }
    log::debug!("read {} input bytes", data.len());
    Ok(data)
}

fn read_b64_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    let raw = read_input(path)?;
    let text = String::from_utf8(raw).context("input is not base64 text")?;
    decode_b64("input", &text)
}

fn write_raw(data: &[u8]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(data).context("failed to write stdout")?;
    stdout.flush().context("failed to flush stdout")
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Keygen { kind } => cmd_keygen(kind),
        Commands::PublicKey { kind, private_key } => cmd_public_key(kind, &private_key),
        Commands::Sign { private_key, input } => cmd_sign(&private_key, input.as_ref()),
        Commands::Verify {
            public_key,
            signature,
            input,
        } => cmd_verify(&public_key, &signature, input.as_ref()),
        Commands::Encrypt {
            recipient,
            sender_private_key,
            input,
        } => cmd_encrypt(&recipient, &sender_private_key, input.as_ref()),
        Commands::Decrypt {
            sender,
            private_key,
            input,
        } => cmd_decrypt(&sender, &private_key, input.as_ref()),
        Commands::Seal { recipient, input } => cmd_seal(&recipient, input.as_ref()),
        Commands::Unseal { private_key, input } => cmd_unseal(&private_key, input.as_ref()),
        Commands::DeriveIv { seed, index } => cmd_derive_iv(&seed, index),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

// ── Command implementations ───────────────────────────────────────────────────

/// `sealkit keygen --kind KIND`
fn cmd_keygen(kind: KeyKind) -> Result<()> {
    let key_pair: KeyPair = match kind {
        KeyKind::Encryption => make_encryption_key_pair().into(),
        KeyKind::Signature => make_sign_key_pair().into(),
    };
    let output = KeyPairOutput {
        kind: match kind {
            KeyKind::Encryption => "encryption",
            KeyKind::Signature => "signature",
        },
        public_key: STANDARD.encode(key_pair.public_key()),
        private_key: STANDARD.encode(key_pair.private_key()),
    };
    log::info!("generated {} key pair", output.kind);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// `sealkit public-key --kind KIND --private-key KEY`
fn cmd_public_key(kind: KeyKind, private_key: &str) -> Result<()> {
    let private_key = decode_b64("private key", private_key)?;
    let public_key = match kind {
        KeyKind::Encryption => derive_encryption_key_pair(&private_key)?.public_key_base64(),
        KeyKind::Signature => derive_signature_key_pair(&private_key)?.public_key_base64(),
    };
    println!("{public_key}");
    Ok(())
}

/// `sealkit sign --private-key KEY [--input FILE]`
fn cmd_sign(private_key: &str, input: Option<&PathBuf>) -> Result<()> {
    let private_key = decode_b64("private key", private_key)?;
    let data = read_input(input)?;
    let signature = sign(&data, &private_key).context("signing failed")?;
    println!("{}", STANDARD.encode(signature));
    Ok(())
}

/// `sealkit verify --public-key KEY --signature SIG [--input FILE]`
fn cmd_verify(public_key: &str, signature: &str, input: Option<&PathBuf>) -> Result<()> {
    let public_key = decode_b64("public key", public_key)?;
    let signature = decode_b64("signature", signature)?;
    let data = read_input(input)?;
    if !verify_signature(&data, &signature, &public_key) {
        return Err(anyhow!("signature is INVALID"));
    }
    println!("signature is valid");
    Ok(())
}

/// `sealkit encrypt --recipient KEY --sender-private-key KEY [--input FILE]`
fn cmd_encrypt(recipient: &str, sender_private_key: &str, input: Option<&PathBuf>) -> Result<()> {
    let recipient = decode_b64("recipient public key", recipient)?;
    let sender_private_key = decode_b64("sender private key", sender_private_key)?;
    let data = read_input(input)?;
    let boxed = encrypt(&data, &recipient, &sender_private_key).context("encryption failed")?;
    println!("{}", STANDARD.encode(boxed));
    Ok(())
}

/// `sealkit decrypt --sender KEY --private-key KEY [--input FILE]`
fn cmd_decrypt(sender: &str, private_key: &str, input: Option<&PathBuf>) -> Result<()> {
    let sender = decode_b64("sender public key", sender)?;
    let private_key = decode_b64("private key", private_key)?;
    let boxed = read_b64_input(input)?;
    let clear = decrypt(&boxed, &sender, &private_key).context("decryption failed")?;
    write_raw(&clear)
}

/// `sealkit seal --recipient KEY [--input FILE]`
fn cmd_seal(recipient: &str, input: Option<&PathBuf>) -> Result<()> {
    let recipient = decode_b64("recipient public key", recipient)?;
    let data = read_input(input)?;
    let sealed = seal_encrypt(&data, &recipient).context("sealing failed")?;
    println!("{}", STANDARD.encode(sealed));
    Ok(())
}

/// `sealkit unseal --private-key KEY [--input FILE]`
fn cmd_unseal(private_key: &str, input: Option<&PathBuf>) -> Result<()> {
    let private_key = decode_b64("private key", private_key)?;
    let recipient = derive_encryption_key_pair(&private_key)?;
    let sealed = read_b64_input(input)?;
    let clear = seal_decrypt(&sealed, &recipient).context("unsealing failed")?;
    write_raw(&clear)
}

/// `sealkit derive-iv --seed HEX --index N`
fn cmd_derive_iv(seed: &str, index: u64) -> Result<()> {
    let seed = hex::decode(seed.trim()).context("seed is not valid hex")?;
    println!("{}", hex::encode(derive_iv(&seed, index)));
    Ok(())
}
