//! Command-line interface for the single-block AES-128 engine.

#![forbid(unsafe_code)]

mod schedule;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, info};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::vectors::KNOWN_ANSWERS;
use rijndael_core::{block_from_slice, expand_key, Aes128, Block, RoundKeys, BLOCK_SIZE};
use zeroize::Zeroizing;

use crate::schedule::ScheduleFile;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "RIJNDAEL_LOG";

/// Single-block AES-128 CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "Single-block AES-128 (Rijndael) encrypt/decrypt"
)]
struct Cli {
    /// Raise log verbosity to debug. Overridden by RIJNDAEL_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

/// Where the round keys come from: a raw key or a saved schedule.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct KeySource {
    /// AES-128 key as 32 hex characters.
    #[arg(long, value_name = "HEX")]
    key_hex: Option<String>,
    /// Schedule file written by `expand --out`.
    #[arg(long, value_name = "FILE")]
    schedule: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one 16-byte block.
    Enc {
        #[command(flatten)]
        key: KeySource,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one 16-byte block.
    Dec {
        #[command(flatten)]
        key: KeySource,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the 176-byte expanded key, optionally saving it.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Output path for the serialized schedule.
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Run the known-answer vectors and random round-trips.
    Check {
        /// Number of random round-trips.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt and decrypt a random block, printing each state as a 4x4 grid.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Enc { key, block_hex } => cmd_enc(&key, &block_hex),
        Commands::Dec { key, block_hex } => cmd_dec(&key, &block_hex),
        Commands::Expand { key_hex, out } => cmd_expand(&key_hex, out.as_deref()),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_logging(verbose: u8) {
    let default_filter = if verbose == 0 { "warn" } else { "debug" };
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, default_filter))
        .format_timestamp(None)
        .init();
}

fn cmd_enc(key: &KeySource, block_hex: &str) -> Result<()> {
    let cipher = load_cipher(key)?;
    let mut block = parse_block_hex(block_hex)?;
    cipher.encrypt_block(&mut block);
    println!("{}", hex::encode(block));
    Ok(())
}

fn cmd_dec(key: &KeySource, block_hex: &str) -> Result<()> {
    let cipher = load_cipher(key)?;
    let mut block = parse_block_hex(block_hex)?;
    cipher.decrypt_block(&mut block);
    println!("{}", hex::encode(block));
    Ok(())
}

fn cmd_expand(key_hex: &str, out: Option<&Path>) -> Result<()> {
    let key = decode_hex(key_hex, "key")?;
    let round_keys = expand_key(&key).context("expand key")?;
    print!("{}", format_schedule(&round_keys));
    if let Some(path) = out {
        let bytes = ScheduleFile::new(&round_keys).to_bytes()?;
        fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
        info!("wrote schedule to {}", path.display());
    }
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    for kat in KNOWN_ANSWERS {
        let cipher = Aes128::new(&kat.key).context("vector key")?;
        let mut block = kat.plaintext;
        cipher.encrypt_block(&mut block);
        if block != kat.ciphertext {
            bail!(
                "{}: expected ciphertext {}, got {}",
                kat.source,
                hex::encode(kat.ciphertext),
                hex::encode(block)
            );
        }
        cipher.decrypt_block(&mut block);
        if block != kat.plaintext {
            bail!("{}: decryption did not recover the plaintext", kat.source);
        }
        debug!("{}: ok", kat.source);
    }

    let mut rng = seeded_rng(seed);
    for _ in 0..samples {
        let mut key = [0u8; 16];
        let mut block = [0u8; BLOCK_SIZE];
        rng.fill_bytes(&mut key);
        rng.fill_bytes(&mut block);
        let cipher = Aes128::new(&key)?;
        let mut state = block;
        cipher.encrypt_block(&mut state);
        cipher.decrypt_block(&mut state);
        if state != block {
            bail!(
                "round-trip mismatch for key {} block {}",
                hex::encode(key),
                hex::encode(block)
            );
        }
    }

    println!(
        "ok: {} known-answer vectors, {} random round-trips",
        KNOWN_ANSWERS.len(),
        samples
    );
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = [0u8; 16];
    let mut plaintext = [0u8; BLOCK_SIZE];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut plaintext);

    let cipher = Aes128::new(&key)?;
    let mut ciphertext = plaintext;
    cipher.encrypt_block(&mut ciphertext);
    let mut recovered = ciphertext;
    cipher.decrypt_block(&mut recovered);

    println!("key: {}", hex::encode(key));
    println!("\nexpanded key:");
    print!("{}", format_schedule(cipher.round_keys()));
    println!("\nplaintext:");
    print!("{}", format_state_grid(&plaintext));
    println!("\nciphertext:");
    print!("{}", format_state_grid(&ciphertext));
    println!("\nrecovered plaintext:");
    print!("{}", format_state_grid(&recovered));

    if recovered != plaintext {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn load_cipher(source: &KeySource) -> Result<Aes128> {
    match (&source.key_hex, &source.schedule) {
        (Some(key_hex), _) => {
            let key = decode_hex(key_hex, "key")?;
            Aes128::new(&key).context("key-hex")
        }
        (None, Some(path)) => {
            let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
            let file = ScheduleFile::from_bytes(&bytes)
                .with_context(|| format!("load schedule {}", path.display()))?;
            debug!("loaded schedule from {}", path.display());
            Ok(Aes128::from_round_keys(file.round_keys()))
        }
        (None, None) => bail!("either --key-hex or --schedule is required"),
    }
}

fn decode_hex(hex_str: &str, what: &str) -> Result<Zeroizing<Vec<u8>>> {
    hex::decode(hex_str.trim())
        .map(Zeroizing::new)
        .with_context(|| format!("decode {what} hex"))
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = decode_hex(hex_str, "block")?;
    block_from_slice(&bytes).context("block-hex")
}

/// One round key per line, space-separated hex bytes.
fn format_schedule(round_keys: &RoundKeys) -> String {
    let mut out = String::new();
    for round_key in round_keys.iter() {
        let line: Vec<String> = round_key.iter().map(|b| format!("{b:02x}")).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Renders a column-major block as four rows of the AES state.
fn format_state_grid(block: &Block) -> String {
    let mut out = String::new();
    for row in 0..4 {
        let line: Vec<String> = (0..4)
            .map(|col| format!("{:02x}", block[col * 4 + row]))
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
