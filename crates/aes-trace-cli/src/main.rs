//! Command-line interface for `aes-trace`.

#![forbid(unsafe_code)]

mod render;

use aes_trace::codec::{bytes_to_hex, parse_block_hex};
use aes_trace::{encrypt_with_trace, expand_key, Aes128Key, Block, Input, Trace};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const FIPS_PLAINTEXT: &str = "00112233445566778899aabbccddeeff";
const FIPS_KEY: &str = "000102030405060708090a0b0c0d0e0f";
const FIPS_CIPHER: &str = "69c4e0d86a7b0430d8cdb78070b4c55a";

/// AES-128 round-by-round visualizer.
#[derive(Parser)]
#[command(
    name = "aesviz",
    version,
    author,
    about = "Show every AES-128 round transformation for one block"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one block and print the state after every step.
    Trace {
        /// Plaintext as 32 hex characters (non-hex characters are ignored).
        #[arg(long, value_name = "HEX", env = "AESVIZ_PLAINTEXT", default_value = FIPS_PLAINTEXT)]
        plaintext: String,
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX", env = "AESVIZ_KEY", default_value = FIPS_KEY)]
        key: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the 11 round keys derived from a key.
    Keys {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX", env = "AESVIZ_KEY", default_value = FIPS_KEY)]
        key: String,
    },
    /// Trace a randomly generated plaintext and key.
    Sample {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check the FIPS-197 Appendix C.1 vector.
    Verify,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    /// Show only this round (0..=10).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    round: Option<u8>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Trace {
            plaintext,
            key,
            output,
        } => cmd_trace(&plaintext, &key, &output),
        Commands::Keys { key } => cmd_keys(&key),
        Commands::Sample { seed, output } => cmd_sample(seed, &output),
        Commands::Verify => cmd_verify(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_trace(plaintext_hex: &str, key_hex: &str, output: &OutputArgs) -> Result<()> {
    let plaintext = parse_block_hex(plaintext_hex, Input::Plaintext)?;
    let key = parse_block_hex(key_hex, Input::Key)?;
    show_trace(&plaintext, &key, output)
}

fn cmd_keys(key_hex: &str) -> Result<()> {
    let key = Aes128Key::from(parse_block_hex(key_hex, Input::Key)?);
    print!("{}", render::round_keys(&expand_key(&key)));
    Ok(())
}

fn cmd_sample(seed: Option<u64>, output: &OutputArgs) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut plaintext = [0u8; 16];
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut plaintext);
    rng.fill_bytes(&mut key);
    info!(seed = ?seed, "generated random sample");
    println!("plaintext: {}", hex::encode(plaintext));
    println!("key: {}", hex::encode(key));
    show_trace(&plaintext, &key, output)
}

fn cmd_verify() -> Result<()> {
    let plaintext = parse_block_hex(FIPS_PLAINTEXT, Input::Plaintext)?;
    let key = parse_block_hex(FIPS_KEY, Input::Key)?;
    let trace = encrypt_with_trace(&plaintext, &key)?;
    let actual = bytes_to_hex(trace.cipher_state(), "");

    println!("plaintext: {FIPS_PLAINTEXT}");
    println!("key:       {FIPS_KEY}");
    println!("expected:  {FIPS_CIPHER}");
    println!("actual:    {actual}");
    if actual != FIPS_CIPHER {
        bail!("FIPS-197 vector mismatch");
    }
    println!("result: success");
    Ok(())
}

fn show_trace(plaintext: &Block, key: &Block, output: &OutputArgs) -> Result<()> {
    let trace = encrypt_with_trace(plaintext, key)?;
    debug!(operations = trace.operation_count(), "trace ready");

    match output.round {
        Some(index) => show_round(&trace, usize::from(index), output.format),
        None => {
            match output.format {
                Format::Text => print!("{}", render::trace(plaintext, &trace)),
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&trace).context("serialize trace")?
                ),
            }
            Ok(())
        }
    }
}

fn show_round(trace: &Trace, index: usize, format: Format) -> Result<()> {
    let Some(round) = trace.round(index) else {
        bail!("round {index} out of range (0..=10)");
    };
    match format {
        Format::Text => print!("{}", render::round(round)),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(round).context("serialize round")?
        ),
    }
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => ChaCha20Rng::seed_from_u64(value),
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
