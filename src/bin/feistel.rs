//! feistel CLI - command-line front end for the feistelcrypt cipher.
//!
//! Provides commands for:
//! - Running the round-trip demonstration
//! - Encrypting text to hex ciphertext
//! - Decrypting hex ciphertext back to text

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use feistelcrypt::{FeistelCipher, DEFAULT_ROUNDS};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const DEMO_KEY: &str = "MySecretKey123456";
const DEMO_MESSAGE: &str = "Hello, World! This is a test message for Feistel cipher.";
const DEMO_BLOCK: &[u8; 8] = b"ABCDEFGH";

/// Educational Feistel block cipher.
#[derive(Parser)]
#[command(name = "feistel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Key and round count shared by every command.
#[derive(Args)]
struct CipherConfig {
    /// Master key (any non-empty string)
    #[arg(short, long, env = "FEISTEL_KEY")]
    key: String,

    /// Number of Feistel rounds
    #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
    rounds: usize,
}

impl CipherConfig {
    fn build(&self) -> Result<FeistelCipher> {
        FeistelCipher::new(self.key.as_bytes(), self.rounds).context("Failed to initialize cipher")
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message, decrypt it again and check the round trip
    Demo {
        /// Master key
        #[arg(short, long, default_value = DEMO_KEY)]
        key: String,

        /// Number of Feistel rounds
        #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
        rounds: usize,

        /// Message to encrypt
        #[arg(short, long, default_value = DEMO_MESSAGE)]
        message: String,
    },

    /// Encrypt text and print the ciphertext as hex
    Encrypt {
        #[command(flatten)]
        config: CipherConfig,

        /// Plaintext to encrypt
        plaintext: String,
    },

    /// Decrypt hex ciphertext and print the plaintext
    Decrypt {
        #[command(flatten)]
        config: CipherConfig,

        /// Hex-encoded ciphertext
        ciphertext: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")?;

    match cli.command {
        Commands::Demo {
            key,
            rounds,
            message,
        } => cmd_demo(CipherConfig { key, rounds }, &message),

        Commands::Encrypt { config, plaintext } => cmd_encrypt(&config, &plaintext),

        Commands::Decrypt { config, ciphertext } => cmd_decrypt(&config, &ciphertext),
    }
}

fn cmd_demo(config: CipherConfig, message: &str) -> Result<ExitCode> {
    let cipher = config.build()?;
    let plaintext = message.as_bytes();

    println!("{}", "=".repeat(50));
    println!("Feistel network demonstration, {} rounds", cipher.rounds());
    println!("Round function: 3-bit right rotation + XOR");
    println!("{}", "=".repeat(50));

    println!("Key: {:?}", config.key);
    println!("Plaintext: {:?}", message);
    println!("Plaintext length: {} bytes", plaintext.len());
    println!();

    let encrypted = cipher.encrypt(plaintext);
    println!("Ciphertext (hex): {}", hex::encode(&encrypted));
    println!("Ciphertext length: {} bytes", encrypted.len());
    println!();

    let decrypted = cipher.decrypt(&encrypted).context("Failed to decrypt demo ciphertext")?;
    println!("Decrypted: {:?}", String::from_utf8_lossy(&decrypted));
    println!();

    let message_ok = decrypted == plaintext;
    if message_ok {
        println!("OK: message round trip succeeded");
    } else {
        println!("FAILED: decrypted message differs from the original");
    }
    println!();

    println!("Single block ({} bytes):", DEMO_BLOCK.len());
    println!("{}", "-".repeat(30));
    println!("Block: {:?}", String::from_utf8_lossy(DEMO_BLOCK));

    let encrypted_block = cipher.encrypt_block(DEMO_BLOCK);
    println!("Encrypted block (hex): {}", hex::encode(encrypted_block));

    let decrypted_block = cipher.decrypt_block(&encrypted_block);
    println!("Decrypted block: {:?}", String::from_utf8_lossy(&decrypted_block));

    let block_ok = &decrypted_block == DEMO_BLOCK;
    if block_ok {
        println!("OK: block round trip succeeded");
    } else {
        println!("FAILED: decrypted block differs from the original");
    }

    info!(message_ok, block_ok, "demo finished");
    Ok(if message_ok && block_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn cmd_encrypt(config: &CipherConfig, plaintext: &str) -> Result<ExitCode> {
    let cipher = config.build()?;
    let ciphertext = cipher.encrypt(plaintext.as_bytes());
    info!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "encrypted"
    );
    println!("{}", hex::encode(ciphertext));
    Ok(ExitCode::SUCCESS)
}

fn cmd_decrypt(config: &CipherConfig, ciphertext: &str) -> Result<ExitCode> {
    let cipher = config.build()?;
    let bytes = hex::decode(ciphertext.trim()).context("Ciphertext is not valid hex")?;
    let outcome = cipher
        .decrypt_detailed(&bytes)
        .context("Failed to decrypt ciphertext")?;
    info!(padding_stripped = outcome.was_stripped(), "decrypted");
    println!("{}", String::from_utf8_lossy(outcome.as_bytes()));
    Ok(ExitCode::SUCCESS)
}
