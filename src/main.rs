use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recover the key of a substitution cipher from ciphertext alone.
    Crack(cmd::crack::CrackArgs),
    /// Apply a key to plaintext.
    Encrypt(cmd::codec::EncryptArgs),
    /// Apply a key to ciphertext.
    Decrypt(cmd::codec::DecryptArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // Logs go to stderr; stdout carries the results and stays pipeable.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Crack(args) => cmd::crack::run(args),
        Commands::Encrypt(args) => cmd::codec::run_encrypt(args),
        Commands::Decrypt(args) => cmd::codec::run_decrypt(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
