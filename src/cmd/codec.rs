use crate::cmd;
use clap::Args;
use keybreak::{decrypt, encrypt, KbResult, PermutationKey};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// 26-letter substitution key. Omitted: a random key is generated and
    /// logged.
    #[arg(short, long)]
    pub key: Option<String>,

    /// Seed for the generated key.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(short, long)]
    pub input: Option<String>,

    #[arg(short, long)]
    pub text: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DecryptArgs {
    /// 26-letter substitution key.
    #[arg(short, long)]
    pub key: String,

    #[arg(short, long)]
    pub input: Option<String>,

    #[arg(short, long)]
    pub text: Option<String>,
}

pub fn run_encrypt(args: EncryptArgs) -> KbResult<()> {
    let key = match &args.key {
        Some(s) => s.parse::<PermutationKey>()?,
        None => {
            let mut rng = if let Some(s) = args.seed {
                fastrand::Rng::with_seed(s)
            } else {
                fastrand::Rng::new()
            };
            let key = PermutationKey::shuffled(&mut rng);
            info!("Generated key: {}", key);
            key
        }
    };

    let plaintext = cmd::read_input(&args.input, &args.text)?;
    println!("{}", encrypt(&key, &plaintext));
    Ok(())
}

pub fn run_decrypt(args: DecryptArgs) -> KbResult<()> {
    let key = args.key.parse::<PermutationKey>()?;
    let ciphertext = cmd::read_input(&args.input, &args.text)?;
    println!("{}", decrypt(&key, &ciphertext));
    Ok(())
}
