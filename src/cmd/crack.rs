use crate::cmd::{self, ngram::NgramModel};
use crate::reports;
use clap::Args;
use keybreak::config::SearchParams;
use keybreak::{crack, CrackOptions, FitnessFn, KbResult, KeyBreakError};
use std::str::FromStr;
use std::time::Instant;
use strum_macros::{Display, EnumString};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    #[command(flatten)]
    pub search: SearchParams,

    /// File containing the ciphertext.
    #[arg(short, long)]
    pub input: Option<String>,

    /// Ciphertext passed directly on the command line.
    #[arg(short, long)]
    pub text: Option<String>,

    /// Tab-separated n-gram statistics (quadgrams work well).
    #[arg(short, long, default_value = "data/quadgrams.tsv")]
    pub ngrams: String,

    /// How many ranked candidates to show.
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    #[arg(short, long, default_value = "table")]
    pub format: String,
}

pub fn run(args: CrackArgs) -> KbResult<()> {
    let format = OutputFormat::from_str(&args.format).map_err(|_| {
        KeyBreakError::InvalidParameter(format!("unknown format '{}'", args.format))
    })?;

    let ciphertext = cmd::read_input(&args.input, &args.text)?;
    let model = NgramModel::load_from_file(&args.ngrams)?;
    let fitness: [&dyn FitnessFn; 1] = [&model];

    let options = CrackOptions::from(&args.search);
    info!(
        "🔓 Cracking: {} trials × {} swaps{}",
        options.trials,
        options.swaps,
        if options.parallel { " (parallel)" } else { "" }
    );

    let started = Instant::now();
    let results = crack(&ciphertext, &fitness, &options)?;
    info!(
        "Search finished in {:.2}s, best score {:.4}",
        started.elapsed().as_secs_f32(),
        results[0].score
    );

    let shown = &results[..args.top.min(results.len())];
    match format {
        OutputFormat::Table => reports::print_ranked(shown),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(shown)?),
    }

    Ok(())
}
