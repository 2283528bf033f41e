use crate::search::runner::{CrackOptions, DEFAULT_SWAPS, DEFAULT_TRIALS};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SearchParams {
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,
    #[arg(long, default_value_t = DEFAULT_SWAPS)]
    pub swaps: usize,
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
    #[arg(short = 'p', long, default_value_t = false)]
    pub parallel: bool,
}

impl From<&SearchParams> for CrackOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            trials: params.trials,
            swaps: params.swaps,
            seed: params.seed,
            parallel: params.parallel,
        }
    }
}
