use crate::error::{KbResult, KeyBreakError};
use crate::fitness::{score_text, FitnessFn};
use crate::key::PermutationKey;
use crate::search::climb::hill_climb;
use crate::search::Decryption;
use crate::transform::decrypt;
use fastrand::Rng;
use rayon::prelude::*;
use std::num::NonZeroUsize;
use tracing::debug;

pub const DEFAULT_TRIALS: usize = 30;
pub const DEFAULT_SWAPS: usize = 3000;

#[derive(Debug, Clone)]
pub struct CrackOptions {
    /// Independent restarts; each produces one candidate decryption.
    pub trials: usize,
    /// Pairwise-swap proposals per restart.
    pub swaps: usize,
    /// Fixed seed for a reproducible run. `None` draws a fresh one.
    pub seed: Option<u64>,
    /// Fan the restarts out over a rayon pool. A seeded parallel run yields
    /// the same results as the sequential one.
    pub parallel: bool,
}

impl Default for CrackOptions {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            swaps: DEFAULT_SWAPS,
            seed: None,
            parallel: false,
        }
    }
}

/// Recovers candidate keys for `ciphertext` by repeated randomized local
/// search, returning one scored [`Decryption`] per trial, best first.
///
/// Fails with [`KeyBreakError::InvalidParameter`] before any search work when
/// `trials` or `swaps` is zero or no fitness function was supplied. Ties in
/// the final ordering keep trial-completion order.
pub fn crack(
    ciphertext: &str,
    fitness: &[&dyn FitnessFn],
    options: &CrackOptions,
) -> KbResult<Vec<Decryption>> {
    let trials = NonZeroUsize::new(options.trials)
        .ok_or_else(|| KeyBreakError::InvalidParameter("trials must be positive".into()))?;
    let swaps = NonZeroUsize::new(options.swaps)
        .ok_or_else(|| KeyBreakError::InvalidParameter("swaps must be positive".into()))?;
    if fitness.is_empty() {
        return Err(KeyBreakError::InvalidParameter(
            "at least one fitness function is required".into(),
        ));
    }

    let mut rng = if let Some(s) = options.seed {
        Rng::with_seed(s)
    } else {
        Rng::new()
    };

    let mut results = if options.parallel {
        run_trials_parallel(ciphertext, fitness, trials, swaps, &mut rng)
    } else {
        run_restarts(ciphertext, fitness, trials, swaps, &mut rng)
    };

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(results)
}

/// Outer climb: each step discards the previous start, shuffles a fresh key
/// on a forked stream and runs one full swap search from it. The recorded
/// outputs are the per-trial best decryptions.
fn run_restarts(
    ciphertext: &str,
    fitness: &[&dyn FitnessFn],
    trials: NonZeroUsize,
    swaps: NonZeroUsize,
    rng: &mut Rng,
) -> Vec<Decryption> {
    let mut trial = 0usize;
    let climb = hill_climb(trials, PermutationKey::identity(), |_discarded| {
        let mut trial_rng = rng.fork();
        let start = PermutationKey::shuffled(&mut trial_rng);
        let best = swap_trial(ciphertext, fitness, swaps, start.clone(), &mut trial_rng);
        trial += 1;
        debug!("trial {:3}: score {:.4} key {}", trial, best.score, best.key);
        let score = best.score;
        (start, score, best)
    });
    climb.outputs
}

/// Trials are independent, so they can fan out over the rayon pool. Streams
/// are forked in trial order, matching the sequential path exactly.
fn run_trials_parallel(
    ciphertext: &str,
    fitness: &[&dyn FitnessFn],
    trials: NonZeroUsize,
    swaps: NonZeroUsize,
    rng: &mut Rng,
) -> Vec<Decryption> {
    let streams: Vec<Rng> = (0..trials.get()).map(|_| rng.fork()).collect();

    streams
        .into_par_iter()
        .map(|mut trial_rng| {
            let start = PermutationKey::shuffled(&mut trial_rng);
            swap_trial(ciphertext, fitness, swaps, start, &mut trial_rng)
        })
        .collect()
}

/// Inner climb: random pairwise swaps from `start`. A swap is kept only when
/// it strictly improves the combined fitness of the decryption; otherwise the
/// walk stays on its current key and the step records the standing best, so
/// the last output is the trial's local optimum.
fn swap_trial(
    ciphertext: &str,
    fitness: &[&dyn FitnessFn],
    swaps: NonZeroUsize,
    start: PermutationKey,
    rng: &mut Rng,
) -> Decryption {
    let start_plain = decrypt(&start, ciphertext);
    let mut held = Decryption {
        score: score_text(&start_plain, fitness),
        plaintext: start_plain,
        key: start.to_string(),
    };

    let climb = hill_climb(swaps, start, |key: PermutationKey| {
        let candidate = key.with_random_swap(rng);
        let plaintext = decrypt(&candidate, ciphertext);
        let score = score_text(&plaintext, fitness);
        if score > held.score {
            held = Decryption {
                plaintext,
                key: candidate.to_string(),
                score,
            };
            (candidate, score, held.clone())
        } else {
            (key, held.score, held.clone())
        }
    });

    climb.into_last_output()
}
