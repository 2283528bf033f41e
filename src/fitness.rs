/// Scores how language-like a candidate plaintext looks. Higher is better.
///
/// Implementations are supplied by the caller (an n-gram model, a dictionary
/// hit counter, ...); the search core never assumes a particular model.
/// `Sync` so that fitness functions can be shared across parallel trials.
pub trait FitnessFn: Sync {
    fn score(&self, text: &str) -> f64;
}

impl<F> FitnessFn for F
where
    F: Fn(&str) -> f64 + Sync,
{
    fn score(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Combined fitness of `text` under every supplied function.
///
/// The combination policy is a plain sum, which keeps independently scaled
/// models additive. Callers are expected to pass at least one function; the
/// orchestrator enforces that before any search work starts.
pub fn score_text(text: &str, fitness: &[&dyn FitnessFn]) -> f64 {
    fitness.iter().map(|f| f.score(text)).sum()
}
