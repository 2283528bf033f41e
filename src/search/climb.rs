use std::num::NonZeroUsize;

/// Outcome of one hill-climb run: the state and score after the final step,
/// plus every step output in order.
pub struct Climb<S, O> {
    pub state: S,
    pub score: f64,
    pub outputs: Vec<O>,
}

impl<S, O> Climb<S, O> {
    /// The output recorded on the final step.
    pub fn into_last_output(mut self) -> O {
        // Step counts are NonZeroUsize, so at least one output was recorded.
        self.outputs.pop().expect("a climb runs at least one step")
    }
}

/// Generic local-search loop, agnostic of what "state" means.
///
/// On each of `steps` iterations, `propose` is handed the current state and
/// returns `(next_state, score, output)`. Whatever state it returns is carried
/// into the next iteration — a proposal that wants to reject its own move
/// simply hands the previous state back. Every output is recorded.
///
/// The zero-iteration case is unrepresentable: `steps` is `NonZeroUsize` and
/// user-facing count validation happens at the orchestrator boundary.
pub fn hill_climb<S, O, F>(steps: NonZeroUsize, initial: S, mut propose: F) -> Climb<S, O>
where
    F: FnMut(S) -> (S, f64, O),
{
    let mut state = initial;
    let mut score = f64::NEG_INFINITY;
    let mut outputs = Vec::with_capacity(steps.get());

    for _ in 0..steps.get() {
        let (next, next_score, output) = propose(state);
        state = next;
        score = next_score;
        outputs.push(output);
    }

    Climb {
        state,
        score,
        outputs,
    }
}
