pub mod climb;
pub mod runner;

use serde::{Deserialize, Serialize};

pub use self::climb::{hill_climb, Climb};
pub use self::runner::{crack, CrackOptions, DEFAULT_SWAPS, DEFAULT_TRIALS};

/// One scored candidate decryption. Immutable once produced; ranked by
/// descending score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decryption {
    pub plaintext: String,
    /// The 26-letter key that produced `plaintext`.
    pub key: String,
    pub score: f64,
}
