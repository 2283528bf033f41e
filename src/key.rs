use crate::consts::{ALPHABET, KEY_LEN};
use crate::error::{KbResult, KeyBreakError};
use fastrand::Rng;
use std::fmt;
use std::str::FromStr;

/// A bijection on the 26-letter alphabet: every letter appears exactly once.
///
/// The field is private and every constructor either starts from the alphabet
/// or validates its input, so an invalid key cannot exist. Mutation is
/// swap-only, which preserves the invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationKey {
    letters: [u8; KEY_LEN],
}

impl PermutationKey {
    /// The alphabet in its natural order (the no-op cipher).
    pub fn identity() -> Self {
        Self { letters: *ALPHABET }
    }

    /// A uniform-random permutation of the alphabet.
    pub fn shuffled(rng: &mut Rng) -> Self {
        let mut letters = *ALPHABET;
        rng.shuffle(&mut letters);
        Self { letters }
    }

    /// Copy of this key with the letters at two distinct random positions
    /// exchanged. The original is left untouched.
    pub fn with_random_swap(&self, rng: &mut Rng) -> Self {
        let a = rng.usize(0..KEY_LEN);
        let mut b = rng.usize(0..KEY_LEN);
        while b == a {
            b = rng.usize(0..KEY_LEN);
        }
        let mut letters = self.letters;
        letters.swap(a, b);
        Self { letters }
    }

    /// The key as uppercase bytes, indexed by alphabet position.
    pub fn letters(&self) -> &[u8; KEY_LEN] {
        &self.letters
    }
}

impl FromStr for PermutationKey {
    type Err = KeyBreakError;

    fn from_str(s: &str) -> KbResult<Self> {
        let trimmed = s.trim();
        if trimmed.len() != KEY_LEN {
            return Err(KeyBreakError::InvalidKey(format!(
                "key must be {} letters, got {} ('{}')",
                KEY_LEN,
                trimmed.len(),
                trimmed
            )));
        }

        let mut letters = [0u8; KEY_LEN];
        let mut seen = [false; KEY_LEN];

        for (i, &b) in trimmed.as_bytes().iter().enumerate() {
            if !b.is_ascii_alphabetic() {
                return Err(KeyBreakError::InvalidKey(format!(
                    "key contains non-letter '{}'",
                    b as char
                )));
            }
            let upper = b.to_ascii_uppercase();
            let slot = (upper - b'A') as usize;
            if seen[slot] {
                return Err(KeyBreakError::InvalidKey(format!(
                    "key repeats letter '{}'",
                    upper as char
                )));
            }
            seen[slot] = true;
            letters[i] = upper;
        }

        Ok(Self { letters })
    }
}

impl fmt::Display for PermutationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
