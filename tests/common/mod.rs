use keybreak::FitnessFn;
use std::collections::HashMap;

/// Reference passage used by the end-to-end tests. Contains every letter of
/// the alphabet, several times over for the rare ones.
pub fn reference_text() -> &'static str {
    "The quick brown fox jumps over the lazy dog while the amazed zookeeper \
     watches from behind the old wooden fence. Jackdaws love my big sphinx of \
     quartz, or so the proverb claims, and every cryptographer has typed it a \
     thousand times to exercise each letter of the alphabet. When the evening \
     grows quiet the analysts gather around the blackboard and argue about \
     frequency tables, common digraphs, and the stubborn habits of the English \
     language. A long message betrays its author: the pattern of the vowels, \
     the rhythm of the consonants, and the quiet regularity of ordinary words \
     give the key away to anyone patient enough to climb the hill one swap at \
     a time."
}

/// Quadgram statistics built from a reference corpus. This is the external
/// scoring collaborator the search consumes; tests build it from the passage
/// they later try to recover.
pub struct QuadgramModel {
    log_probs: HashMap<String, f64>,
    floor: f64,
}

impl QuadgramModel {
    pub fn from_corpus(corpus: &str) -> Self {
        let letters: Vec<u8> = corpus
            .bytes()
            .filter(u8::is_ascii_alphabetic)
            .map(|b| b.to_ascii_uppercase())
            .collect();

        let mut counts: HashMap<String, f64> = HashMap::new();
        for window in letters.windows(4) {
            let gram = String::from_utf8(window.to_vec()).unwrap();
            *counts.entry(gram).or_insert(0.0) += 1.0;
        }

        let total: f64 = counts.values().sum();
        let log_probs = counts
            .into_iter()
            .map(|(gram, count)| (gram, (count / total).log10()))
            .collect();
        let floor = (0.01 / total).log10();

        Self { log_probs, floor }
    }
}

impl FitnessFn for QuadgramModel {
    fn score(&self, text: &str) -> f64 {
        let letters: Vec<u8> = text
            .bytes()
            .filter(u8::is_ascii_alphabetic)
            .map(|b| b.to_ascii_uppercase())
            .collect();

        letters
            .windows(4)
            .map(|w| {
                let gram = std::str::from_utf8(w).unwrap_or_default();
                self.log_probs.get(gram).copied().unwrap_or(self.floor)
            })
            .sum()
    }
}
