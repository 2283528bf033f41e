use keybreak::{FitnessFn, KbResult, KeyBreakError};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Letter n-gram statistics loaded from a `ngram<TAB>count` file, scored as
/// summed log10 probabilities over a letters-only sliding window.
///
/// This is the stock fitness collaborator the CLI plugs into the search core;
/// the core itself never assumes it.
pub struct NgramModel {
    order: usize,
    log_probs: HashMap<String, f64>,
    /// Score assigned to an n-gram absent from the statistics.
    floor: f64,
}

impl NgramModel {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KbResult<Self> {
        let path = path.as_ref();
        info!("📊 Loading n-gram statistics: {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Builds the model from any TSV source. The order is taken from the
    /// first row; rows of a different length or with malformed counts are
    /// skipped, matching how stats dumps usually mix orders.
    pub fn from_reader<R: Read>(reader: R) -> KbResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut counts: HashMap<String, f64> = HashMap::new();
        let mut order = 0usize;
        let mut skipped = 0usize;

        for record in rdr.records().flatten() {
            if record.len() < 2 {
                skipped += 1;
                continue;
            }
            let gram = record[0].trim().to_ascii_uppercase();
            if gram.is_empty() || !gram.bytes().all(|b| b.is_ascii_uppercase()) {
                skipped += 1;
                continue;
            }
            if order == 0 {
                order = gram.len();
            }
            if gram.len() != order {
                skipped += 1;
                continue;
            }
            match record[1].trim().parse::<f64>() {
                Ok(count) if count > 0.0 => {
                    *counts.entry(gram).or_insert(0.0) += count;
                }
                _ => skipped += 1,
            }
        }

        if counts.is_empty() {
            return Err(KeyBreakError::InvalidParameter(
                "n-gram statistics are empty".into(),
            ));
        }

        let total: f64 = counts.values().sum();
        let log_probs = counts
            .into_iter()
            .map(|(gram, count)| (gram, (count / total).log10()))
            .collect::<HashMap<_, _>>();
        // Unseen n-grams score well below the rarest observed one.
        let floor = (0.01 / total).log10();

        debug!(
            "n-gram model: order {}, {} entries, {} rows skipped",
            order,
            log_probs.len(),
            skipped
        );

        Ok(Self {
            order,
            log_probs,
            floor,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }
}

impl FitnessFn for NgramModel {
    fn score(&self, text: &str) -> f64 {
        let letters: Vec<u8> = text
            .bytes()
            .filter(u8::is_ascii_alphabetic)
            .map(|b| b.to_ascii_uppercase())
            .collect();

        if letters.len() < self.order {
            return self.floor;
        }

        letters
            .windows(self.order)
            .map(|w| {
                // Windows are pure ASCII uppercase by construction.
                let gram = std::str::from_utf8(w).unwrap_or_default();
                self.log_probs.get(gram).copied().unwrap_or(self.floor)
            })
            .sum()
    }
}
