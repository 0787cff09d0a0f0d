//! Immutable in-memory word catalog with a derived difficulty index.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::record::{canonical, WordRecord};

/// Read-only store of word records, built once per process and shared by
/// reference into every matching call.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<WordRecord>,
    difficulty: HashMap<String, f64>,
}

impl Catalog {
    /// Build a catalog from loader-supplied records.
    ///
    /// The difficulty index projects `(word, difficulty)` over records that
    /// carry a score; the last occurrence wins when a word repeats.
    pub fn new(records: Vec<WordRecord>) -> Self {
        let mut difficulty = HashMap::new();
        for rec in &records {
            if let Some(d) = rec.difficulty {
                difficulty.insert(rec.word.clone(), d);
            }
        }
        Self {
            records,
            difficulty,
        }
    }

    /// All records in loader order.
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Difficulty lookup; `None` for unknown words and words without a score.
    pub fn difficulty(&self, word: &str) -> Option<f64> {
        self.difficulty.get(word).copied()
    }

    /// False when no record carries a difficulty score, in which case
    /// matching degrades to an empty result.
    pub fn has_difficulties(&self) -> bool {
        !self.difficulty.is_empty()
    }

    /// Case-insensitive single-word lookup, first occurrence wins.
    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        let key = canonical(word);
        self.records.iter().find(|rec| rec.word == key)
    }

    /// Freshly shuffled snapshot of row indices.
    ///
    /// Scan order decides which candidate wins when several would otherwise
    /// tie, so the permutation is part of the engine contract: a seeded RNG
    /// reproduces it exactly. The underlying record storage is never
    /// reordered.
    pub fn scan_order<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.records.len()).collect();
        order.shuffle(rng);
        order
    }
}
