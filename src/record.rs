//! Word records as supplied by an external catalog loader.

use serde::{Deserialize, Serialize};

/// One catalog word with its spelling decomposition and pronunciation.
///
/// `syllables` and `pronunciation` are positionally aligned: the token at
/// index `i` of `pronunciation` is the phoneme encoding of the syllable at
/// index `i`. Records where the two differ in length stay in the catalog but
/// are skipped by index-aligned matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Canonical word, uppercased and trimmed.
    pub word: String,
    /// Spelling fragments in order.
    pub syllables: Vec<String>,
    /// Phoneme tokens aligned with `syllables`.
    pub pronunciation: Vec<String>,
    /// Difficulty score, absent when the source data carried none.
    pub difficulty: Option<f64>,
}

impl WordRecord {
    /// Build a record with the word canonicalized.
    pub fn new(
        word: &str,
        syllables: Vec<String>,
        pronunciation: Vec<String>,
        difficulty: Option<f64>,
    ) -> Self {
        Self {
            word: canonical(word),
            syllables,
            pronunciation,
            difficulty,
        }
    }

    /// True when syllables and pronunciation can be compared index by index.
    pub fn aligned(&self) -> bool {
        self.syllables.len() == self.pronunciation.len()
    }
}

/// Canonical form used for catalog keys and lookups.
pub fn canonical(word: &str) -> String {
    word.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canonicalizes_the_word() {
        let rec = WordRecord::new("  conduct ", vec![], vec![], None);
        assert_eq!(rec.word, "CONDUCT");
    }

    #[test]
    fn alignment_compares_lengths() {
        let rec = WordRecord::new(
            "BABOON",
            vec!["BA".into(), "BOON".into()],
            vec!["b@".into()],
            Some(0.4),
        );
        assert!(!rec.aligned());

        let rec = WordRecord::new(
            "BABOON",
            vec!["BA".into(), "BOON".into()],
            vec!["b@".into(), "bu:n".into()],
            Some(0.4),
        );
        assert!(rec.aligned());
    }
}
