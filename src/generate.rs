//! Multi-round batching and accumulation around the matcher.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use rand::Rng;
use serde::Serialize;

use crate::band::Band;
use crate::catalog::Catalog;
use crate::error::SpellbankError;
use crate::matcher::{match_round, TestedWord};
use crate::stats::RunStats;

/// How many new words one round may contribute, and how many of those slots
/// sound matches claim first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillPolicy {
    /// Target number of new words per round.
    pub round_target: usize,
    /// Priority slots reserved for sound matches.
    pub sound_slots: usize,
}

impl FillPolicy {
    /// Build a validated policy.
    pub fn new(round_target: usize, sound_slots: usize) -> Result<Self, SpellbankError> {
        if round_target == 0 {
            return Err(SpellbankError::Policy(
                "round target must be at least 1".into(),
            ));
        }
        if sound_slots > round_target {
            return Err(SpellbankError::Policy(
                "sound slots cannot exceed the round target".into(),
            ));
        }
        Ok(Self {
            round_target,
            sound_slots,
        })
    }
}

impl Default for FillPolicy {
    fn default() -> Self {
        Self {
            round_target: 9,
            sound_slots: 4,
        }
    }
}

/// Selected-word value, discriminated by shape rather than by tag: a
/// single-element list for a spelling match, a two-element unordered pair
/// for a sound match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MatchValue {
    Spelling(Vec<String>),
    Sound(BTreeSet<String>),
}

/// Accumulated output of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOutcome {
    /// Every selected word with its match value; later rounds overwrite on
    /// key collision.
    pub saved_words: BTreeMap<String, MatchValue>,
    /// One list of target words per round, in round order.
    pub input_words: Vec<Vec<String>>,
    /// All target and selected words of the run, deduplicated.
    pub all_words: BTreeSet<String>,
    /// Counters for the run.
    pub stats: RunStats,
}

/// Run the matcher over an ordered sequence of rounds and accumulate the
/// run-wide result.
///
/// Every round's target words are excluded up front, so an earlier round can
/// never select a later round's own targets. Each round then feeds its
/// updated exclusion set into the next. Missing difficulty entries, shape
/// mismatches and empty catalogs all degrade to partial or empty output;
/// an undersized batch is a normal outcome, not an error.
pub fn generate<R: Rng>(
    catalog: &Catalog,
    rounds: &[Vec<TestedWord>],
    band: Band,
    policy: FillPolicy,
    rng: &mut R,
) -> GenerateOutcome {
    let mut existing: HashSet<String> = rounds
        .iter()
        .flatten()
        .map(|t| t.word.clone())
        .collect();

    let mut saved_words: BTreeMap<String, MatchValue> = BTreeMap::new();
    let mut input_words: Vec<Vec<String>> = Vec::with_capacity(rounds.len());
    let mut all_words: BTreeSet<String> = BTreeSet::new();
    let mut stats = RunStats::new();

    for round in rounds {
        let matches = match_round(catalog, &existing, round, band, rng);

        // Sound matches take their priority slots first, spelling matches
        // fill whatever remains of the round target. Both honor the
        // matcher's insertion order.
        let mut sound_taken = 0usize;
        for found in matches.sound.iter().take(policy.sound_slots) {
            let value = MatchValue::Sound(BTreeSet::from([
                found.syllable.clone(),
                found.pronunciation.clone(),
            ]));
            saved_words.insert(found.word.clone(), value);
            sound_taken += 1;
        }
        let remaining = policy.round_target.saturating_sub(sound_taken);
        let mut spell_taken = 0usize;
        for found in matches.spell.iter().take(remaining) {
            saved_words.insert(
                found.word.clone(),
                MatchValue::Spelling(vec![found.syllable.clone()]),
            );
            spell_taken += 1;
        }

        stats.tick_round(
            spell_taken as u64,
            sound_taken as u64,
            matches.input_words.len() as u64,
        );
        all_words.extend(matches.input_words.iter().cloned());
        input_words.push(matches.input_words);
        existing = matches.blocked;
    }

    all_words.extend(saved_words.keys().cloned());
    stats.set_blocked(existing.len() as u64);

    GenerateOutcome {
        saved_words,
        input_words,
        all_words,
        stats,
    }
}
