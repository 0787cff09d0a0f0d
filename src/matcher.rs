//! Single-round similarity matching over the catalog.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::band::Band;
use crate::catalog::Catalog;

/// Number of save-list entries examined by the backup fallback.
pub const BACKUP_LIMIT: usize = 5;

/// One syllable/pronunciation pair a learner was tested against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestedPair {
    pub syllable: String,
    pub pronunciation: String,
}

/// One target word of a round with its tested pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestedWord {
    pub word: String,
    pub tested: Vec<TestedPair>,
}

/// Spelling-similar selection: `word` shares `syllable` with a target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpellMatch {
    pub word: String,
    pub syllable: String,
}

/// Sound-similar selection: `word` carries `pronunciation` at a position
/// whose spelling `syllable` differs from the target's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundMatch {
    pub word: String,
    pub syllable: String,
    pub pronunciation: String,
}

/// Result of matching one round against the catalog.
///
/// `spell` and `sound` are insertion-ordered and never share a word; every
/// word in either list is also in `blocked`.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundMatches {
    pub spell: Vec<SpellMatch>,
    pub sound: Vec<SoundMatch>,
    /// This round's target words, in round order.
    pub input_words: Vec<String>,
    /// Exclusion set after the round: the incoming set plus this round's
    /// targets plus every selected word.
    pub blocked: HashSet<String>,
}

/// One tested pair expanded against the difficulty index.
#[derive(Debug, Clone)]
struct TargetEntry {
    difficulty: f64,
    syllable: String,
    pronunciation: String,
}

/// Candidate that shared a syllable but fell clearly outside the band.
/// Duplicates are allowed; the list is only consulted by the backup path.
#[derive(Debug, Clone)]
struct SaveCandidate {
    word: String,
    syllable: String,
}

/// Scan the catalog once for words similarly hard to this round's targets.
///
/// `existing` holds words excluded before the round starts; the returned
/// [`RoundMatches::blocked`] extends it with the round's target words and
/// every selected word. The scan visits rows in a freshly shuffled order, so
/// a fixed-seed `rng` reproduces the full result byte for byte.
///
/// An empty catalog, a catalog without difficulty scores, or targets without
/// difficulty entries all degrade to empty match lists rather than errors.
pub fn match_round<R: Rng>(
    catalog: &Catalog,
    existing: &HashSet<String>,
    round: &[TestedWord],
    band: Band,
    rng: &mut R,
) -> RoundMatches {
    let input_words: Vec<String> = round.iter().map(|t| t.word.clone()).collect();

    let mut blocked = existing.clone();
    blocked.extend(input_words.iter().cloned());

    if catalog.is_empty() || !catalog.has_difficulties() {
        return RoundMatches {
            spell: Vec::new(),
            sound: Vec::new(),
            input_words,
            blocked,
        };
    }

    let targets = expand_targets(catalog, round);

    let mut spell: Vec<SpellMatch> = Vec::new();
    let mut sound: Vec<SoundMatch> = Vec::new();
    let mut save: Vec<SaveCandidate> = Vec::new();

    for index in catalog.scan_order(rng) {
        let row = &catalog.records()[index];
        if blocked.contains(&row.word) {
            continue;
        }
        // Index-aligned checks need equal-length arrays.
        if !row.aligned() {
            continue;
        }
        let difficulty = match row.difficulty {
            Some(d) => d,
            None => continue,
        };

        // Spelling: the first target whose syllable the row shares and whose
        // band holds the row wins. A shared syllable clearly outside the
        // band is remembered as a backup candidate instead.
        for target in &targets {
            if !row.syllables.iter().any(|s| *s == target.syllable) {
                continue;
            }
            if band.contains(target.difficulty, difficulty) {
                spell.push(SpellMatch {
                    word: row.word.clone(),
                    syllable: target.syllable.clone(),
                });
                blocked.insert(row.word.clone());
                break;
            } else if band.outside_extended(target.difficulty, difficulty) {
                save.push(SaveCandidate {
                    word: row.word.clone(),
                    syllable: target.syllable.clone(),
                });
            }
        }
        if blocked.contains(&row.word) {
            continue;
        }

        // Sound: every target is examined and the last qualifying position
        // wins, unlike the spelling pass above. The recorded syllable must
        // differ from the target's, otherwise the row would just be a
        // spelling twin.
        let mut hit: Option<SoundMatch> = None;
        for target in &targets {
            if !band.contains(target.difficulty, difficulty) {
                continue;
            }
            for (i, pron) in row.pronunciation.iter().enumerate() {
                if *pron == target.pronunciation && row.syllables[i] != target.syllable {
                    hit = Some(SoundMatch {
                        word: row.word.clone(),
                        syllable: row.syllables[i].clone(),
                        pronunciation: target.pronunciation.clone(),
                    });
                }
            }
        }
        if let Some(found) = hit {
            blocked.insert(found.word.clone());
            sound.push(found);
        }
    }

    // Backup: when the scan produced nothing at all, promote the first few
    // saved candidates in scan order.
    if spell.is_empty() && sound.is_empty() && !save.is_empty() {
        for candidate in save.iter().take(BACKUP_LIMIT) {
            if blocked.contains(&candidate.word) {
                continue;
            }
            blocked.insert(candidate.word.clone());
            spell.push(SpellMatch {
                word: candidate.word.clone(),
                syllable: candidate.syllable.clone(),
            });
        }
    }

    RoundMatches {
        spell,
        sound,
        input_words,
        blocked,
    }
}

/// Expand each target word's tested pairs into band targets, in round order.
/// Words with no difficulty entry are dropped, not the whole round.
fn expand_targets(catalog: &Catalog, round: &[TestedWord]) -> Vec<TargetEntry> {
    let mut targets = Vec::new();
    for tested in round {
        let difficulty = match catalog.difficulty(&tested.word) {
            Some(d) => d,
            None => continue,
        };
        for pair in &tested.tested {
            targets.push(TargetEntry {
                difficulty,
                syllable: pair.syllable.clone(),
                pronunciation: pair.pronunciation.clone(),
            });
        }
    }
    targets
}
