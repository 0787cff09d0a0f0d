//! Core logic for the spellbank practice-word selection engine.
//!
//! Given a catalog of words annotated with syllable decomposition, phonetic
//! pronunciation and a difficulty score, the engine picks additional catalog
//! words that are "similarly hard" to words a learner was already tested on:
//! sharing a syllable (spelling-similar) or a pronunciation unit
//! (sound-similar) while staying inside a difficulty tolerance band, and never
//! repeating an already-seen or already-selected word.
//!
//! [`matcher::match_round`] scans the catalog once for a single round of
//! tested words; [`generate::generate`] drives the matcher across an ordered
//! sequence of rounds and accumulates the run-wide result. Catalog loading
//! and result presentation are external collaborators bound only by the data
//! types in [`record`], [`matcher`] and [`generate`].

pub mod band;
pub mod catalog;
pub mod error;
pub mod generate;
pub mod matcher;
pub mod record;
pub mod stats;

pub use band::Band;
pub use catalog::Catalog;
pub use error::SpellbankError;
pub use generate::{generate, FillPolicy, GenerateOutcome, MatchValue};
pub use matcher::{match_round, RoundMatches, SoundMatch, SpellMatch, TestedPair, TestedWord};
pub use record::WordRecord;
pub use stats::RunStats;

/// Default tolerance below a target difficulty.
pub const DEFAULT_MINIMUM: f64 = 0.05;
/// Default tolerance above a target difficulty.
pub const DEFAULT_MAXIMUM: f64 = 0.10;
