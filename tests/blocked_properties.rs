use std::collections::{BTreeSet, HashSet};

use quickcheck::quickcheck;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spellbank::{generate, match_round, Band, Catalog, FillPolicy, TestedWord};

quickcheck! {
    fn empty_catalog_mirrors_rounds(words: Vec<Vec<String>>) -> bool {
        let rounds: Vec<Vec<TestedWord>> = words
            .iter()
            .map(|ws| {
                ws.iter()
                    .map(|w| TestedWord { word: w.clone(), tested: Vec::new() })
                    .collect()
            })
            .collect();
        let catalog = Catalog::new(Vec::new());
        let outcome = generate(
            &catalog,
            &rounds,
            Band::default(),
            FillPolicy::default(),
            &mut StdRng::seed_from_u64(0),
        );

        let expected: BTreeSet<String> = words.iter().flatten().cloned().collect();
        outcome.saved_words.is_empty()
            && outcome.input_words == words
            && outcome.all_words == expected
    }

    fn existing_words_survive_into_blocked(existing: HashSet<String>, targets: Vec<String>) -> bool {
        let catalog = Catalog::new(Vec::new());
        let round: Vec<TestedWord> = targets
            .iter()
            .map(|w| TestedWord { word: w.clone(), tested: Vec::new() })
            .collect();
        let result = match_round(
            &catalog,
            &existing,
            &round,
            Band::default(),
            &mut StdRng::seed_from_u64(0),
        );
        existing.iter().all(|w| result.blocked.contains(w))
            && targets.iter().all(|w| result.blocked.contains(w))
    }
}
