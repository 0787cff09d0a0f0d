use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use spellbank::{generate, Band, Catalog, FillPolicy, TestedPair, TestedWord, WordRecord};

fn rec(word: &str, syllables: &[&str], prons: &[&str], difficulty: f64) -> WordRecord {
    WordRecord::new(
        word,
        syllables.iter().map(|s| s.to_string()).collect(),
        prons.iter().map(|s| s.to_string()).collect(),
        Some(difficulty),
    )
}

// Consumers discriminate the two value shapes structurally: a spelling match
// is a one-element list, a sound match a two-element unordered pair. There is
// no type tag on the wire.
#[test]
fn saved_words_serialize_without_type_tags() {
    let catalog = Catalog::new(vec![
        rec("MISSION", &["MIS", "SION"], &["mI", "S@n"], 0.52),
        rec("MISTAKE", &["MIS", "TAKE"], &["mIs", "teIk"], 0.50),
        rec("NATION", &["NA", "TION"], &["neI", "S@n"], 0.50),
    ]);
    let rounds = vec![vec![TestedWord {
        word: "MISSION".into(),
        tested: vec![
            TestedPair {
                syllable: "MIS".into(),
                pronunciation: "mI".into(),
            },
            TestedPair {
                syllable: "SION".into(),
                pronunciation: "S@n".into(),
            },
        ],
    }]];

    let mut rng = StdRng::seed_from_u64(1);
    let outcome = generate(&catalog, &rounds, Band::default(), FillPolicy::default(), &mut rng);

    let value = serde_json::to_value(&outcome.saved_words).unwrap();
    assert_eq!(
        value,
        json!({
            "MISTAKE": ["MIS"],
            "NATION": ["S@n", "TION"],
        })
    );
}

#[test]
fn spelling_values_always_carry_exactly_one_syllable() {
    let catalog = Catalog::new(vec![
        rec("MISSION", &["MIS", "SION"], &["mI", "S@n"], 0.52),
        rec("MISTAKE", &["MIS", "TAKE"], &["mIs", "teIk"], 0.50),
    ]);
    let rounds = vec![vec![TestedWord {
        word: "MISSION".into(),
        tested: vec![TestedPair {
            syllable: "MIS".into(),
            pronunciation: "mI".into(),
        }],
    }]];

    let mut rng = StdRng::seed_from_u64(1);
    let outcome = generate(&catalog, &rounds, Band::default(), FillPolicy::default(), &mut rng);

    let value = serde_json::to_value(&outcome.saved_words).unwrap();
    let spelled = value.get("MISTAKE").unwrap().as_array().unwrap();
    assert_eq!(spelled.len(), 1);
    assert_eq!(spelled[0], "MIS");
}
