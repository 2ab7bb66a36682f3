use std::path::PathBuf;

use quantum_sentence_generator::app::{load_builder, select_source};
use quantum_sentence_generator::config::settings::GeneratorSettings;
use quantum_sentence_generator::engine::cluster::{ClusterGenerator, CLUSTER_MAX, CLUSTER_MIN};
use quantum_sentence_generator::engine::sentence_builder::PUNCTUATION;
use quantum_sentence_generator::error::WordListError;
use quantum_sentence_generator::model::template::{GrammarOptions, Template};
use quantum_sentence_generator::model::word_list::WordLists;

fn bundled_words() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("words")
}

fn offline_settings() -> GeneratorSettings {
    GeneratorSettings {
        words_dir: bundled_words(),
        offline: true,
        ..Default::default()
    }
}

/// Lowercased words of a sentence with commas and the terminal mark removed.
fn tokens(sentence: &str) -> Vec<String> {
    sentence
        .trim_end_matches(|c: char| PUNCTUATION.contains(&c))
        .split(' ')
        .map(|w| w.trim_end_matches(',').to_lowercase())
        .collect()
}

/// Each word must come from its slot's list. Shuffling may swap adjectives
/// and adverbs, so modifier slots accept either modifier list.
fn fits_template(words: &WordLists, template: &Template, tokens: &[String]) -> bool {
    template.slots.len() == tokens.len()
        && template.slots.iter().zip(tokens).all(|(&slot, word)| {
            if slot.is_modifier() {
                words.adjectives.contains(word) || words.adverbs.contains(word)
            } else {
                words.for_slot(slot).contains(word)
            }
        })
}

#[test]
fn bundled_word_lists_produce_valid_clusters() {
    let settings = offline_settings();
    let builder = load_builder(&settings).unwrap();
    let generator = ClusterGenerator::new(&builder);
    let mut source = select_source(&settings, Some(2024));

    for _ in 0..50 {
        let cluster = generator.generate_cluster(source.as_mut());
        assert!((CLUSTER_MIN..=CLUSTER_MAX).contains(&cluster.len()));
        for sentence in &cluster {
            assert!(sentence.ends_with(|c: char| PUNCTUATION.contains(&c)));
            let sentence_words = tokens(sentence);
            assert!(
                builder
                    .options()
                    .templates
                    .iter()
                    .any(|t| fits_template(builder.words(), t, &sentence_words)),
                "no template explains {:?}",
                sentence
            );
        }
    }
}

#[test]
fn dead_qrng_still_yields_a_cluster() {
    let settings = GeneratorSettings {
        words_dir: bundled_words(),
        qrng_endpoint: "http://127.0.0.1:1/API/jsonI.php".into(),
        timeout_secs: 2,
        ..Default::default()
    };
    let builder = load_builder(&settings).unwrap();
    let mut source = select_source(&settings, None);

    let cluster = ClusterGenerator::new(&builder).generate_cluster(source.as_mut());
    assert!((CLUSTER_MIN..=CLUSTER_MAX).contains(&cluster.len()));
    assert_eq!(source.describe(), "quantum (local fallback)");
}

#[test]
fn seeded_runs_repeat_exactly() {
    let settings = offline_settings();
    let builder = load_builder(&settings).unwrap();
    let generator = ClusterGenerator::new(&builder);

    let first = generator.generate_cluster(select_source(&settings, Some(77)).as_mut());
    let second = generator.generate_cluster(select_source(&settings, Some(77)).as_mut());
    assert_eq!(first, second);
}

#[test]
fn plain_grammar_uses_canonical_shape() {
    let settings = GeneratorSettings {
        grammar: GrammarOptions::plain(),
        ..offline_settings()
    };
    let builder = load_builder(&settings).unwrap();
    let mut source = select_source(&settings, Some(5));

    for sentence in ClusterGenerator::new(&builder).generate_cluster(source.as_mut()) {
        assert!(sentence.ends_with('.'));
        assert!(!sentence.contains(','));
        let words = tokens(&sentence);
        assert_eq!(words.len(), 5);
        assert!(builder.words().determiners.contains(&words[0]));
        assert!(builder.words().adjectives.contains(&words[1]));
        assert!(builder.words().nouns.contains(&words[2]));
        assert!(builder.words().verbs.contains(&words[3]));
        assert!(builder.words().adverbs.contains(&words[4]));
    }
}

#[test]
fn missing_word_directory_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let settings = GeneratorSettings {
        words_dir: dir.path().join("absent"),
        ..offline_settings()
    };

    assert!(matches!(
        load_builder(&settings),
        Err(WordListError::Missing { .. })
    ));
}
