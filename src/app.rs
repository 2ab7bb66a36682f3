use tracing::{info, warn};

use crate::config::settings::GeneratorSettings;
use crate::engine::qrng_client::QrngClient;
use crate::engine::quantum_source::QuantumRandom;
use crate::engine::random_source::{LocalRandom, RandomSource};
use crate::engine::sentence_builder::SentenceBuilder;
use crate::error::WordListError;
use crate::model::word_list::WordLists;

/// Pick the random source once, up front. `seed` drives the local generator,
/// which is also the fallback behind the quantum source.
pub fn select_source(settings: &GeneratorSettings, seed: Option<u64>) -> Box<dyn RandomSource> {
    let local = LocalRandom::from_seed_option(seed);

    if settings.offline {
        info!("offline mode, using local randomness");
        return Box::new(local);
    }

    match QrngClient::new(settings.qrng_endpoint.clone(), settings.timeout()) {
        Ok(client) => {
            info!(endpoint = %settings.qrng_endpoint, "using quantum randomness");
            Box::new(QuantumRandom::new(client, settings.batch_size, local))
        }
        Err(e) => {
            warn!(error = %e, "could not build QRNG client, using local randomness");
            Box::new(local)
        }
    }
}

pub fn load_builder(settings: &GeneratorSettings) -> Result<SentenceBuilder, WordListError> {
    let words = WordLists::load_dir(&settings.words_dir)?;
    info!(
        nouns = words.nouns.len(),
        verbs = words.verbs.len(),
        adjectives = words.adjectives.len(),
        adverbs = words.adverbs.len(),
        determiners = words.determiners.len(),
        "word lists loaded"
    );
    Ok(SentenceBuilder::new(words, settings.grammar.clone()))
}
