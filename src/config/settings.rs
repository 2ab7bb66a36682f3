use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::qrng_client::{DEFAULT_ENDPOINT, MAX_BATCH};
use crate::model::template::GrammarOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Directory holding nouns.txt, verbs.txt, adjectives.txt, adverbs.txt
    /// and optionally determiners.txt.
    pub words_dir: PathBuf,

    pub qrng_endpoint: String,
    pub batch_size: usize,
    pub timeout_secs: u64,

    /// Skip the QRNG entirely.
    pub offline: bool,

    pub log_level: String,

    pub grammar: GrammarOptions,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            words_dir: PathBuf::from("words"),
            qrng_endpoint: DEFAULT_ENDPOINT.to_string(),
            batch_size: MAX_BATCH,
            timeout_secs: 10,
            offline: false,
            log_level: "warn".to_string(),
            grammar: GrammarOptions::default(),
        }
    }
}

impl GeneratorSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
