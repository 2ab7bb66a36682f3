use tracing::info;

use crate::engine::random_source::RandomSource;
use crate::engine::sentence_builder::SentenceBuilder;

pub const CLUSTER_MIN: usize = 4;
pub const CLUSTER_MAX: usize = 20;

pub struct ClusterGenerator<'a> {
    builder: &'a SentenceBuilder,
}

impl<'a> ClusterGenerator<'a> {
    pub fn new(builder: &'a SentenceBuilder) -> Self {
        Self { builder }
    }

    /// Draws a size in `[CLUSTER_MIN, CLUSTER_MAX]`, then that many independent sentences.
    pub fn generate_cluster(&self, rng: &mut dyn RandomSource) -> Vec<String> {
        let size = CLUSTER_MIN + rng.next_int(CLUSTER_MAX - CLUSTER_MIN + 1);
        info!(size, source = rng.describe(), "generating cluster");

        (0..size).map(|_| self.builder.build_sentence(rng)).collect()
    }
}
