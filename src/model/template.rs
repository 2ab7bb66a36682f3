use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Determiner,
    Adjective,
    Noun,
    Verb,
    Adverb,
}

impl Slot {
    /// Adjectives and adverbs may trade places when shuffling is on.
    pub fn is_modifier(self) -> bool {
        matches!(self, Slot::Adjective | Slot::Adverb)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template {
    pub slots: Vec<Slot>,
}

impl Template {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Determiner Adjective Noun Verb Adverb
    pub fn canonical() -> Self {
        use Slot::*;
        Self::new(vec![Determiner, Adjective, Noun, Verb, Adverb])
    }

    pub fn modifier_positions(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_modifier())
            .map(|(i, _)| i)
            .collect()
    }
}

pub fn default_templates() -> Vec<Template> {
    use Slot::*;
    vec![
        Template::canonical(),
        Template::new(vec![Noun, Verb, Determiner, Noun]),
        Template::new(vec![Adjective, Noun, Verb]),
        Template::new(vec![Determiner, Noun, Verb, Adverb]),
    ]
}

/// Knobs for the sentence builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarOptions {
    pub templates: Vec<Template>,
    pub commas: bool,
    pub shuffle_modifiers: bool,
    pub varied_punctuation: bool,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        Self {
            templates: default_templates(),
            commas: true,
            shuffle_modifiers: true,
            varied_punctuation: true,
        }
    }
}

impl GrammarOptions {
    /// Canonical template only, no commas, no shuffling, always a full stop.
    pub fn plain() -> Self {
        Self {
            templates: vec![Template::canonical()],
            commas: false,
            shuffle_modifiers: false,
            varied_punctuation: false,
        }
    }
}
