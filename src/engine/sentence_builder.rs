use tracing::{trace, warn};

use crate::engine::random_source::{shuffle, RandomSource};
use crate::model::template::{GrammarOptions, Template};
use crate::model::word_list::WordLists;

pub const PUNCTUATION: [char; 3] = ['.', '!', '?'];

/// Turns word lists and a template set into sentences.
/// Owns no randomness: every draw goes through the `RandomSource` it is handed.
pub struct SentenceBuilder {
    words: WordLists,
    options: GrammarOptions,
}

impl SentenceBuilder {
    pub fn new(words: WordLists, mut options: GrammarOptions) -> Self {
        options.templates.retain(|t| !t.slots.is_empty());
        if options.templates.is_empty() {
            warn!("no usable templates configured, using the canonical one");
            options.templates.push(Template::canonical());
        }
        Self { words, options }
    }

    pub fn words(&self) -> &WordLists {
        &self.words
    }

    pub fn options(&self) -> &GrammarOptions {
        &self.options
    }

    pub fn build_sentence(&self, rng: &mut dyn RandomSource) -> String {
        let templates = &self.options.templates;
        let template = if templates.len() > 1 {
            &templates[rng.next_int(templates.len())]
        } else {
            &templates[0]
        };

        let mut words: Vec<String> = template
            .slots
            .iter()
            .map(|&slot| {
                let list = self.words.for_slot(slot);
                list.get(rng.next_int(list.len())).to_string()
            })
            .collect();

        if self.options.shuffle_modifiers {
            let positions = template.modifier_positions();
            if positions.len() > 1 {
                let mut modifiers: Vec<String> =
                    positions.iter().map(|&i| words[i].clone()).collect();
                shuffle(rng, &mut modifiers);
                for (&i, word) in positions.iter().zip(modifiers) {
                    words[i] = word;
                }
            }
        }

        if self.options.commas && words.len() > 1 && rng.next_bool() {
            let after = rng.next_int(words.len() - 1);
            words[after].push(',');
        }

        let terminal = if self.options.varied_punctuation {
            PUNCTUATION[rng.next_int(PUNCTUATION.len())]
        } else {
            '.'
        };

        let mut sentence = capitalize_first(&words.join(" "));
        sentence.push(terminal);
        trace!(%sentence, "built sentence");
        sentence
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
