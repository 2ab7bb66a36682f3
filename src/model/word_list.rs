use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::WordListError;
use crate::model::template::Slot;

pub const DEFAULT_DETERMINERS: [&str; 3] = ["the", "a", "one"];

/// A non-empty, immutable list of words for one part of speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Returns `None` for an empty list.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// One word per line; blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Option<Self> {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn load(path: &Path) -> Result<Self, WordListError> {
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => WordListError::Missing { path: path.to_path_buf() },
            _ => WordListError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let list = Self::parse(&text).ok_or_else(|| WordListError::Empty {
            path: path.to_path_buf(),
        })?;
        debug!(path = %path.display(), words = list.len(), "loaded word list");
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// `index` must come from a draw bounded by `len()`.
    pub fn get(&self, index: usize) -> &str {
        &self.words[index % self.words.len()]
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct WordLists {
    pub nouns: WordList,
    pub verbs: WordList,
    pub adjectives: WordList,
    pub adverbs: WordList,
    pub determiners: WordList,
}

impl WordLists {
    /// Loads `nouns.txt`, `verbs.txt`, `adjectives.txt` and `adverbs.txt` from `dir`.
    /// `determiners.txt` is optional and falls back to the built-in set.
    pub fn load_dir(dir: &Path) -> Result<Self, WordListError> {
        let determiners_path = dir.join("determiners.txt");
        let determiners = if determiners_path.exists() {
            WordList::load(&determiners_path)?
        } else {
            debug!("no determiners.txt, using built-in determiners");
            default_determiners()
        };

        Ok(Self {
            nouns: WordList::load(&dir.join("nouns.txt"))?,
            verbs: WordList::load(&dir.join("verbs.txt"))?,
            adjectives: WordList::load(&dir.join("adjectives.txt"))?,
            adverbs: WordList::load(&dir.join("adverbs.txt"))?,
            determiners,
        })
    }

    pub fn for_slot(&self, slot: Slot) -> &WordList {
        match slot {
            Slot::Determiner => &self.determiners,
            Slot::Adjective => &self.adjectives,
            Slot::Noun => &self.nouns,
            Slot::Verb => &self.verbs,
            Slot::Adverb => &self.adverbs,
        }
    }
}

pub fn default_determiners() -> WordList {
    WordList {
        words: DEFAULT_DETERMINERS.iter().map(|w| w.to_string()).collect(),
    }
}
