//! Word lists used as membership oracles.
//!
//! The engine only ever asks one question of a dictionary: is this lowercase
//! string a word? Anything that can answer it implements [`Dictionary`].

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Shortest sequence that can count as a word
pub const MIN_WORD_LENGTH: usize = 3;

/// Errors that can occur while loading a word list
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read word list: {0}")]
    Io(#[from] io::Error),

    #[error("Word list contains no words of three or more letters")]
    Empty,
}

/// A set of valid words.
///
/// Callers pass lowercase words.
pub trait Dictionary {
    /// Whether `word` is a valid word
    fn contains(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

impl Dictionary for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Dictionary for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

/// In-memory word list.
///
/// Entries are trimmed and lowercased; entries shorter than
/// [`MIN_WORD_LENGTH`] are dropped.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Build a word list from any collection of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| Self::normalize(word.as_ref()))
            .collect();
        Self { words }
    }

    /// Read a word list with one word per line
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DictionaryError> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            if let Some(word) = Self::normalize(&line?) {
                words.insert(word);
            }
        }
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self { words })
    }

    /// Load a word list file such as `sowpods.txt`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn normalize(raw: &str) -> Option<String> {
        let word = raw.trim();
        (word.chars().count() >= MIN_WORD_LENGTH).then(|| word.to_lowercase())
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
