//! Word lists for the game
//!
//! Provides the embedded word list and the [`Dictionary`] used both to draw
//! secrets and to validate guesses.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Source of valid words
pub trait WordSource {
    /// Every valid word, usable as guess or secret
    fn words(&self) -> &[Word];

    /// Membership test for submitted guesses
    fn contains(&self, word: &Word) -> bool {
        self.words().contains(word)
    }
}

/// Word list with constant-time membership
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicates while keeping first-seen order
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut lookup = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|w| lookup.insert(w.clone()))
            .collect();
        Self { words, lookup }
    }

    /// Build a dictionary from raw strings, skipping invalid entries
    #[must_use]
    pub fn from_strs(slice: &[&str]) -> Self {
        Self::from_words(loader::words_from_slice(slice))
    }

    /// The word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_strs(WORDS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw a random secret
    pub fn choose_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

impl WordSource for Dictionary {
    fn words(&self) -> &[Word] {
        &self.words
    }

    fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_has_no_duplicates() {
        assert_eq!(Dictionary::embedded().len(), WORDS_COUNT);
    }

    #[test]
    fn membership_is_case_insensitive() {
        let dictionary = Dictionary::from_strs(&["crane", "SLATE"]);
        assert!(dictionary.contains(&Word::new("CRANE").unwrap()));
        assert!(dictionary.contains(&Word::new("slate").unwrap()));
        assert!(!dictionary.contains(&Word::new("trace").unwrap()));
    }

    #[test]
    fn duplicates_are_dropped() {
        let dictionary = Dictionary::from_strs(&["crane", "CRANE", "slate"]);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[0].text(), "CRANE");
    }

    #[test]
    fn secrets_come_from_the_list() {
        let dictionary = Dictionary::from_strs(&["crane", "slate", "trace"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let secret = dictionary.choose_secret(&mut rng).unwrap();
            assert!(dictionary.contains(secret));
        }
        assert!(Dictionary::default().choose_secret(&mut rng).is_none());
    }
}
