//! Cumulative keyboard state
//!
//! Tracks the best classification seen for every key during one game. A key
//! starts unset and only ever moves up:
//!
//! - unset adopts whatever the next guess reports
//! - present may still become correct
//! - absent and correct are final

use super::{ALPHABET, ALPHABET_SIZE, Feedback, LetterState, Word, alphabet_index};

/// Best state per keyboard key, indexed by alphabet position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardState {
    keys: [Option<LetterState>; ALPHABET_SIZE],
}

impl KeyboardState {
    /// All keys unset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State of a key (either case); `None` if never guessed or not a letter
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterState> {
        alphabet_index(letter).and_then(|index| self.keys[index])
    }

    /// Numeric code of a key's state, 0 when unset
    #[must_use]
    pub fn code(&self, letter: u8) -> u8 {
        self.get(letter).map_or(0, LetterState::code)
    }

    /// Overwrite a key's state, used when restoring a saved session
    pub(crate) fn set(&mut self, letter: u8, state: Option<LetterState>) {
        if let Some(index) = alphabet_index(letter) {
            self.keys[index] = state;
        }
    }

    /// Keys in alphabet order, as lowercase letters with their state
    pub fn iter(&self) -> impl Iterator<Item = (u8, Option<LetterState>)> + '_ {
        ALPHABET.iter().copied().zip(self.keys.iter().copied())
    }

    /// Fold one evaluated guess into the keyboard
    ///
    /// Repeated letters in the guess are first collapsed to their best state,
    /// so a correct later occurrence is not shadowed by an earlier absent one.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        let mut collapsed: [Option<LetterState>; ALPHABET_SIZE] = [None; ALPHABET_SIZE];
        for (&letter, &state) in guess.chars().iter().zip(feedback.states()) {
            if let Some(index) = alphabet_index(letter) {
                collapsed[index] = collapsed[index].max(Some(state));
            }
        }

        for (key, new) in self.keys.iter_mut().zip(collapsed) {
            let Some(new) = new else { continue };
            *key = match *key {
                None => Some(new),
                Some(LetterState::Present) if new == LetterState::Correct => Some(new),
                current => current,
            };
        }
    }

    /// Clear every key
    pub fn reset(&mut self) {
        self.keys = [None; ALPHABET_SIZE];
    }
}
