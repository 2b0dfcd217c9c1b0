//! Guess evaluation
//!
//! Feedback holds one [`LetterState`] per position of a guess, in the guess's
//! own index order. Repeated letters are scored against a shrinking pool of the
//! secret's remaining occurrences, so a letter is never reported more often
//! than the secret contains it.

use super::{ALPHABET_SIZE, LetterState, ROW_LENGTH, Word, alphabet_index};
use std::fmt;
use thiserror::Error;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; ROW_LENGTH]);

/// Precondition violations when scoring raw letters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("secret has {secret} letters and guess has {guess}, both must have 5")]
    InvalidLength { secret: usize, guess: usize },
}

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterState::Correct; ROW_LENGTH]);

    /// Wrap per-position states
    #[inline]
    #[must_use]
    pub const fn new(states: [LetterState; ROW_LENGTH]) -> Self {
        Self(states)
    }

    /// Per-position states in guess order
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; ROW_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches correct and take them out of the pool
    /// 2. Second pass: left to right, mark a letter present while the pool still
    ///    holds an occurrence of it, otherwise absent
    ///
    /// # Examples
    /// ```
    /// use wordle_session::core::{Feedback, LetterState::*, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("trace").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess);
    ///
    /// assert_eq!(feedback.states(), &[Absent, Correct, Correct, Present, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        score(secret.chars(), guess.chars())
    }

    /// Score raw letters, rejecting inputs of the wrong length
    ///
    /// # Errors
    /// Returns `EvalError::InvalidLength` unless both inputs have exactly 5 letters.
    pub fn evaluate_letters(secret: &[u8], guess: &[u8]) -> Result<Self, EvalError> {
        let invalid = || EvalError::InvalidLength {
            secret: secret.len(),
            guess: guess.len(),
        };
        let secret: &[u8; ROW_LENGTH] = secret.try_into().map_err(|_| invalid())?;
        let guess: &[u8; ROW_LENGTH] = guess.try_into().map_err(|_| invalid())?;
        Ok(score(secret, guess))
    }

    /// Number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(LetterState::Correct)
    }

    /// Number of present-but-misplaced positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(LetterState::Present)
    }

    fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

fn score(secret: &[u8; ROW_LENGTH], guess: &[u8; ROW_LENGTH]) -> Feedback {
    let mut result = [None; ROW_LENGTH];
    let mut pool = [0u8; ALPHABET_SIZE];

    // First pass: exact matches; everything else feeds the pool
    // Allow: Index needed to compare secret[i] with guess[i] and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..ROW_LENGTH {
        if guess[i].eq_ignore_ascii_case(&secret[i]) {
            result[i] = Some(LetterState::Correct);
        } else if let Some(index) = alphabet_index(secret[i]) {
            pool[index] += 1;
        }
    }

    // Second pass: leftmost excess occurrences win the remaining pool
    for (slot, &letter) in result.iter_mut().zip(guess) {
        if slot.is_some() {
            continue;
        }
        let present = alphabet_index(letter).is_some_and(|index| {
            if pool[index] > 0 {
                pool[index] -= 1;
                true
            } else {
                false
            }
        });
        *slot = Some(if present {
            LetterState::Present
        } else {
            LetterState::Absent
        });
    }

    let states = result.map(|s| s.unwrap_or(LetterState::Absent));
    log::trace!(
        "scored {} against {}: {states:?}",
        String::from_utf8_lossy(guess),
        String::from_utf8_lossy(secret)
    );
    Feedback(states)
}
