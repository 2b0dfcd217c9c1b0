//! Score a single guess
//!
//! Evaluates a guess against a chosen secret without starting a game.

use crate::core::{Feedback, Word, WordError};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not a valid 5-letter word.
pub fn score_words(secret: &str, guess: &str) -> Result<ScoreResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = Feedback::evaluate(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}
