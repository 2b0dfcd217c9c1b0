//! Core domain types for Wordle
//!
//! This module contains the fundamental game types: validated words, per-letter
//! states, guess feedback and the cumulative keyboard state. Everything here is
//! pure and free of I/O.

mod feedback;
mod keyboard;
mod letter;
mod word;

pub use feedback::{EvalError, Feedback};
pub use keyboard::KeyboardState;
pub use letter::LetterState;
pub use word::{Word, WordError};

/// Number of letters in a word (and cells in a board row)
pub const ROW_LENGTH: usize = 5;

/// Number of attempts (board rows) per game
pub const ROW_AMOUNT: usize = 6;

/// Total number of board cells
pub const BOARD_CELLS: usize = ROW_LENGTH * ROW_AMOUNT;

/// Number of keyboard keys
pub const ALPHABET_SIZE: usize = 26;

/// Keyboard alphabet, in the order keys are stored and serialized
pub const ALPHABET: &[u8; ALPHABET_SIZE] = b"abcdefghijklmnopqrstuvwxyz";

/// Position of an ASCII letter (either case) in [`ALPHABET`]
#[inline]
#[must_use]
pub fn alphabet_index(letter: u8) -> Option<usize> {
    let lower = letter.to_ascii_lowercase();
    lower.is_ascii_lowercase().then(|| usize::from(lower - b'a'))
}
