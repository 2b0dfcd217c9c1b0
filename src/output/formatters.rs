//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardState, LetterState, ROW_LENGTH};
use colored::{ColoredString, Colorize};

/// Paint one letter the way its state is shown on the board
#[must_use]
pub fn paint_letter(letter: char, state: Option<LetterState>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::Present) => text.black().on_yellow().bold(),
        Some(LetterState::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a scored guess as coloured tiles
#[must_use]
pub fn colored_row(letters: &[u8; ROW_LENGTH], feedback: &Feedback) -> String {
    letters
        .iter()
        .zip(feedback.states())
        .map(|(&letter, &state)| paint_letter(char::from(letter), Some(state)).to_string())
        .collect()
}

/// Render the keyboard in QWERTY layout with each key's best state
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardState) -> Vec<String> {
    ["qwertyuiop", "asdfghjkl", "zxcvbnm"]
        .iter()
        .map(|row| {
            row.bytes()
                .map(|key| paint_letter(char::from(key), keyboard.get(key)).to_string())
                .collect()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss)]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
