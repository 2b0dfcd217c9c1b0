//! Turn state machine
//!
//! A [`Game`] owns the board, the keyboard state, the turn cursor and the
//! secret word. Letters are buffered into the active row; a full row can be
//! submitted, which checks the word against the dictionary, scores it, folds
//! the result into the keyboard and either unlocks the next row or finishes
//! the game.
//!
//! Invalid input (row not full, unknown word, game already over) is never an
//! error: the operation does nothing and the observer receives an advisory
//! [`Message`].

mod board;

pub use board::{Board, Cell};

use crate::core::{Feedback, KeyboardState, ROW_AMOUNT, ROW_LENGTH, Word};
use crate::wordlists::WordSource;
use std::fmt;

/// Position of the player within the board
///
/// `current_row` is 1-based; `input_pointer` counts the cells typed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnCursor {
    pub current_row: usize,
    pub input_pointer: usize,
}

impl Default for TurnCursor {
    fn default() -> Self {
        Self {
            current_row: 1,
            input_pointer: 0,
        }
    }
}

impl TurnCursor {
    /// First cell index of the active row
    #[inline]
    #[must_use]
    pub const fn row_start(&self) -> usize {
        (self.current_row - 1) * ROW_LENGTH
    }

    /// One past the last cell index of the active row
    #[inline]
    #[must_use]
    pub const fn row_end(&self) -> usize {
        self.current_row * ROW_LENGTH
    }

    /// Check if the active row holds exactly `ROW_LENGTH` letters
    #[inline]
    #[must_use]
    pub const fn row_is_full(&self) -> bool {
        self.input_pointer == self.row_end()
    }
}

/// User-facing advisory messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    TooFewLetters,
    NotInDictionary,
    Won { secret: Word, attempt: usize },
    Lost { secret: Word },
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewLetters => f.write_str("too few letters"),
            Self::NotInDictionary => f.write_str("word not in dictionary"),
            Self::Won { secret, .. } => write!(f, "Congratulations! The word was {secret}"),
            Self::Lost { secret } => write!(f, "Too bad! The word was {secret}"),
        }
    }
}

/// One-way notifications from the game to whatever renders it
///
/// Every method defaults to a no-op.
pub trait GameObserver {
    /// A row (0-based) was scored
    fn on_row_evaluated(&mut self, _row: usize, _feedback: &Feedback) {}

    /// The keyboard state changed
    fn on_keyboard_updated(&mut self, _keyboard: &KeyboardState) {}

    /// An advisory message should be shown
    fn on_message(&mut self, _message: &Message) {}

    /// Any pending message should be cleared
    fn on_message_cleared(&mut self) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The game is already finished
    Ignored,
    /// The active row is not full
    RowIncomplete,
    /// The row spells a word the dictionary does not know
    WordNotRecognized,
    /// The row was scored and the next row is unlocked
    Continue { feedback: Feedback },
    /// The row was all correct; `attempt` is the 1-based row number
    Won { attempt: usize, feedback: Feedback },
    /// The last row was scored without a win
    Lost { feedback: Feedback },
}

/// A single game in progress (or finished)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    secret: Word,
    board: Board,
    keyboard: KeyboardState,
    cursor: TurnCursor,
    game_over: bool,
}

impl Game {
    /// Start a fresh game for `secret`
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            board: Board::new(),
            keyboard: KeyboardState::new(),
            cursor: TurnCursor::default(),
            game_over: false,
        }
    }

    /// Rebuild a game from restored parts
    pub(crate) const fn from_parts(
        secret: Word,
        board: Board,
        keyboard: KeyboardState,
        cursor: TurnCursor,
        game_over: bool,
    ) -> Self {
        Self {
            secret,
            board,
            keyboard,
            cursor,
            game_over,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn cursor(&self) -> TurnCursor {
        self.cursor
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.game_over
    }

    /// Buffer a letter into the active row
    ///
    /// Returns `false` (and changes nothing) when the game is over, the row is
    /// full or `letter` is not an ASCII letter.
    pub fn type_letter(&mut self, letter: u8, observer: &mut dyn GameObserver) -> bool {
        if self.game_over || !letter.is_ascii_alphabetic() {
            return false;
        }
        observer.on_message_cleared();

        if self.cursor.input_pointer >= self.cursor.row_end() {
            return false;
        }

        self.board
            .set_letter(self.cursor.input_pointer, Some(letter.to_ascii_uppercase()));
        self.cursor.input_pointer += 1;
        true
    }

    /// Remove the last letter of the active row
    ///
    /// Returns `false` when the game is over or the active row is empty.
    pub fn erase(&mut self, observer: &mut dyn GameObserver) -> bool {
        if self.game_over {
            return false;
        }
        observer.on_message_cleared();

        if self.cursor.input_pointer <= self.cursor.row_start() {
            return false;
        }

        self.cursor.input_pointer -= 1;
        self.board.set_letter(self.cursor.input_pointer, None);
        true
    }

    /// Submit the active row
    pub fn submit(
        &mut self,
        words: &dyn WordSource,
        observer: &mut dyn GameObserver,
    ) -> SubmitOutcome {
        if self.game_over {
            return SubmitOutcome::Ignored;
        }

        if !self.cursor.row_is_full() {
            observer.on_message(&Message::TooFewLetters);
            return SubmitOutcome::RowIncomplete;
        }

        let row = self.cursor.current_row - 1;
        let Some(guess) = self.row_word(row).filter(|w| words.contains(w)) else {
            observer.on_message(&Message::NotInDictionary);
            return SubmitOutcome::WordNotRecognized;
        };

        let feedback = Feedback::evaluate(&self.secret, &guess);
        log::debug!("row {} guess {guess}: {feedback}", self.cursor.current_row);

        self.board.paint_row(row, &feedback);
        observer.on_row_evaluated(row, &feedback);

        self.keyboard.apply(&guess, &feedback);
        observer.on_keyboard_updated(&self.keyboard);

        if feedback.is_all_correct() {
            self.game_over = true;
            let attempt = self.cursor.current_row;
            log::info!("game won in {attempt} attempts");
            observer.on_message(&Message::Won {
                secret: self.secret.clone(),
                attempt,
            });
            SubmitOutcome::Won { attempt, feedback }
        } else if self.cursor.current_row == ROW_AMOUNT {
            self.game_over = true;
            log::info!("game lost, secret was {}", self.secret);
            observer.on_message(&Message::Lost {
                secret: self.secret.clone(),
            });
            SubmitOutcome::Lost { feedback }
        } else {
            self.cursor.current_row += 1;
            SubmitOutcome::Continue { feedback }
        }
    }

    /// Reset everything and adopt a new secret
    pub fn new_game(&mut self, secret: Word) {
        log::info!("starting new game");
        self.secret = secret;
        self.board.clear();
        self.keyboard.reset();
        self.cursor = TurnCursor::default();
        self.game_over = false;
    }

    fn row_word(&self, row: usize) -> Option<Word> {
        let letters = self.board.row_letters(row);
        let mut chars = [0u8; ROW_LENGTH];
        for (slot, letter) in chars.iter_mut().zip(letters) {
            *slot = letter?;
        }
        Word::from_letters(chars).ok()
    }
}
