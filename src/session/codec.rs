//! Session text encoding
//!
//! Three flat strings make up a saved session:
//!
//! - keyboard: `{letter}:{state}|` for every key in alphabet order, where the
//!   letter is lowercase and the state is 0 (unset) to 3 (correct)
//! - board: `lbl{row}{col}:{token}:{letter}|` for every cell, row-major and
//!   0-based, where the token is the cell's colour (`white` while unscored)
//! - word: the secret, or empty when no game is saved
//!
//! The turn cursor is never stored. Decoding re-derives it from the count of
//! leading cells that hold a letter, after dropping letters from unscored
//! cells. A row that was typed but not submitted is therefore not restored.

use super::{SessionBlob, SessionError};
use crate::core::{
    ALPHABET, ALPHABET_SIZE, BOARD_CELLS, KeyboardState, LetterState, ROW_AMOUNT, ROW_LENGTH,
    Word, alphabet_index,
};
use crate::game::{Board, Cell, Game, TurnCursor};
use std::fmt::Write;

const SEPARATOR: char = '|';
const UNSCORED_TOKEN: &str = "white";
const ABSENT_TOKEN: &str = "grey";
const PRESENT_TOKEN: &str = "#D8AF2E";
const CORRECT_TOKEN: &str = "#5EA83D";

/// Everything decoded from a saved session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub keyboard: KeyboardState,
    pub secret: Word,
    pub cursor: TurnCursor,
    pub game_over: bool,
}

impl Snapshot {
    /// Turn the snapshot back into a playable game
    #[must_use]
    pub fn into_game(self) -> Game {
        Game::from_parts(
            self.secret,
            self.board,
            self.keyboard,
            self.cursor,
            self.game_over,
        )
    }
}

const fn state_token(state: Option<LetterState>) -> &'static str {
    match state {
        None => UNSCORED_TOKEN,
        Some(LetterState::Absent) => ABSENT_TOKEN,
        Some(LetterState::Present) => PRESENT_TOKEN,
        Some(LetterState::Correct) => CORRECT_TOKEN,
    }
}

fn parse_token(token: &str) -> Option<Option<LetterState>> {
    match token {
        UNSCORED_TOKEN => Some(None),
        ABSENT_TOKEN => Some(Some(LetterState::Absent)),
        PRESENT_TOKEN => Some(Some(LetterState::Present)),
        CORRECT_TOKEN => Some(Some(LetterState::Correct)),
        _ => None,
    }
}

/// Encode the board, keyboard and secret
///
/// A missing secret yields the empty "no saved game" blob.
#[must_use]
pub fn encode(board: &Board, keyboard: &KeyboardState, secret: Option<&Word>) -> SessionBlob {
    let Some(secret) = secret else {
        return SessionBlob::empty();
    };

    let mut keyboard_text = String::with_capacity(ALPHABET_SIZE * 4);
    for (letter, state) in keyboard.iter() {
        let code = state.map_or(0, LetterState::code);
        let _ = write!(keyboard_text, "{}:{code}{SEPARATOR}", char::from(letter));
    }

    let mut board_text = String::with_capacity(BOARD_CELLS * 18);
    for (index, cell) in board.cells().iter().enumerate() {
        let (row, col) = (index / ROW_LENGTH, index % ROW_LENGTH);
        let letter = cell.letter.map(char::from).map(String::from).unwrap_or_default();
        let _ = write!(
            board_text,
            "lbl{row}{col}:{}:{letter}{SEPARATOR}",
            state_token(cell.state)
        );
    }

    SessionBlob {
        keyboard: keyboard_text,
        board: board_text,
        word: secret.text().to_string(),
    }
}

/// Encode a whole game
#[must_use]
pub fn encode_game(game: &Game) -> SessionBlob {
    encode(game.board(), game.keyboard(), Some(game.secret()))
}

/// Decode a saved session
///
/// Returns `Ok(None)` for the empty-secret sentinel.
///
/// # Errors
/// Returns `SessionError::Corrupt` if any field is malformed: wrong entry
/// count, unknown key or cell name, non-integer or out-of-range state, unknown
/// colour token, a scored cell without a letter, scored cells that do not form
/// whole leading rows, or an invalid secret.
pub fn decode(blob: &SessionBlob) -> Result<Option<Snapshot>, SessionError> {
    if !blob.is_present() {
        return Ok(None);
    }

    let secret = Word::new(blob.word.as_str())
        .map_err(|e| corrupt(format!("secret {:?}: {e}", blob.word)))?;
    let keyboard = decode_keyboard(&blob.keyboard)?;
    let board = decode_board(&blob.board)?;
    let (cursor, game_over) = derive_cursor(&board)?;

    log::debug!(
        "decoded session at row {} pointer {}",
        cursor.current_row,
        cursor.input_pointer
    );

    Ok(Some(Snapshot {
        board,
        keyboard,
        secret,
        cursor,
        game_over,
    }))
}

fn corrupt(reason: impl Into<String>) -> SessionError {
    SessionError::Corrupt(reason.into())
}

fn split_entries<'a>(
    text: &'a str,
    expected: usize,
    what: &str,
) -> Result<Vec<&'a str>, SessionError> {
    let body = text
        .strip_suffix(SEPARATOR)
        .ok_or_else(|| corrupt(format!("{what} string lacks trailing separator")))?;
    let entries: Vec<&str> = body.split(SEPARATOR).collect();
    if entries.len() != expected {
        return Err(corrupt(format!(
            "{what} string has {} entries, expected {expected}",
            entries.len()
        )));
    }
    Ok(entries)
}

fn decode_keyboard(text: &str) -> Result<KeyboardState, SessionError> {
    let mut keyboard = KeyboardState::new();
    let mut seen = [false; ALPHABET_SIZE];

    for entry in split_entries(text, ALPHABET_SIZE, "keyboard")? {
        let (key, code) = entry
            .split_once(':')
            .ok_or_else(|| corrupt(format!("keyboard entry {entry:?} lacks ':'")))?;

        let letter = match key.as_bytes() {
            &[letter] if ALPHABET.contains(&letter) => letter,
            _ => return Err(corrupt(format!("unknown keyboard key {key:?}"))),
        };
        let index = alphabet_index(letter).ok_or_else(|| corrupt("key outside alphabet"))?;
        if std::mem::replace(&mut seen[index], true) {
            return Err(corrupt(format!("duplicate keyboard key {key:?}")));
        }

        let code: u8 = code
            .parse()
            .map_err(|_| corrupt(format!("keyboard state {code:?} is not an integer")))?;
        let state = match code {
            0 => None,
            code => Some(LetterState::from_code(code).ok_or_else(|| {
                corrupt(format!("keyboard state {code} out of range"))
            })?),
        };
        keyboard.set(letter, state);
    }

    Ok(keyboard)
}

fn parse_cell_name(name: &str) -> Option<usize> {
    let digits = name.strip_prefix("lbl")?.as_bytes();
    let &[row, col] = digits else { return None };
    let row = usize::from(row.checked_sub(b'0')?);
    let col = usize::from(col.checked_sub(b'0')?);
    (row < ROW_AMOUNT && col < ROW_LENGTH).then_some(row * ROW_LENGTH + col)
}

fn decode_board(text: &str) -> Result<Board, SessionError> {
    let mut board = Board::new();
    let mut seen = [false; BOARD_CELLS];

    for entry in split_entries(text, BOARD_CELLS, "board")? {
        let mut fields = entry.splitn(3, ':');
        let (Some(name), Some(token), Some(letter)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(corrupt(format!("board entry {entry:?} needs three fields")));
        };

        let index =
            parse_cell_name(name).ok_or_else(|| corrupt(format!("bad cell name {name:?}")))?;
        if std::mem::replace(&mut seen[index], true) {
            return Err(corrupt(format!("duplicate cell {name:?}")));
        }

        let state =
            parse_token(token).ok_or_else(|| corrupt(format!("unknown cell token {token:?}")))?;

        // Unscored cells never keep their letter
        let letter = match (state, letter.as_bytes()) {
            (None, _) | (Some(_), []) => None,
            (Some(_), &[letter]) if letter.is_ascii_alphabetic() => {
                Some(letter.to_ascii_uppercase())
            }
            _ => return Err(corrupt(format!("bad letter {letter:?} in {name}"))),
        };

        board.set_cell(index, Cell { letter, state });
    }

    Ok(board)
}

fn derive_cursor(board: &Board) -> Result<(TurnCursor, bool), SessionError> {
    let cells = board.cells();
    let pointer = cells.iter().take_while(|c| c.letter.is_some()).count();

    if let Some(stray) = cells.iter().position(|c| c.is_painted() && c.letter.is_none()) {
        return Err(corrupt(format!("scored cell {stray} has no letter")));
    }
    if cells[pointer..].iter().any(|c| c.letter.is_some()) {
        return Err(corrupt("scored cells do not form a prefix"));
    }
    if pointer % ROW_LENGTH != 0 {
        return Err(corrupt(format!("scored cells end mid-row at {pointer}")));
    }

    let committed = pointer / ROW_LENGTH;
    let solved = |row| board.row_feedback(row).is_some_and(|f| f.is_all_correct());
    if let Some(row) = (0..committed.saturating_sub(1)).find(|&row| solved(row)) {
        return Err(corrupt(format!("row {row} is solved but play continued")));
    }
    let won = committed > 0 && solved(committed - 1);
    let game_over = won || committed == ROW_AMOUNT;
    let current_row = if game_over { committed } else { committed + 1 };

    Ok((
        TurnCursor {
            current_row,
            input_pointer: pointer,
        },
        game_over,
    ))
}
