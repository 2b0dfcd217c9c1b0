//! Game board: a fixed grid of letter cells

use crate::core::{BOARD_CELLS, Feedback, LetterState, ROW_AMOUNT, ROW_LENGTH};

/// One board cell
///
/// A cell carries a state only once its row has been evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<u8>,
    pub state: Option<LetterState>,
}

impl Cell {
    /// Check if the cell belongs to an evaluated row
    #[inline]
    #[must_use]
    pub const fn is_painted(&self) -> bool {
        self.state.is_some()
    }
}

/// `ROW_AMOUNT` x `ROW_LENGTH` grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell {
                letter: None,
                state: None,
            }; BOARD_CELLS],
        }
    }

    /// All cells in row-major order
    #[must_use]
    pub const fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Cell at a 0-based row and column
    ///
    /// # Panics
    /// Panics if `row >= ROW_AMOUNT` or `col >= ROW_LENGTH`
    #[must_use]
    pub const fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < ROW_AMOUNT && col < ROW_LENGTH);
        self.cells[row * ROW_LENGTH + col]
    }

    /// Letters of a 0-based row, `None` for empty cells
    #[must_use]
    pub fn row_letters(&self, row: usize) -> [Option<u8>; ROW_LENGTH] {
        let start = row * ROW_LENGTH;
        std::array::from_fn(|col| self.cells[start + col].letter)
    }

    /// Feedback of a 0-based row, if it was evaluated
    #[must_use]
    pub fn row_feedback(&self, row: usize) -> Option<Feedback> {
        let start = row * ROW_LENGTH;
        let mut states = [LetterState::Absent; ROW_LENGTH];
        for (col, slot) in states.iter_mut().enumerate() {
            *slot = self.cells[start + col].state?;
        }
        Some(Feedback::new(states))
    }

    pub(crate) fn set_cell(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    pub(crate) fn set_letter(&mut self, index: usize, letter: Option<u8>) {
        self.cells[index].letter = letter;
    }

    pub(crate) fn paint_row(&mut self, row: usize, feedback: &Feedback) {
        let start = row * ROW_LENGTH;
        for (cell, &state) in self.cells[start..start + ROW_LENGTH]
            .iter_mut()
            .zip(feedback.states())
        {
            cell.state = Some(state);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [Cell::default(); BOARD_CELLS];
    }
}
