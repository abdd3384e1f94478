//! Board structure: grid plus side to move

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::GameError;

/// Game board with the side to move.
///
/// `play`/`undo` are the search primitives: they do no bounds or occupancy
/// checks and must be paired in strict LIFO order. `place_stone`/`remove_stone`
/// touch a single cell without changing the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
    /// Occupied cells, kept in sync with `cells`
    occupied: Bitboard,
    turn: Stone,
}

impl Board {
    /// Empty board, Black to move
    pub fn new() -> Self {
        Self::with_turn(Stone::Black)
    }

    pub fn with_turn(turn: Stone) -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
            occupied: Bitboard::new(),
            turn,
        }
    }

    /// Build a board from signed cell values (+1 Black, -1 White, 0 Empty).
    pub fn from_rows(rows: &[[i8; BOARD_SIZE]; BOARD_SIZE], turn: Stone) -> Result<Self, GameError> {
        if turn == Stone::Empty {
            return Err(GameError::NoSideToMove);
        }
        let mut board = Self::with_turn(turn);
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                let stone = Stone::from_value(value).ok_or(GameError::InvalidCell {
                    row: r as u8,
                    col: c as u8,
                    value,
                })?;
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        Ok(board)
    }

    /// Signed cell values, the inverse of `from_rows`
    pub fn to_rows(&self) -> [[i8; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0i8; BOARD_SIZE]; BOARD_SIZE];
        for (idx, stone) in self.cells.iter().enumerate() {
            rows[idx / BOARD_SIZE][idx % BOARD_SIZE] = stone.value();
        }
        rows
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Stone {
        self.turn
    }

    #[inline]
    pub fn set_turn(&mut self, turn: Stone) {
        self.turn = turn;
    }

    /// Range check against [0, BOARD_SIZE)
    #[inline]
    pub fn is_inside(&self, row: i32, col: i32) -> bool {
        Pos::is_valid(row, col)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.cells[pos.to_index()] == Stone::Empty
    }

    /// Set one cell without touching the turn
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.to_index()] = stone;
        match stone {
            Stone::Empty => self.occupied.clear(pos),
            _ => self.occupied.set(pos),
        }
    }

    /// Clear one cell without touching the turn
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.place_stone(pos, Stone::Empty);
    }

    /// Put the side to move's stone at `pos` and pass the turn.
    #[inline]
    pub fn play(&mut self, pos: Pos) {
        self.place_stone(pos, self.turn);
        self.turn = self.turn.opponent();
    }

    /// Revert the matching `play`.
    #[inline]
    pub fn undo(&mut self, pos: Pos) {
        self.turn = self.turn.opponent();
        self.remove_stone(pos);
    }

    /// Occupied cells
    #[inline]
    pub fn occupied(&self) -> &Bitboard {
        &self.occupied
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.occupied.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.occupied.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
