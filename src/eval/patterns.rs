//! Line patterns and their scores
//!
//! A pattern is judged for a hypothetical stone: the cell is treated as
//! holding the player's color without being written to the board, so a
//! pattern check can never leave the board mutated.

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::rules::run_length;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Placement that creates an open four: _OOOO_
    pub const OPEN_FOUR: i32 = 100_000;
    /// Placement that creates an open three: _OOO_
    pub const OPEN_THREE: i32 = 10_000;
}

/// Contiguous run through a cell along one axis, split around the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRun {
    /// Stones past the cell in the `(dr, dc)` direction
    pub forward: i32,
    /// Stones past the cell in the `(-dr, -dc)` direction
    pub backward: i32,
}

impl LineRun {
    /// Measure the run `color` would have through `pos` along `(dr, dc)`.
    #[inline]
    pub fn measure(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> Self {
        Self {
            forward: run_length(board, pos, dr, dc, color),
            backward: run_length(board, pos, -dr, -dc, color),
        }
    }

    /// Run length including the cell itself
    #[inline]
    pub fn total(&self) -> i32 {
        self.forward + self.backward + 1
    }

    /// Both cells just beyond the run are on the board and empty.
    #[inline]
    pub fn is_open(&self, board: &Board, pos: Pos, dr: i32, dc: i32) -> bool {
        let open = |end: Option<Pos>| end.is_some_and(|p| board.is_empty(p));
        open(pos.offset(dr, dc, self.forward + 1)) && open(pos.offset(-dr, -dc, self.backward + 1))
    }
}

/// True if some axis through `pos` would hold an open run of exactly `len`.
fn makes_open_run(board: &Board, pos: Pos, color: Stone, len: i32) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let run = LineRun::measure(board, pos, dr, dc, color);
        run.total() == len && run.is_open(board, pos, dr, dc)
    })
}

/// Would a `color` stone at `pos` create an open four?
#[inline]
pub fn is_open_four(board: &Board, pos: Pos, color: Stone) -> bool {
    makes_open_run(board, pos, color, 4)
}

/// Would a `color` stone at `pos` create an open three?
#[inline]
pub fn is_open_three(board: &Board, pos: Pos, color: Stone) -> bool {
    makes_open_run(board, pos, color, 3)
}

/// A forcing move creates an open three or an open four.
#[inline]
pub fn is_forcing(board: &Board, pos: Pos, color: Stone) -> bool {
    is_open_four(board, pos, color) || is_open_three(board, pos, color)
}
