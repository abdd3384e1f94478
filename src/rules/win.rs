//! Win condition checking
//!
//! A player wins by owning five or more contiguous stones along one of the
//! four axes. Overlines count.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Number of contiguous `color` stones starting one step past `pos` along
/// `(dr, dc)`. The cell at `pos` itself is not inspected.
#[inline]
pub fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> i32 {
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while board.is_inside(r, c) && board.get(Pos::new(r as u8, c as u8)) == color {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Fast five-in-a-row check at a specific position.
///
/// Treats `pos` as holding `color` whatever it currently holds, so it
/// answers "would a stone here win" without mutating the board.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, color: Stone) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        run_length(board, pos, dr, dc, color) + run_length(board, pos, -dr, -dc, color) + 1 >= 5
    })
}

/// True iff the stone at `pos` is part of a run of five or more.
#[inline]
pub fn wins_through(board: &Board, pos: Pos) -> bool {
    has_five_at_pos(board, pos, board.get(pos))
}

/// The full winning run through `pos`, ordered from one end to the other.
pub fn find_five_line_at_pos(board: &Board, pos: Pos) -> Option<Vec<Pos>> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, -dr, -dc, color);
        let fwd = run_length(board, pos, dr, dc, color);
        if back + fwd + 1 >= 5 {
            let line = (-back..=fwd).filter_map(|s| pos.offset(dr, dc, s)).collect();
            return Some(line);
        }
    }
    None
}

/// Check for a winner anywhere on the board
pub fn check_winner(board: &Board) -> Option<Stone> {
    board
        .occupied()
        .iter_ones()
        .find(|&pos| wins_through(board, pos))
        .map(|pos| board.get(pos))
}
