//! Candidate move generation
//!
//! The search frontier is limited to empty cells within Chebyshev distance
//! two of any stone. Moves come out in row-major order, which every
//! "first acceptable move" policy downstream relies on for tie-breaking.

use crate::board::{Bitboard, Board, Pos};

/// Chebyshev radius of the "near" set around each stone
pub const NEAR_RADIUS: i32 = 2;

/// Candidate moves in row-major order.
///
/// An empty board yields only the center. A full board yields nothing.
pub fn candidates(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let occupied = board.occupied();
    let mut near = Bitboard::new();
    for stone in occupied.iter_ones() {
        for dr in -NEAR_RADIUS..=NEAR_RADIUS {
            for dc in -NEAR_RADIUS..=NEAR_RADIUS {
                if let Some(pos) = Pos::try_new(stone.row as i32 + dr, stone.col as i32 + dc) {
                    near.set(pos);
                }
            }
        }
    }

    near.without(occupied).iter_ones().collect()
}
