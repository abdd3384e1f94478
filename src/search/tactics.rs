//! One-ply tactics: immediate wins and immediate blocks

use crate::board::{Board, Pos, Stone};
use crate::rules::has_five_at_pos;

use super::candidates::candidates;

/// First candidate (in generator order) where a `color` stone completes five.
pub fn find_winning_cell(board: &Board, color: Stone) -> Option<Pos> {
    candidates(board)
        .into_iter()
        .find(|&pos| has_five_at_pos(board, pos, color))
}

/// A move that wins on the spot for the side to move.
#[inline]
pub fn find_immediate_win(board: &Board) -> Option<Pos> {
    find_winning_cell(board, board.turn())
}

/// The cell the opponent would win on next turn. Occupying it blocks.
#[inline]
pub fn find_immediate_block(board: &Board) -> Option<Pos> {
    find_winning_cell(board, board.turn().opponent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::wins_through;

    #[test]
    fn test_no_tactics_on_empty_board() {
        let board = Board::new();
        assert_eq!(find_immediate_win(&board), None);
        assert_eq!(find_immediate_block(&board), None);
    }

    #[test]
    fn test_win_completes_five() {
        let mut board = Board::new();
        for c in 3..7 {
            board.place_stone(Pos::new(4, c), Stone::Black);
        }
        let win = find_immediate_win(&board).unwrap();
        // (4,2) precedes (4,7) in row-major order
        assert_eq!(win, Pos::new(4, 2));

        board.play(win);
        assert!(wins_through(&board, win));
    }

    #[test]
    fn test_gap_win() {
        let mut board = Board::with_turn(Stone::White);
        for r in [1, 2, 4, 5] {
            board.place_stone(Pos::new(r, 9), Stone::White);
        }
        assert_eq!(find_immediate_win(&board), Some(Pos::new(3, 9)));
    }

    #[test]
    fn test_block_uses_opponent_color() {
        let mut board = Board::new();
        board.place_stone(Pos::new(10, 0), Stone::Black);
        for c in 1..5 {
            board.place_stone(Pos::new(10, c), Stone::White);
        }
        assert_eq!(find_immediate_win(&board), None);
        assert_eq!(find_immediate_block(&board), Some(Pos::new(10, 5)));
    }

    #[test]
    fn test_open_three_is_not_mate_in_one() {
        let mut board = Board::new();
        for c in 6..9 {
            board.place_stone(Pos::new(7, c), Stone::White);
        }
        assert_eq!(find_immediate_block(&board), None);
    }
}
