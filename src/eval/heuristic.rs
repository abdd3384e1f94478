//! Static evaluation
//!
//! Scores the latent offense of the side to move: every empty cell where a
//! stone of theirs would make an open four or open three adds to the total.
//! The opponent's threats are not counted here; negamax sees them one ply
//! later, from the opponent's side.

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};

use super::patterns::{is_open_four, is_open_three, PatternScore};

/// Evaluate the position from the perspective of `board.turn()`.
pub fn evaluate(board: &Board) -> i32 {
    let color = board.turn();
    if color == Stone::Empty {
        return 0;
    }

    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&pos| board.is_empty(pos))
        .map(|pos| cell_score(board, pos, color))
        .sum()
}

/// Open four and open three bonuses are independent and accumulate.
#[inline]
fn cell_score(board: &Board, pos: Pos, color: Stone) -> i32 {
    let mut score = 0;
    if is_open_four(board, pos, color) {
        score += PatternScore::OPEN_FOUR;
    }
    if is_open_three(board, pos, color) {
        score += PatternScore::OPEN_THREE;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_scores_zero() {
        assert_eq!(evaluate(&Board::new()), 0);
    }

    #[test]
    fn test_single_pair_open_threes() {
        // Black pair at (7,6)-(7,7): (7,5) and (7,8) each make an open three
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 6), Stone::Black);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        assert_eq!(evaluate(&board), 2 * PatternScore::OPEN_THREE);
    }

    #[test]
    fn test_only_side_to_move_counts() {
        let mut board = Board::with_turn(Stone::White);
        board.place_stone(Pos::new(7, 6), Stone::Black);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_open_three_yields_open_fours() {
        let mut board = Board::new();
        for c in 5..8 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        // (7,4) and (7,8) make open fours; (7,3) and (7,9) stay disconnected
        assert_eq!(evaluate(&board), 2 * PatternScore::OPEN_FOUR);
    }

    #[test]
    fn test_both_bonuses_accumulate_on_one_cell() {
        // (7,7) extends a horizontal pair to three and a vertical triple to four
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 5), Stone::Black);
        board.place_stone(Pos::new(7, 6), Stone::Black);
        for r in 4..7 {
            board.place_stone(Pos::new(r, 7), Stone::Black);
        }
        let pos = Pos::new(7, 7);
        assert!(is_open_four(&board, pos, Stone::Black));
        assert!(is_open_three(&board, pos, Stone::Black));
        assert_eq!(
            cell_score(&board, pos, Stone::Black),
            PatternScore::OPEN_FOUR + PatternScore::OPEN_THREE
        );
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let mut board = Board::new();
        board.place_stone(Pos::new(3, 3), Stone::Black);
        board.place_stone(Pos::new(3, 4), Stone::Black);
        let before = board.clone();
        let _ = evaluate(&board);
        assert_eq!(board, before);
    }
}
