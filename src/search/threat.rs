//! Threat-space search for forced wins
//!
//! The attacker may only play forcing moves (open three or open four); the
//! defender is checked against every candidate reply. A line is proven when
//! no reply refutes it within the threat horizon.
//!
//! The search is one-sided: `false` means "no forced win found within the
//! horizon", never "the opponent wins".

use crate::board::{Board, Pos};
use crate::eval::is_forcing;
use crate::rules::wins_through;

use super::candidates::candidates;

/// Result of a root threat search
#[derive(Debug, Clone)]
pub struct ThreatResult {
    /// First root move after which a forced win was proven
    pub winning_move: Option<Pos>,
    /// Nodes visited
    pub nodes: u64,
}

impl ThreatResult {
    #[inline]
    pub fn found(&self) -> bool {
        self.winning_move.is_some()
    }
}

/// Threat searcher with a node counter for statistics
#[derive(Debug, Default)]
pub struct ThreatSearcher {
    nodes: u64,
}

impl ThreatSearcher {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited since the last root search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Root threat search for the side to move.
    ///
    /// Each candidate is tried as an extra stone for the side to move, which
    /// keeps the turn, and the first one from which `can_force_win` succeeds
    /// is returned.
    pub fn search(&mut self, board: &Board, threat_depth: u8) -> ThreatResult {
        self.nodes = 0;
        let mut work = board.clone();
        let color = work.turn();

        let mut winning_move = None;
        for pos in candidates(&work) {
            work.place_stone(pos, color);
            let forced = self.can_force_win(&mut work, threat_depth);
            work.remove_stone(pos);
            if forced {
                winning_move = Some(pos);
                break;
            }
        }

        ThreatResult {
            winning_move,
            nodes: self.nodes,
        }
    }

    /// Can the side to move force a win within `threat_depth` threat plies?
    ///
    /// The board is restored before returning.
    pub fn can_force_win(&mut self, board: &mut Board, threat_depth: u8) -> bool {
        self.nodes += 1;
        if threat_depth == 0 {
            return false;
        }

        let attacker = board.turn();
        for attack in candidates(board) {
            if !is_forcing(board, attack, attacker) {
                continue;
            }

            board.play(attack);
            if wins_through(board, attack) {
                board.undo(attack);
                return true;
            }

            // Any single reply that stops the follow-up refutes this attack
            let mut refuted = false;
            for reply in candidates(board) {
                board.play(reply);
                let forced = self.can_force_win(board, threat_depth - 1);
                board.undo(reply);
                if !forced {
                    refuted = true;
                    break;
                }
            }

            board.undo(attack);
            if !refuted {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Stone, TOTAL_CELLS};

    fn sample_board() -> Board {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 6), Stone::Black);
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(8, 7), Stone::White);
        board
    }

    #[test]
    fn test_zero_horizon_is_false() {
        let mut searcher = ThreatSearcher::new();
        let mut board = sample_board();
        assert!(!searcher.can_force_win(&mut board, 0));

        let mut board = Board::new();
        for c in 3..7 {
            board.place_stone(Pos::new(2, c), Stone::Black);
        }
        assert!(!searcher.can_force_win(&mut board, 0));
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut searcher = ThreatSearcher::new();
        let mut board = sample_board();
        let before = board.clone();
        let _ = searcher.can_force_win(&mut board, 2);
        assert_eq!(board, before);
        assert!(searcher.nodes() > 0);
    }

    #[test]
    fn test_forcing_move_that_also_wins() {
        // (5,5) finishes the vertical five and opens a horizontal three
        let mut board = Board::new();
        for r in 1..5 {
            board.place_stone(Pos::new(r, 5), Stone::Black);
        }
        board.place_stone(Pos::new(0, 5), Stone::White);
        board.place_stone(Pos::new(5, 6), Stone::Black);
        board.place_stone(Pos::new(5, 7), Stone::Black);

        let mut searcher = ThreatSearcher::new();
        assert!(searcher.can_force_win(&mut board, 1));
    }

    #[test]
    fn test_plain_five_is_not_forcing() {
        // Completing five with no open pattern elsewhere is not a threat move
        let mut board = Board::new();
        for c in 1..5 {
            board.place_stone(Pos::new(0, c), Stone::Black);
        }
        board.place_stone(Pos::new(0, 0), Stone::White);
        let mut searcher = ThreatSearcher::new();
        assert!(!searcher.can_force_win(&mut board, 1));
    }

    /// Black column three on (4..7, 7) and pairs on rows 2 and 8; White scattered
    fn double_threat_board() -> Board {
        let mut board = Board::with_turn(Stone::Black);
        for (r, c) in [(4, 7), (5, 7), (6, 7), (2, 8), (2, 9), (8, 8), (8, 9)] {
            board.place_stone(Pos::new(r, c), Stone::Black);
        }
        for (r, c) in [(12, 0), (12, 2), (12, 4), (0, 14), (14, 14), (14, 10), (10, 14)] {
            board.place_stone(Pos::new(r, c), Stone::White);
        }
        board
    }

    #[test]
    fn test_forced_win_survives_every_reply() {
        let mut board = double_threat_board();
        board.place_stone(Pos::new(1, 9), Stone::Black);
        let before = board.clone();

        let mut searcher = ThreatSearcher::new();
        assert!(searcher.can_force_win(&mut board, 2));
        assert_eq!(board, before);
    }

    #[test]
    fn test_root_search_finds_forced_win() {
        let mut searcher = ThreatSearcher::new();
        let result = searcher.search(&double_threat_board(), 2);
        assert_eq!(result.winning_move, Some(Pos::new(1, 9)));
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_full_board_cannot_force() {
        let mut board = Board::new();
        for idx in 0..TOTAL_CELLS {
            board.play(Pos::from_index(idx));
        }
        let mut searcher = ThreatSearcher::new();
        assert!(!searcher.can_force_win(&mut board, 2));
        assert!(!searcher.search(&board, 2).found());
    }
}
