//! Depth-limited negamax with alpha-beta pruning
//!
//! Moves are searched in candidate order with no further ordering, and the
//! static evaluator is applied at the horizon. The board is explored in
//! place with `play`/`undo` pairs.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//! board.set_turn(Stone::White);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, 1);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Pos};
use crate::eval::evaluate;

use super::candidates::candidates;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = 1_000_000_000;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Negamax value of the best move for the side to move
    pub score: i32,
    /// Total nodes searched
    pub nodes: u64,
}

/// Negamax searcher
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited since the last root search
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Root search: every candidate is played and scored with
    /// `-negamax(depth, -INF, INF)`. Only a strictly greater value replaces
    /// the running best, so ties keep the earliest candidate.
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes = 0;
        let mut work = board.clone();

        let mut best_move = None;
        let mut best_score = -INF;
        for pos in candidates(&work) {
            work.play(pos);
            let score = -self.negamax(&mut work, depth, -INF, INF);
            work.undo(pos);

            if score > best_score || best_move.is_none() {
                best_score = score;
                best_move = Some(pos);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    /// Best achievable value for the side to move, bounded by `[alpha, beta]`.
    pub fn negamax(&mut self, board: &mut Board, depth: u8, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return evaluate(board);
        }

        for pos in candidates(board) {
            board.play(pos);
            let value = -self.negamax(board, depth - 1, -beta, -alpha);
            board.undo(pos);

            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }

        alpha
    }
}
