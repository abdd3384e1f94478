//! Main AI Engine integrating all search components
//!
//! This module provides the engine that picks a move for the side to move.
//! The stages run in strict priority order and the first one that yields a
//! move wins:
//!
//! 1. **Immediate win**: a candidate that completes five
//! 2. **Block**: the cell where the opponent would complete five
//! 3. **Threat space**: the first candidate after which a forced win is proven
//! 4. **Negamax**: depth-limited alpha-beta over all candidates
//!
//! A full board produces no move at all, reported as
//! [`GameError::BoardFull`] by [`AIEngine::decide`].
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut engine = AIEngine::new();
//! let board = Board::new();
//!
//! let pos = engine.decide(&board, Stone::Black).unwrap();
//! assert_eq!(pos, Pos::new(7, 7));
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::error::GameError;
use crate::search::{find_immediate_block, find_immediate_win, SearchResult, Searcher, ThreatSearcher};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Completes five in a row
    ImmediateWin,
    /// Occupies the opponent's winning cell
    Block,
    /// Forced win proven by the threat-space search
    ThreatSpace,
    /// Regular negamax search result
    Negamax,
    /// Board is full, nothing to play
    NoMove,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Negamax score for `Negamax` results, 0 otherwise
    pub score: i32,
    /// Stage that found this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn tactical(pos: Pos, search_type: SearchType, time_ms: u64, nodes: u64) -> Self {
        Self {
            best_move: Some(pos),
            score: 0,
            search_type,
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn from_negamax(result: SearchResult, nodes: u64, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: if result.best_move.is_some() {
                SearchType::Negamax
            } else {
                SearchType::NoMove
            },
            time_ms,
            nodes,
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::NoMove,
            time_ms,
            nodes: 0,
        }
    }
}

/// Search horizons for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Negamax depth below each root candidate
    pub search_depth: u8,
    /// Threat plies for the forced-win search
    pub threat_depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: 2,
            threat_depth: 2,
        }
    }
}

/// Main AI engine.
///
/// Each call works on a private copy of the board, so one engine can serve
/// boards from many games, and engines on different threads share nothing.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
    threat_searcher: ThreatSearcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Engine with the default horizons (depth 2, threat depth 2).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(),
            threat_searcher: ThreatSearcher::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Pick a move for `side` on `board`.
    ///
    /// This is the boundary contract: the side must be Black or White, and a
    /// full board is reported as [`GameError::BoardFull`].
    pub fn decide(&mut self, board: &Board, side: Stone) -> Result<Pos, GameError> {
        if side == Stone::Empty {
            return Err(GameError::NoSideToMove);
        }
        self.get_move_with_stats(board, side)
            .best_move
            .ok_or(GameError::BoardFull)
    }

    /// Get the best move for `color`, or `None` on a full board.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// `board`'s own turn is ignored; `color` is the side to move.
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();
        let elapsed = || start.elapsed().as_millis() as u64;

        if color == Stone::Empty {
            return MoveResult::no_move(elapsed());
        }

        let mut work = board.clone();
        work.set_turn(color);

        // 1. Complete our own five
        if let Some(pos) = find_immediate_win(&work) {
            debug!("{:?}: immediate win at ({}, {})", color, pos.row, pos.col);
            return MoveResult::tactical(pos, SearchType::ImmediateWin, elapsed(), 1);
        }

        // 2. Occupy the opponent's five
        if let Some(pos) = find_immediate_block(&work) {
            debug!("{:?}: blocking at ({}, {})", color, pos.row, pos.col);
            return MoveResult::tactical(pos, SearchType::Block, elapsed(), 1);
        }

        // 3. Forced win through continuous threats
        let threat = self.threat_searcher.search(&work, self.config.threat_depth);
        if let Some(pos) = threat.winning_move {
            debug!(
                "{:?}: forced win from ({}, {}) after {} nodes",
                color, pos.row, pos.col, threat.nodes
            );
            return MoveResult::tactical(pos, SearchType::ThreatSpace, elapsed(), threat.nodes);
        }

        // 4. Negamax over all candidates
        let result = self.searcher.search(&work, self.config.search_depth);
        let nodes = threat.nodes + result.nodes;
        debug!(
            "{:?}: negamax picked {:?} (score {}, {} nodes, {}ms)",
            color,
            result.best_move,
            result.score,
            nodes,
            elapsed()
        );
        MoveResult::from_negamax(result, nodes, elapsed())
    }
}

/// Choose a move for the side to move with the default engine.
pub fn choose_move(board: &Board) -> Option<Pos> {
    AIEngine::new().get_move(board, board.turn())
}
