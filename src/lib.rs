//! Five-in-a-row AI engine with a multi-room host
//!
//! Freestyle gomoku on a 15x15 board: five or more in a row wins.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation (grid + side to move)
//! - [`rules`]: Win detection
//! - [`eval`]: Open three / open four detection and static evaluation
//! - [`search`]: Candidate generation, tactics, threat-space and negamax search
//! - [`engine`]: Main AI engine integrating all components
//! - [`host`]: Room registry, text protocol and TCP server
//! - `ui`: Desktop client (feature `gui`)
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! let mut engine = AIEngine::new();
//! if let Some(pos) = engine.get_move(&board, Stone::White) {
//!     board.place_stone(pos, Stone::White);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search Priority
//!
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Threat-space search for a forced win
//! 4. Negamax with alpha-beta pruning

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod host;
pub mod rules;
pub mod search;
#[cfg(feature = "gui")]
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{choose_move, AIEngine, EngineConfig, MoveResult, SearchType};
pub use error::{GameError, HostError};
