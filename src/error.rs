//! Error types
//!
//! The search itself never fails; these errors live at the boundaries where
//! untrusted boards and commands enter the crate.

use thiserror::Error;

use crate::board::Stone;

/// Errors raised when a board or move crosses into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
    #[error("cell ({row}, {col}) holds invalid value {value}")]
    InvalidCell { row: u8, col: u8, value: i8 },
    #[error("side to move must be Black or White")]
    NoSideToMove,
    #[error("no move available: the board is full")]
    BoardFull,
}

/// Errors raised by the room host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("room limit of {0} reached")]
    RoomLimit(usize),
    #[error("room {room} is full ({limit} players)")]
    RoomFull { room: String, limit: usize },
    #[error("stone limit of {0} reached")]
    StoneLimit(usize),
    #[error("it is {expected:?}'s turn")]
    WrongTurn { expected: Stone },
    #[error("player {0} is spectating and cannot place stones")]
    Spectator(u32),
    #[error("player {0} is not in a room")]
    NotInRoom(u32),
    #[error("game is already over")]
    GameOver,
    #[error("position changed while the AI was thinking")]
    StaleMove,
    #[error("malformed command: {0}")]
    Parse(String),
    #[error(transparent)]
    Game(#[from] GameError),
}
